//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Default Auroras.live API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.auroras.live/v1/";

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub adapters: AdaptersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_seconds: 10,
            user_agent: format!("aurora-relay/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub discord: Option<DiscordConfig>,
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiscordConfig {
    pub enabled: bool,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
}

/// Adapter chosen for `run`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterChoice {
    Discord(String),
    Console,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "Celestia".to_string(),
                prefix: "!".to_string(),
            },
            api: ApiConfig::default(),
            adapters: AdaptersConfig {
                discord: Some(DiscordConfig {
                    enabled: false,
                    token: None,
                }),
                console: Some(ConsoleConfig {
                    enabled: true,
                }),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.trim().is_empty() {
            return Err(ConfigError::MissingField("bot.prefix".to_string()));
        }
        if self.bot.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue("bot.prefix must not contain whitespace".to_string()));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(format!("api.base-url: {}", self.api.base_url)));
        }
        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue("api.timeout-seconds must be positive".to_string()));
        }
        Ok(())
    }

    /// The Discord token, if Discord is enabled and a token is set
    pub fn discord_token(&self) -> Option<String> {
        self.adapters
            .discord
            .as_ref()
            .filter(|d| d.enabled)
            .and_then(|d| d.token.clone())
            .filter(|t| !t.trim().is_empty())
    }

    /// Console fallback is on unless `adapters.console.enabled` is false
    pub fn console_enabled(&self) -> bool {
        self.adapters.console.as_ref().map_or(true, |c| c.enabled)
    }

    /// Discord when a token is available, else the console if it is enabled
    pub fn select_adapter(&self, token_override: Option<String>) -> Result<AdapterChoice, ConfigError> {
        let token = token_override
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.discord_token());

        match token {
            Some(token) => Ok(AdapterChoice::Discord(token)),
            None if self.console_enabled() => Ok(AdapterChoice::Console),
            None => Err(ConfigError::MissingField(
                "adapters.discord.token (console adapter is disabled)".to_string(),
            )),
        }
    }

    /// Overlay environment variables onto this config
    pub fn apply_env(mut self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok());
        self
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(token) = var("DISCORD_TOKEN").filter(|t| !t.trim().is_empty()) {
            let discord = self.adapters.discord.get_or_insert(DiscordConfig {
                enabled: true,
                token: None,
            });
            discord.token = Some(token);
            discord.enabled = true;
        }

        if let Some(prefix) = var("BOT_PREFIX").filter(|p| !p.trim().is_empty()) {
            self.bot.prefix = prefix;
        }

        if let Some(base_url) = var("AURORAS_API_URL").filter(|u| !u.trim().is_empty()) {
            self.api.base_url = base_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_roundtrips_through_yaml() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("base-url"));
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.bot.prefix, "!");
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert!(config.discord_token().is_none());
    }

    #[test]
    fn test_minimal_yaml_fills_defaults() {
        let config = Config::from_yaml("bot:\n  name: Celestia\n  prefix: '?'\n").unwrap();
        assert_eq!(config.bot.prefix, "?");
        assert_eq!(config.api.timeout_seconds, 10);
        assert!(config.adapters.discord.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_yaml("bot:\n  name: x\n  prefix: ''\n").is_err());
        assert!(Config::from_yaml("bot:\n  name: x\n  prefix: '!'\napi:\n  base-url: ftp://x\n  timeout-seconds: 5\n  user-agent: t\n").is_err());
        assert!(Config::from_yaml("not: [valid").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DISCORD_TOKEN", "abc.def"),
            ("BOT_PREFIX", "sw!"),
            ("AURORAS_API_URL", "http://localhost:9999/v1/"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.discord_token().as_deref(), Some("abc.def"));
        assert_eq!(config.bot.prefix, "sw!");
        assert_eq!(config.api.base_url, "http://localhost:9999/v1/");
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let mut config = Config::default();
        config.apply_vars(|key| (key == "DISCORD_TOKEN").then(|| "  ".to_string()));
        assert!(config.discord_token().is_none());
    }

    #[test]
    fn test_adapter_selection() {
        let mut config = Config::default();
        assert!(config.console_enabled());
        assert_eq!(config.select_adapter(None).unwrap(), AdapterChoice::Console);
        assert_eq!(
            config.select_adapter(Some("cli.token".to_string())).unwrap(),
            AdapterChoice::Discord("cli.token".to_string())
        );

        config.apply_vars(|key| (key == "DISCORD_TOKEN").then(|| "env.token".to_string()));
        assert_eq!(config.select_adapter(None).unwrap(), AdapterChoice::Discord("env.token".to_string()));
    }

    #[test]
    fn test_disabled_console_without_token_is_an_error() {
        let config = Config::from_yaml(
            "bot:\n  name: Celestia\n  prefix: '!'\nadapters:\n  console:\n    enabled: false\n",
        )
        .unwrap();

        assert!(!config.console_enabled());
        assert!(matches!(config.select_adapter(None), Err(ConfigError::MissingField(_))));
        assert!(matches!(config.select_adapter(Some("  ".to_string())), Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_missing_console_section_keeps_fallback() {
        let config = Config::from_yaml("bot:\n  name: Celestia\n  prefix: '!'\n").unwrap();
        assert!(config.console_enabled());
        assert_eq!(config.select_adapter(None).unwrap(), AdapterChoice::Console);
    }
}
