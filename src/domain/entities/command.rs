/// Commands the relay understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Aurora,
    Cameras,
    Charts,
    Satellites,
    View,
    Help,
}

impl CommandKind {
    /// Every command, in the order `help` lists them.
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Aurora,
        CommandKind::Cameras,
        CommandKind::Charts,
        CommandKind::Satellites,
        CommandKind::View,
        CommandKind::Help,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            CommandKind::Aurora => "aurora",
            CommandKind::Cameras => "cameras",
            CommandKind::Charts => "charts",
            CommandKind::Satellites => "satellites",
            CommandKind::View => "view",
            CommandKind::Help => "help",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommandKind::Aurora => "Get aurora information for a location",
            CommandKind::Cameras => "List all available aurora webcams",
            CommandKind::Charts => "List all available charts and graphs",
            CommandKind::Satellites => "List all available satellite images",
            CommandKind::View => "View a specific image",
            CommandKind::Help => "Show this help message",
        }
    }

    /// Usage without the prefix, e.g. `aurora <latitude> <longitude>`
    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Aurora => "aurora <latitude> <longitude>",
            CommandKind::View => "view <image_id>",
            other => other.keyword(),
        }
    }

    /// Case-insensitive keyword lookup
    pub fn from_keyword(input: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(input))
    }
}

/// A recognized command together with its raw arguments and origin
#[derive(Debug, Clone)]
pub struct Invocation {
    pub kind: CommandKind,
    pub args: Vec<String>,
    pub channel_id: String,
    pub user_id: String,
}

impl Invocation {
    pub fn new(kind: CommandKind, args: Vec<String>) -> Self {
        Self {
            kind,
            args,
            channel_id: String::new(),
            user_id: String::new(),
        }
    }

    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyword_is_case_insensitive() {
        assert_eq!(CommandKind::from_keyword("AURORA"), Some(CommandKind::Aurora));
        assert_eq!(CommandKind::from_keyword("Satellites"), Some(CommandKind::Satellites));
        assert_eq!(CommandKind::from_keyword("kp"), None);
        assert_eq!(CommandKind::from_keyword(""), None);
    }

    #[test]
    fn test_keywords_are_unique() {
        for (i, a) in CommandKind::ALL.iter().enumerate() {
            for b in &CommandKind::ALL[i + 1..] {
                assert_ne!(a.keyword(), b.keyword());
            }
        }
    }
}
