//! Outbound replies, rendered by each adapter in its own way

/// Blue accent shared by every embed the relay sends.
pub const EMBED_COLOR: u32 = 0x34_98_DB;

/// What the relay sends back to the originating channel
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Embed(EmbedCard),
    Image { card: EmbedCard, file: ImageFile },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    /// The embed carried by this reply, if any
    pub fn card(&self) -> Option<&EmbedCard> {
        match self {
            Reply::Text(_) => None,
            Reply::Embed(card) | Reply::Image { card, .. } => Some(card),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn has_attachment(&self) -> bool {
        matches!(self, Reply::Image { .. })
    }

    /// Plain-text rendering for adapters without rich formatting
    pub fn to_plain_text(&self) -> String {
        match self {
            Reply::Text(text) => text.clone(),
            Reply::Embed(card) => card.to_plain_text(),
            Reply::Image { card, file } => {
                format!("{}\n[attachment: {} ({} bytes)]", card.to_plain_text(), file.filename, file.bytes.len())
            }
        }
    }
}

/// Platform-neutral rich message
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedCard {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub image: Option<EmbedImage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmbedImage {
    Url(String),
    /// Refers to a file uploaded alongside the message
    Attachment(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl EmbedCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            color: EMBED_COLOR,
            fields: Vec::new(),
            footer: None,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_image(mut self, image: EmbedImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn field(&self, name: &str) -> Option<&EmbedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn to_plain_text(&self) -> String {
        let mut out = format!("**{}**", self.title);
        if let Some(description) = &self.description {
            out.push('\n');
            out.push_str(description);
        }
        for field in &self.fields {
            out.push_str(&format!("\n\n{}\n{}", field.name, field.value));
        }
        if let Some(EmbedImage::Url(url)) = &self.image {
            out.push_str(&format!("\n\n{}", url));
        }
        if let Some(footer) = &self.footer {
            out.push_str(&format!("\n\n_{}_", footer));
        }
        out
    }
}
