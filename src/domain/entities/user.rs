/// Author of an inbound chat message
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: String,
    pub is_bot: bool,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_bot: false,
        }
    }

    pub fn as_bot(mut self) -> Self {
        self.is_bot = true;
        self
    }
}
