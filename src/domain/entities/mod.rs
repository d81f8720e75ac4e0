//! Domain entities - Core business objects with no platform dependencies

pub mod user;
pub mod message;
pub mod command;
pub mod reply;
pub mod space_weather;

pub use user::User;
pub use message::Message;
pub use command::{CommandKind, Invocation};
pub use reply::{EmbedCard, EmbedField, EmbedImage, ImageFile, Reply, EMBED_COLOR};
pub use space_weather::{
    AceData, AuroraReport, ImageBlob, ImageCatalog, ImageCategory, ImageEntry, ProbabilityData,
};
