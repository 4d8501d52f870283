pub mod chat;

pub use chat::{ChatMessage, ContentBlock, MessageContent, Role};
