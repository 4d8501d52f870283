use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One element of a structured content list. Anything beyond the text
/// field is carried along opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Message content as submitted by chat front-ends: plain text, a list of
/// typed blocks, or an arbitrary JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other(Value),
}

impl MessageContent {
    /// Flattens the content to a single plain-text string.
    ///
    /// Plain text passes through unchanged. For block lists, the text field
    /// of the first block that has one wins. Mappings yield their text field
    /// if present. Everything else degrades to a compact JSON rendering,
    /// never an error.
    pub fn as_text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .find_map(|block| block.text.clone())
                .unwrap_or_else(|| opaque(self)),
            MessageContent::Other(value) => match value {
                Value::Object(map) => match map.get("text") {
                    Some(Value::String(text)) => text.clone(),
                    Some(other) => other.to_string(),
                    None => value.to_string(),
                },
                // Mixed lists that didn't parse as blocks: scan for the
                // first mapping that carries a text field.
                Value::Array(items) => items
                    .iter()
                    .find_map(|item| item.as_object().and_then(|map| map.get("text")))
                    .map(|text| match text {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .unwrap_or_else(|| value.to_string()),
                other => other.to_string(),
            },
        }
    }
}

fn opaque<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(content.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(value: serde_json::Value) -> MessageContent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(content(json!("patient has fever")).as_text(), "patient has fever");
    }

    #[test]
    fn block_list_yields_first_text_field() {
        let value = json!([
            {"type": "image", "url": "x-ray.png"},
            {"text": "patient has fever", "type": "text"},
            {"text": "ignored", "type": "text"}
        ]);
        assert_eq!(content(value).as_text(), "patient has fever");
    }

    #[test]
    fn mapping_yields_text_field() {
        let value = json!({"text": "patient has chest pain", "type": "text"});
        assert_eq!(content(value).as_text(), "patient has chest pain");
    }

    #[test]
    fn mapping_without_text_degrades_to_json() {
        let value = json!({"type": "audio", "url": "note.wav"});
        let text = content(value.clone()).as_text();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text).unwrap(),
            value
        );
    }

    #[test]
    fn block_list_without_text_degrades_to_json() {
        let value = json!([{"type": "image"}, {"type": "audio"}]);
        let text = content(value.clone()).as_text();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text).unwrap(),
            value
        );
    }

    #[test]
    fn mixed_list_still_finds_text_mapping() {
        let value = json!([42, "noise", {"text": "found it"}]);
        assert_eq!(content(value).as_text(), "found it");
    }

    #[test]
    fn scalar_degrades_to_json() {
        assert_eq!(content(json!(42)).as_text(), "42");
    }

    #[test]
    fn roles_round_trip_lowercase() {
        let msg: ChatMessage =
            serde_json::from_value(json!({"role": "assistant", "content": "ok"})).unwrap();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(
            serde_json::to_value(ChatMessage::user("hi")).unwrap(),
            json!({"role": "user", "content": "hi"})
        );
    }
}
