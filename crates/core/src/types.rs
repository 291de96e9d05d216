use serde::{Deserialize, Serialize};

/// A file attached to a submission, decoded as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    /// File name declared by the client.
    pub name: String,
    /// File bytes decoded as UTF-8 (invalid sequences replaced).
    pub content: String,
    /// Declared media type, empty when the client sent none.
    #[serde(rename = "contentType")]
    pub content_type: String,
}

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single role-tagged chat message.
///
/// `content` is skipped when `None`, so a submission without a `code`
/// field produces `{"role":"user"}` upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(content.into()),
        }
    }

    pub fn user(content: Option<String>) -> Self {
        Self {
            role: Role::User,
            content,
        }
    }
}

/// Body of an OpenAI-compatible `POST /v1/chat/completions` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attached_file_uses_camel_case_content_type() {
        let file = AttachedFile {
            name: "a.txt".to_string(),
            content: "hello".to_string(),
            content_type: "text/plain".to_string(),
        };

        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "a.txt", "content": "hello", "contentType": "text/plain"})
        );
    }

    #[test]
    fn test_user_message_without_content_omits_key() {
        let json = serde_json::to_string(&ChatMessage::user(None)).unwrap();
        assert_eq!(json, r#"{"role":"user"}"#);
    }

    #[test]
    fn test_system_message_serialization() {
        let json = serde_json::to_string(&ChatMessage::system("hi")).unwrap();
        assert_eq!(json, r#"{"role":"system","content":"hi"}"#);
    }
}
