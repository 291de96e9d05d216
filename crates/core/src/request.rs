use crate::config::ProxyConfig;
use crate::types::{ChatCompletionRequest, ChatMessage};

/// System prompt that turns the model into a code interpreter.
pub const SYSTEM_PROMPT: &str = "You are a python interpreter.";

/// Path of the chat-completion endpoint, relative to the backend root.
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Build the chat-completion request for a code snippet.
///
/// The conversation is always the system prompt followed by the code as the
/// user message. Streaming is disabled.
pub fn build_chat_request(config: &ProxyConfig, code: Option<String>) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(code)],
        stream: false,
    }
}

/// Full URL of the chat-completion endpoint.
pub fn completions_url(config: &ProxyConfig) -> String {
    format!(
        "{}{COMPLETIONS_PATH}",
        config.base_url.trim_end_matches('/')
    )
}

/// `Authorization` header value, only when a credential is configured.
pub fn bearer_token(config: &ProxyConfig) -> Option<String> {
    config.api_key.as_ref().map(|key| format!("Bearer {key}"))
}
