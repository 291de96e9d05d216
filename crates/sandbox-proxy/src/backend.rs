use crate::prelude::Error;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use sandbox_proxy_core::config::ProxyConfig;
use sandbox_proxy_core::request::{bearer_token, completions_url};
use sandbox_proxy_core::types::ChatCompletionRequest;

/// Send a chat-completion request and return the backend's JSON reply.
///
/// The reply is returned whatever the HTTP status was. A fresh client is
/// built for every call; nothing is pooled across requests.
pub async fn send_chat_request(
    config: &ProxyConfig,
    request: &ChatCompletionRequest,
) -> Result<serde_json::Value, Error> {
    let url = completions_url(config);

    let client = reqwest::Client::builder()
        .build()
        .map_err(|e| Error::Upstream(format!("Failed to build HTTP client: {e}")))?;

    // `json` also sets `Content-Type: application/json`.
    let mut builder = client.post(&url).json(request);

    if let Some(token) = bearer_token(config) {
        let value = HeaderValue::from_str(&token)
            .map_err(|e| Error::InvalidHeader(format!("Authorization: {e}")))?;
        builder = builder.header(AUTHORIZATION, value);
    }

    log::debug!("POST {url} (model: {})", request.model);

    let response = builder
        .send()
        .await
        .map_err(|e| Error::Upstream(format!("POST {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("Backend answered {status}, forwarding its body unchanged");
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Upstream(format!("Failed to read response body: {e}")))?;

    serde_json::from_slice(&bytes).map_err(|e| Error::ResponseParse(e.to_string()))
}
