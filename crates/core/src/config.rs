/// Default backend root when `OPENWEBUI_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default model identifier when `OLLAMA_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "llama3";

/// Resolved chat-completion backend configuration.
///
/// Built once at startup and shared (read-only) by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl ProxyConfig {
    /// Resolve raw (possibly unset) values into a configuration.
    ///
    /// Empty strings are treated the same as unset values.
    pub fn resolve(
        base_url: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Self {
        Self {
            base_url: non_empty(base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: non_empty(api_key),
            model: non_empty(model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
