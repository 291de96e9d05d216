use sandbox_proxy_core::config::ProxyConfig;

/// Chat-completion backend settings, read from flags or environment.
#[derive(Debug, Clone, clap::Args)]
pub struct BackendArgs {
    /// Root URL of the OpenAI-compatible backend [default: http://localhost:3000]
    #[clap(long, env = "OPENWEBUI_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer credential sent to the backend
    #[clap(long, env = "OPENWEBUI_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier sent upstream [default: llama3]
    #[clap(long, env = "OLLAMA_MODEL", global = true)]
    pub model: Option<String>,
}

impl BackendArgs {
    pub fn resolve(&self) -> ProxyConfig {
        ProxyConfig::resolve(
            self.base_url.clone(),
            self.api_key.clone(),
            self.model.clone(),
        )
    }
}
