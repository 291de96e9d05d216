#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Maximum request handling time, in seconds
    #[arg(long, default_value = "60")]
    pub max_duration: u64,

    /// Maximum accepted request body size, in bytes
    #[arg(long, default_value_t = 25 * 1024 * 1024)]
    pub max_body_bytes: usize,
}
