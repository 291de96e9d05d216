use crate::prelude::*;
use clap::Parser;

mod backend;
mod config;
mod error;
mod exec;
mod prelude;
mod sandbox;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Forward code snippets to an OpenAI-compatible model configured as an interpreter"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    #[clap(flatten)]
    backend: crate::config::BackendArgs,

    /// Whether to display additional information.
    #[clap(
        long,
        env = "SANDBOX_PROXY_VERBOSE",
        global = true,
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Run the sandbox HTTP endpoint
    Serve(crate::server::cli::ServeOptions),

    /// Send a local code file straight to the model backend
    Exec(crate::exec::ExecOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Exec(options) => crate::exec::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
