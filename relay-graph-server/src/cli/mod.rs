pub mod config;

use clap::Parser;

use std::path::PathBuf;

use self::config::{Config, EnvOverride};
use crate::app::RelayApp;

#[derive(Parser)]
#[clap(long_about = None)]
struct Cli {
    #[clap(short, long, env = "RELAY_GRAPH_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
    #[clap(long, env = "RELAY_GRAPH_PORT")]
    port: Option<u16>,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_config(cli.config, EnvOverride { port: cli.port })?;

    run_cmd(config).await?;

    Ok(())
}

async fn run_cmd(config: Config) -> anyhow::Result<()> {
    relay_graph_tracing::init_tracer(config.tracing)?;
    let app = RelayApp::init(config.app)?;
    crate::server::run(config.server, app).await?;
    Ok(())
}
