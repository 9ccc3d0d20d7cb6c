use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use mealproxy::{Res, config, server};

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
)]
struct Cli {
    /// Port to bind, overriding BACKEND_PORT
    #[clap(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Res<()> {
    let cli = Cli::parse();

    config::load_env();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    server::start_api_server(cli.port).await
}
