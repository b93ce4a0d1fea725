//! carstock web server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), layers
//! `CARSTOCK_*` environment variables on top, builds the shared stock
//! registry, and serves the stock page and JSON API over HTTP.
//!
//! ```
//! cargo run -p carstock-web --bin server -- --config config.toml
//! CARSTOCK_POLICY=add_only cargo run -p carstock-web --bin server
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use carstock_web::{AppState, ServerConfig};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "carstock web server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("CARSTOCK"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  tracing::info!(policy = %server_cfg.policy, "permission policy");

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  let app = carstock_web::router(AppState::new(server_cfg));

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
