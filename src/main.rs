mod config;
mod conflicts;
mod data;
mod error;
mod grouping;
mod ingest;
mod projections;
mod report;
mod seating;
mod server;

use config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    server::run_server(config.addr()?).await?;

    Ok(())
}
