//! Hawaii weather API server.
//!
//! Reflects the archive schema, then serves the JSON routes over HTTP.
//! Refuses to bind if the archive is unreachable or malformed.

use hawaii::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    let config = Config::from_env()?;
    let store = database::Store::open(&config.url).await?;
    analysis::Server::run(analysis::API::new(store), &config).await?;
    Ok(())
}
