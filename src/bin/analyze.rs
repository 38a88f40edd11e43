//! Analysis CLI Binary
//!
//! Interactive prompt over the same queries the HTTP server answers.

use hawaii::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    let config = Config::from_env()?;
    let store = database::Store::open(&config.url).await?;
    analysis::CLI::from(analysis::API::new(store)).run().await
}
