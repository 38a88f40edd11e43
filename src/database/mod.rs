//! Read-only access to the weather archive in PostgreSQL.
//!
//! ## Connectivity
//!
//! - [`connect()`] — Opens the one connection the process holds
//! - [`Store`] — Process-wide handle: shared client plus the reflected schema
//! - [`Session`] — Per-request scope over the shared client, released on drop
//!
//! ## Traits
//!
//! - [`Archive`] — Anything that can open sessions
//! - [`Source`] — All SELECT queries against the archive
//!
//! ## Schema
//!
//! - [`Schema`] — Reflected `measurement` and `station` tables, validated at startup
mod check;
#[cfg(test)]
mod memory;
mod session;
mod source;

pub use check::*;
#[cfg(test)]
pub use memory::*;
pub use session::*;
pub use source::*;

use anyhow::Context;
use std::sync::Arc;
use tokio_postgres::Client;

/// Table of daily observations (date, precipitation, temperature, station).
#[rustfmt::skip]
pub const MEASUREMENT: &str = "measurement";
/// Table of station metadata.
#[rustfmt::skip]
pub const STATION:     &str = "station";

/// Server options for the connection: nothing can write, and dates
/// render as `YYYY-MM-DD` whatever the server default is.
const OPTIONS: &str = "-c default_transaction_read_only=on -c DateStyle=ISO";

/// Appends [`OPTIONS`] to any options already present in the url.
fn options(existing: Option<&str>) -> String {
    match existing {
        Some(existing) if !existing.is_empty() => format!("{} {}", existing, OPTIONS),
        _ => OPTIONS.to_string(),
    }
}

/// Opens sessions against the archive.
#[async_trait::async_trait]
pub trait Archive: Send + Sync {
    /// Opens a session scoped to one unit of work.
    async fn session(&self) -> anyhow::Result<Box<dyn Source>>;
    /// Schema reflected at startup.
    fn schema(&self) -> &Schema;
}

/// Process-wide database handle.
///
/// Connected and reflected once at startup, then held for the process
/// lifetime. Every session borrows the same client.
pub struct Store {
    client: Arc<Client>,
    schema: Schema,
}

impl Store {
    /// Parses `url`, connects, and reflects the archive tables.
    ///
    /// Fails if the store is unreachable or either table is missing or
    /// malformed. Callers should treat this as fatal.
    pub async fn open(url: &str) -> anyhow::Result<Self> {
        log::info!("connecting to database");
        let mut config = url
            .parse::<tokio_postgres::Config>()
            .context("parse database url")?;
        let options = options(config.get_options());
        config.options(&options);
        let client = connect(&config).await?;
        let schema = Schema::reflect(&client)
            .await
            .context("reflect archive schema")?;
        log::info!("reflected schema\n{}", schema);
        Ok(Self { client, schema })
    }
    /// Scopes a session over the shared client.
    pub fn scope(&self) -> anyhow::Result<Session> {
        match self.client.is_closed() {
            true => Err(anyhow::anyhow!("database connection closed")),
            false => Ok(Session::from(self.client.clone())),
        }
    }
}

#[async_trait::async_trait]
impl Archive for Store {
    async fn session(&self) -> anyhow::Result<Box<dyn Source>> {
        Ok(Box::new(self.scope()?))
    }
    fn schema(&self) -> &Schema {
        &self.schema
    }
}
