use anyhow::Context;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Config;
use tokio_postgres::NoTls;

/// Establishes the process-wide connection.
///
/// Connects once and spawns the driver task. The returned `Arc<Client>`
/// is shared by every [`Session`]; queries from concurrent sessions are
/// pipelined over this one connection.
pub async fn connect(config: &Config) -> anyhow::Result<Arc<Client>> {
    let (client, connection) = config
        .connect(NoTls)
        .await
        .context("database connection failed")?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection error: {}", e);
        }
    });
    Ok(Arc::new(client))
}

/// Scope of a single unit of work over the shared connection.
///
/// Holds a handle to the client for as long as the request runs and
/// releases it on drop, on every exit path.
pub struct Session(Arc<Client>);

impl From<Arc<Client>> for Session {
    fn from(client: Arc<Client>) -> Self {
        log::debug!("session opened");
        Self(client)
    }
}

impl Session {
    pub fn client(&self) -> &Client {
        &self.0
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        log::debug!("session closed");
    }
}
