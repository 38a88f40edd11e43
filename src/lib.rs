//! Read-only JSON API over the Hawaii weather station archive.
//!
//! ## Modules
//!
//! - [`database`] — PostgreSQL connectivity, schema reflection, per-request sessions
//! - [`window`] — Date windows and the fixed dataset horizon
//! - [`dto`] — JSON response shapes
//! - [`analysis`] — Query API, HTTP handlers, server, and interactive CLI
pub mod analysis;
pub mod database;
pub mod dto;
pub mod window;

use std::num::NonZeroUsize;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Precipitation in inches.
pub type Rainfall = f64;
/// Observed temperature in degrees Fahrenheit.
pub type Temperature = f64;

// ============================================================================
// DATASET CONSTANTS
// These are baked into the archive that ships with the service. If the
// underlying tables are reloaded with newer data, these must move with it.
// ============================================================================
/// Latest observation date present in the archive.
pub const HORIZON: &str = "2017-08-23";
/// Earliest date a range query may end on.
pub const EARLIEST: &str = "2010-01-01";
/// Length of the trailing window served by the precipitation and tobs routes.
pub const TRAILING_DAYS: i64 = 365;
/// Station with the most observations in the archive.
pub const ACTIVE_STATION: &str = "USC00519281";

// ============================================================================
// RUNTIME CONFIGURATION
// ============================================================================
/// Default listen address when `BIND_ADDR` is unset.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Process configuration read once from the environment.
///
/// - `DB_URL` (required) — PostgreSQL connection string
/// - `BIND_ADDR` — listen address, defaults to [`DEFAULT_BIND`]
/// - `WORKERS` — actix worker count, defaults to one per core
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub bind: String,
    pub workers: Option<NonZeroUsize>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DB_URL").ok_or_else(|| anyhow::anyhow!("DB_URL must be set"))?;
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let workers = match lookup("WORKERS") {
            None => None,
            Some(n) => Some(
                n.parse::<NonZeroUsize>()
                    .map_err(|e| anyhow::anyhow!("WORKERS must be a positive integer: {}", e))?,
            ),
        };
        Ok(Self { url, bind, workers })
    }
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .add_filter_ignore_str("tokio_postgres")
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
