use super::*;
use anyhow::Context;
use crate::dto::*;
use crate::window::Window;
use const_format::concatcp;

/// Source defines the read interface between response types and PostgreSQL.
/// All SELECT queries are consolidated here, decoupling SQL from handlers.
///
/// Dates are compared as text so that TEXT and DATE columns behave alike.
/// Every listing is ordered on all the columns it returns, so rows that
/// tie on the sort key are indistinguishable in the output.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Round-trips a trivial query.
    async fn ping(&self) -> anyhow::Result<()>;
    /// Precipitation on or after `since`, every station.
    async fn precipitation(&self, since: &str) -> anyhow::Result<Vec<Precipitation>>;
    /// Every station.
    async fn stations(&self) -> anyhow::Result<Vec<Station>>;
    /// Temperature observations of one station on or after `since`.
    async fn observations(&self, station: &str, since: &str) -> anyhow::Result<Vec<Observation>>;
    /// Min/avg/max temperature inside `window`.
    async fn summary(&self, window: &Window) -> anyhow::Result<Summary>;
}

#[rustfmt::skip]
#[async_trait::async_trait]
impl Source for Session {
    async fn ping(&self) -> anyhow::Result<()> {
        self.client()
            .execute("SELECT 1", &[])
            .await
            .context("ping")?;
        Ok(())
    }
    async fn precipitation(&self, since: &str) -> anyhow::Result<Vec<Precipitation>> {
        const SQL: &str = concatcp!(
            "SELECT date::TEXT, ",
                   "prcp::DOUBLE PRECISION ",
            "FROM   ", MEASUREMENT, " ",
            "WHERE  date::TEXT >= $1 ",
            "ORDER  BY date, station, prcp NULLS FIRST"
        );
        self.client()
            .query(SQL, &[&since])
            .await
            .context("fetch precipitation")?
            .iter()
            .map(|row| -> anyhow::Result<Precipitation> {
                Ok(Reading { date: row.try_get(0)?, value: row.try_get(1)? })
            })
            .collect()
    }
    async fn stations(&self) -> anyhow::Result<Vec<Station>> {
        const SQL: &str = concatcp!(
            "SELECT id::BIGINT, ",
                   "station::TEXT, ",
                   "name::TEXT ",
            "FROM   ", STATION, " ",
            "ORDER  BY id, station, name"
        );
        self.client()
            .query(SQL, &[])
            .await
            .context("fetch stations")?
            .iter()
            .map(|row| -> anyhow::Result<Station> {
                Ok(Station {
                    id: row.try_get(0)?,
                    station: row.try_get(1)?,
                    name: row.try_get(2)?,
                })
            })
            .collect()
    }
    async fn observations(&self, station: &str, since: &str) -> anyhow::Result<Vec<Observation>> {
        const SQL: &str = concatcp!(
            "SELECT date::TEXT, ",
                   "tobs::DOUBLE PRECISION ",
            "FROM   ", MEASUREMENT, " ",
            "WHERE  station::TEXT = $1 ",
            "AND    date::TEXT   >= $2 ",
            "ORDER  BY date, tobs NULLS FIRST"
        );
        self.client()
            .query(SQL, &[&station, &since])
            .await
            .context("fetch temperature observations")?
            .iter()
            .map(|row| -> anyhow::Result<Observation> {
                Ok(Reading { date: row.try_get(0)?, value: row.try_get(1)? })
            })
            .collect()
    }
    async fn summary(&self, window: &Window) -> anyhow::Result<Summary> {
        const SELECT: &str = concatcp!(
            "SELECT MIN(tobs)::DOUBLE PRECISION, ",
                   "AVG(tobs)::DOUBLE PRECISION, ",
                   "MAX(tobs)::DOUBLE PRECISION ",
            "FROM   ", MEASUREMENT, " "
        );
        const OPEN: &str = concatcp!(SELECT, "WHERE date::TEXT >= $1");
        const SHUT: &str = concatcp!(SELECT, "WHERE date::TEXT BETWEEN $1 AND $2");
        let start = window.start();
        let row = match window.end() {
            None => self.client().query_one(OPEN, &[&start]).await,
            Some(end) => self.client().query_one(SHUT, &[&start, &end]).await,
        }
        .context("fetch temperature summary")?;
        Ok(Summary {
            tmin: row.try_get(0)?,
            tavg: row.try_get(1)?,
            tmax: row.try_get(2)?,
        })
    }
}
