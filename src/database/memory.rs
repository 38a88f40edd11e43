//! In-memory archive for tests.
//!
//! Mirrors the SQL in [`Source`] for `Session`: text date comparison,
//! the same row ordering, and null aggregates over empty windows.
use super::*;
use crate::dto::*;
use crate::window::Window;
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Measurement {
    pub station: &'static str,
    pub date: &'static str,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

#[derive(Clone)]
pub struct Memory {
    measurements: Arc<Vec<Measurement>>,
    stations: Arc<Vec<Station>>,
    schema: Schema,
    offline: bool,
}

impl Memory {
    pub fn new(measurements: Vec<Measurement>, stations: Vec<Station>) -> Self {
        let catalog = [
            (MEASUREMENT, "station", "text"),
            (MEASUREMENT, "date", "text"),
            (MEASUREMENT, "prcp", "double precision"),
            (MEASUREMENT, "tobs", "double precision"),
            (STATION, "id", "integer"),
            (STATION, "station", "text"),
            (STATION, "name", "text"),
        ]
        .iter()
        .map(|(t, c, d)| (t.to_string(), c.to_string(), d.to_string()))
        .collect::<Vec<_>>();
        Self {
            measurements: Arc::new(measurements),
            stations: Arc::new(stations),
            schema: Schema::try_from(catalog).expect("fixture schema"),
            offline: false,
        }
    }
    /// Archive whose sessions always fail to open.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::new(vec![], vec![])
        }
    }
    /// Small slice of the Hawaii archive straddling the trailing-year boundary.
    #[rustfmt::skip]
    pub fn hawaii() -> Self {
        let m = |station, date, prcp, tobs| Measurement { station, date, prcp, tobs };
        let s = |id, station: &str, name: &str| Station { id, station: station.to_string(), name: name.to_string() };
        Self::new(
            vec![
                m("USC00519397", "2010-01-01", Some(0.08), 65.0),
                m("USC00519281", "2010-01-01", Some(0.15), 70.0),
                m("USC00519397", "2016-01-01", Some(0.00), 62.0),
                m("USC00519281", "2016-06-15", None,       77.0),
                m("USC00519397", "2016-12-31", Some(0.02), 71.0),
                m("USC00519281", "2016-08-22", Some(0.40), 76.0),
                m("USC00519281", "2016-08-23", Some(1.79), 77.0),
                m("USC00519397", "2016-08-23", Some(0.00), 81.0),
                m("USC00513117", "2016-08-24", None,       78.0),
                m("USC00519281", "2016-08-24", Some(2.15), 77.0),
                m("USC00519281", "2017-08-18", None,       79.0),
                m("USC00519397", "2017-08-23", Some(0.00), 81.0),
            ],
            vec![
                s(1, "USC00519397", "WAIKIKI 717.2, HI US"),
                s(2, "USC00513117", "KANEOHE 838.1, HI US"),
                s(7, "USC00519281", "WAIHEE 837.5, HI US"),
            ],
        )
    }
    /// Date, then station, then precipitation with nulls first.
    fn sorted(&self) -> Vec<&Measurement> {
        let mut rows = self.measurements.iter().collect::<Vec<_>>();
        rows.sort_by(|a, b| {
            (a.date, a.station)
                .cmp(&(b.date, b.station))
                .then_with(|| a.prcp.partial_cmp(&b.prcp).unwrap_or(Ordering::Equal))
        });
        rows
    }
}

#[async_trait::async_trait]
impl Archive for Memory {
    async fn session(&self) -> anyhow::Result<Box<dyn Source>> {
        match self.offline {
            true => Err(anyhow::anyhow!("database connection failed")),
            false => Ok(Box::new(self.clone())),
        }
    }
    fn schema(&self) -> &Schema {
        &self.schema
    }
}

#[async_trait::async_trait]
impl Source for Memory {
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
    async fn precipitation(&self, since: &str) -> anyhow::Result<Vec<Precipitation>> {
        Ok(self
            .sorted()
            .into_iter()
            .filter(|m| m.date >= since)
            .map(|m| Reading {
                date: m.date.to_string(),
                value: m.prcp,
            })
            .collect())
    }
    async fn stations(&self) -> anyhow::Result<Vec<Station>> {
        let mut stations = self.stations.as_ref().clone();
        stations.sort_by(|a, b| (a.id, &a.station, &a.name).cmp(&(b.id, &b.station, &b.name)));
        Ok(stations)
    }
    async fn observations(&self, station: &str, since: &str) -> anyhow::Result<Vec<Observation>> {
        let mut rows = self
            .measurements
            .iter()
            .filter(|m| m.station == station)
            .filter(|m| m.date >= since)
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| {
            a.date
                .cmp(b.date)
                .then_with(|| a.tobs.total_cmp(&b.tobs))
        });
        Ok(rows
            .into_iter()
            .map(|m| Reading {
                date: m.date.to_string(),
                value: Some(m.tobs),
            })
            .collect())
    }
    async fn summary(&self, window: &Window) -> anyhow::Result<Summary> {
        let temps = self
            .measurements
            .iter()
            .filter(|m| window.contains(m.date))
            .map(|m| m.tobs)
            .collect::<Vec<_>>();
        if temps.is_empty() {
            return Ok(Summary::default());
        }
        Ok(Summary {
            tmin: temps.iter().copied().reduce(f64::min),
            tavg: Some(temps.iter().sum::<f64>() / temps.len() as f64),
            tmax: temps.iter().copied().reduce(f64::max),
        })
    }
}
