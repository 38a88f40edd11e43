use crate::ACTIVE_STATION;
use crate::database::*;
use crate::dto::*;
use crate::window;
use crate::window::Window;
use std::sync::Arc;

/// Route-level queries. Each call opens one session and drops it before
/// returning, so nothing outlives the request.
pub struct API(Arc<dyn Archive>);

impl From<Arc<dyn Archive>> for API {
    fn from(archive: Arc<dyn Archive>) -> Self {
        Self(archive)
    }
}

impl API {
    pub fn new(archive: impl Archive + 'static) -> Self {
        Self(Arc::new(archive))
    }
    pub fn schema(&self) -> &Schema {
        self.0.schema()
    }
}

impl API {
    pub async fn ping(&self) -> anyhow::Result<()> {
        let session = self.0.session().await?;
        session.ping().await
    }
    /// Precipitation for every station over the trailing year.
    pub async fn precipitation(&self) -> anyhow::Result<Vec<Precipitation>> {
        let since = window::since()?;
        let session = self.0.session().await?;
        session.precipitation(&since).await
    }
    pub async fn stations(&self) -> anyhow::Result<Vec<Station>> {
        let session = self.0.session().await?;
        session.stations().await
    }
    /// Temperature observations of the most active station over the trailing year.
    pub async fn tobs(&self) -> anyhow::Result<Vec<Observation>> {
        let since = window::since()?;
        let session = self.0.session().await?;
        session.observations(ACTIVE_STATION, &since).await
    }
    pub async fn summary(&self, window: &Window) -> anyhow::Result<Summary> {
        let session = self.0.session().await?;
        session.summary(window).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn precipitation_covers_trailing_year() {
        let api = API::new(Memory::hawaii());
        let rows = api.precipitation().await.unwrap();
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r.date.as_str() >= "2016-08-23"));
        assert!(rows.iter().any(|r| r.value.is_none()));
    }
    #[tokio::test]
    async fn tobs_is_active_station_only() {
        let api = API::new(Memory::hawaii());
        let rows = api.tobs().await.unwrap();
        let dates = rows.iter().map(|r| r.date.as_str()).collect::<Vec<_>>();
        assert_eq!(dates, vec!["2016-08-23", "2016-08-24", "2017-08-18"]);
    }
    #[tokio::test]
    async fn stations_are_ordered_by_id() {
        let api = API::new(Memory::hawaii());
        let ids = api
            .stations()
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 7]);
    }
    #[tokio::test]
    async fn summary_over_2016() {
        let api = API::new(Memory::hawaii());
        let window = Window::between("2016-01-01", "2016-12-31").unwrap();
        let summary = api.summary(&window).await.unwrap();
        assert_eq!(summary.tmin, Some(62.0));
        assert_eq!(summary.tavg, Some(74.875));
        assert_eq!(summary.tmax, Some(81.0));
    }
    #[tokio::test]
    async fn summary_over_nothing_is_empty() {
        let api = API::new(Memory::hawaii());
        let window = Window::between("2016-12-31", "2016-01-01").unwrap();
        assert_eq!(api.summary(&window).await.unwrap(), Summary::default());
    }
    #[tokio::test]
    async fn duplicate_readings_have_one_order() {
        let m = |prcp, tobs| Measurement {
            station: crate::ACTIVE_STATION,
            date: "2017-01-01",
            prcp,
            tobs,
        };
        let rows = vec![m(Some(0.5), 70.0), m(None, 72.0), m(Some(0.1), 68.0)];
        let mut reversed = rows.clone();
        reversed.reverse();
        let forward = API::new(Memory::new(rows, vec![]));
        let backward = API::new(Memory::new(reversed, vec![]));
        let prcp = forward.precipitation().await.unwrap();
        assert_eq!(
            prcp.iter().map(|r| r.value).collect::<Vec<_>>(),
            vec![None, Some(0.1), Some(0.5)]
        );
        assert_eq!(prcp, backward.precipitation().await.unwrap());
        let tobs = forward.tobs().await.unwrap();
        assert_eq!(
            tobs.iter().map(|r| r.value).collect::<Vec<_>>(),
            vec![Some(68.0), Some(70.0), Some(72.0)]
        );
        assert_eq!(tobs, backward.tobs().await.unwrap());
    }
    #[tokio::test]
    async fn offline_archive_errors() {
        let api = API::new(Memory::offline());
        assert!(api.ping().await.is_err());
        assert!(api.stations().await.is_err());
    }
}
