use crate::Rainfall;
use crate::Temperature;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;
use std::collections::BTreeMap;

/// One dated observation, serialized as `{"<date>": value}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading<T> {
    pub date: String,
    pub value: T,
}

impl<T> From<(String, T)> for Reading<T> {
    fn from((date, value): (String, T)) -> Self {
        Self { date, value }
    }
}

impl<T: Serialize> Serialize for Reading<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.value)?;
        map.end()
    }
}

/// Daily precipitation; `None` where the station reported nothing.
pub type Precipitation = Reading<Option<Rainfall>>;
/// Daily temperature observation.
pub type Observation = Reading<Option<Temperature>>;

/// Station listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    #[serde(rename = "Id")]
    pub id: i64,
    pub station: String,
    pub name: String,
}

/// Min/avg/max temperature over a window.
///
/// Serialized as `[{"TMIN": x}, {"TAVG": y}, {"TMAX": z}]`. Every field is
/// `None` when the window matched no rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub tmin: Option<Temperature>,
    pub tavg: Option<Temperature>,
    pub tmax: Option<Temperature>,
}

impl Summary {
    fn entries(&self) -> [(&'static str, Option<Temperature>); 3] {
        [("TMIN", self.tmin), ("TAVG", self.tavg), ("TMAX", self.tmax)]
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        for entry in self.entries() {
            seq.serialize_element(&BTreeMap::from([entry]))?;
        }
        seq.end()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in self.entries() {
            match value {
                Some(t) => writeln!(f, "{} {:>8.2}", key, t)?,
                None => writeln!(f, "{} {:>8}", key, "-")?,
            }
        }
        Ok(())
    }
}
