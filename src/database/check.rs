//! Schema reflection for the archive tables.
//!
//! Nothing about the tables is declared up front. At startup the live
//! column catalog is read, each table is bound to a [`Table`] handle, and
//! the handles are checked against the columns the queries rely on.
use super::*;
use anyhow::Context;
use anyhow::bail;
use std::collections::BTreeMap;
use tokio_postgres::Client;

/// Coarse classification of a PostgreSQL column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Date,
    Integer,
    Float,
    Other,
}

impl From<&str> for Kind {
    fn from(data_type: &str) -> Self {
        match data_type {
            "text" | "character varying" | "character" | "name" => Self::Text,
            "date" => Self::Date,
            "smallint" | "integer" | "bigint" => Self::Integer,
            "real" | "double precision" | "numeric" => Self::Float,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub kind: Kind,
}

/// Reflected handle to one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
    pub fn has(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
    fn require(&self, name: &str, kinds: &[Kind]) -> anyhow::Result<()> {
        match self.column(name) {
            None => bail!("column {}.{} not found", self.name, name),
            Some(c) if !kinds.contains(&c.kind) => bail!(
                "column {}.{} has unsupported type {}",
                self.name,
                name,
                c.data_type
            ),
            Some(_) => Ok(()),
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        for column in self.columns.iter() {
            writeln!(f, "  {:<12} {}", column.name, column.data_type)?;
        }
        Ok(())
    }
}

#[rustfmt::skip]
const MEASUREMENT_COLUMNS: &[(&str, &[Kind])] = &[
    ("date",    &[Kind::Text, Kind::Date]),
    ("prcp",    &[Kind::Integer, Kind::Float]),
    ("tobs",    &[Kind::Integer, Kind::Float]),
    ("station", &[Kind::Text]),
];
#[rustfmt::skip]
const STATION_COLUMNS: &[(&str, &[Kind])] = &[
    ("id",      &[Kind::Integer]),
    ("station", &[Kind::Text]),
    ("name",    &[Kind::Text]),
];

/// Reflected archive: one handle per table the queries touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub measurement: Table,
    pub station: Table,
}

impl Schema {
    /// Reads the column catalog for both archive tables and validates it.
    pub async fn reflect(client: &Client) -> anyhow::Result<Self> {
        const SQL: &str = const_format::concatcp!(
            "SELECT table_name::TEXT, ",
            "       column_name::TEXT, ",
            "       data_type::TEXT ",
            "FROM   information_schema.columns ",
            "WHERE  table_schema = current_schema() ",
            "AND    table_name IN ('", MEASUREMENT, "', '", STATION, "') ",
            "ORDER  BY table_name, ordinal_position"
        );
        let rows = client
            .query(SQL, &[])
            .await
            .context("read column catalog")?
            .iter()
            .map(|row| -> anyhow::Result<(String, String, String)> {
                Ok((row.try_get(0)?, row.try_get(1)?, row.try_get(2)?))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Self::try_from(rows)
    }
}

impl TryFrom<Vec<(String, String, String)>> for Schema {
    type Error = anyhow::Error;
    fn try_from(rows: Vec<(String, String, String)>) -> anyhow::Result<Self> {
        let mut tables = rows.into_iter().fold(
            BTreeMap::<String, Vec<Column>>::new(),
            |mut tables, (table, name, data_type)| {
                let kind = Kind::from(data_type.as_str());
                tables.entry(table).or_default().push(Column {
                    name,
                    data_type,
                    kind,
                });
                tables
            },
        );
        let mut bind = |name: &str, required: &[(&str, &[Kind])]| -> anyhow::Result<Table> {
            let columns = tables
                .remove(name)
                .ok_or_else(|| anyhow::anyhow!("table {} not found", name))?;
            let table = Table {
                name: name.to_string(),
                columns,
            };
            for (column, kinds) in required.iter() {
                table.require(column, kinds)?;
            }
            Ok(table)
        };
        let measurement = bind(MEASUREMENT, MEASUREMENT_COLUMNS)?;
        let station = bind(STATION, STATION_COLUMNS)?;
        Ok(Self {
            measurement,
            station,
        })
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.measurement, self.station)
    }
}
