use anyhow::{Context, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::FIELD_SEPARATOR;

/// A named integer value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub name: String,
    pub value: i64,
}

impl Record {
    /// Creates a new record.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Renders the record as `"<name>: <value>"`.
    pub fn describe(&self) -> String {
        trace!("Describing record {:?}", self.name);
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{FIELD_SEPARATOR}{}", self.name, self.value)
    }
}

/// Parses a JSON array of records, e.g. `[{"name": "foo", "value": 42}]`.
pub fn load_records(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> =
        serde_json::from_str(json).context("Failed to parse records from JSON")?;
    debug!("Loaded {} records", records.len());
    Ok(records)
}

/// Describes every record, preserving order.
pub fn describe_all(records: &[Record]) -> Vec<String> {
    records.iter().map(Record::describe).collect()
}
