//! Schema definitions for telemetry synthesis.
//!
//! A [`SynthSchema`] describes one generation request: the time window,
//! the base metadata stamped on every record, and the set of measurement
//! units to synthesize readings for. Schemas are plain serde types and are
//! usually loaded from YAML files.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Window bound that is neither unix seconds nor a recognized timestamp
    #[error("Unparseable timestamp: {0}")]
    InvalidTimestamp(String),
}

/// A point in time, given either as unix seconds or as a timestamp string.
///
/// YAML schemas may spell window bounds as plain integers (`start: 0`) or
/// as RFC 3339 timestamps (`start: "2026-01-01T00:00:00Z"`); both resolve
/// to unix seconds before generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeSpec {
    /// Seconds since the unix epoch
    Unix(i64),
    /// RFC 3339 timestamp or `YYYY-MM-DD` date
    Text(String),
}

impl TimeSpec {
    /// Resolve to unix seconds.
    pub fn as_unix_seconds(&self) -> Result<i64, SchemaError> {
        match self {
            TimeSpec::Unix(secs) => Ok(*secs),
            TimeSpec::Text(s) => {
                parse_unix_seconds(s).ok_or_else(|| SchemaError::InvalidTimestamp(s.clone()))
            }
        }
    }
}

impl From<i64> for TimeSpec {
    fn from(secs: i64) -> Self {
        TimeSpec::Unix(secs)
    }
}

impl From<&str> for TimeSpec {
    fn from(s: &str) -> Self {
        TimeSpec::Text(s.to_string())
    }
}

/// Parse a timestamp string in the formats schemas commonly use.
fn parse_unix_seconds(s: &str) -> Option<i64> {
    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp());
    }

    // Try common date-only format
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }

    None
}

/// One value range a reading may fall into, with its selection weight.
///
/// Categories are kept as a single ordered list so the weight and the range
/// for an index can never drift apart. Weights are relative only; they are
/// not required to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Relative selection weight, non-negative
    pub weight: f64,

    /// Lower bound of the value range
    pub lower: f64,

    /// Upper bound of the value range
    pub upper: f64,
}

impl Category {
    /// Create a new category.
    pub fn new(weight: f64, lower: f64, upper: f64) -> Self {
        Self {
            weight,
            lower,
            upper,
        }
    }

    /// Width of the value range.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Configuration for one measurable unit (volume, temperature, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    /// Unit name, used for diagnostics
    pub name: String,

    /// Unit symbol, copied into every record's unit field
    pub symbol: String,

    /// Lower containment bound; `Some` enables the floor check
    #[serde(default)]
    pub floor: Option<f64>,

    /// Upper containment bound; `Some` enables the ceiling check
    #[serde(default)]
    pub ceiling: Option<f64>,

    /// Value categories, indexed 0..n-1
    pub categories: Vec<Category>,

    /// Initial running total for the unit's random walk
    #[serde(default)]
    pub reading: f64,

    /// Sampling period in seconds; must be positive
    pub interval: i64,
}

impl UnitSpec {
    /// Selection weights in category order.
    pub fn weights(&self) -> Vec<f64> {
        self.categories.iter().map(|c| c.weight).collect()
    }
}

fn default_version() -> i32 {
    1
}

/// Full generation schema.
///
/// The schema defines the time window, base metadata, and units for one
/// generation request. It is loaded from a YAML file and provides the
/// source of truth for synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthSchema {
    /// Schema version, carried into every record as the base version
    #[serde(default = "default_version")]
    pub version: i32,

    /// RNG seed for reproducible generation
    #[serde(default)]
    pub seed: Option<u64>,

    /// Base name stamped on every record
    pub name: String,

    /// Window start
    pub start: TimeSpec,

    /// Window end
    pub end: TimeSpec,

    /// Units to generate readings for, in output order
    pub units: Vec<UnitSpec>,
}

impl SynthSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SCHEMA: &str = r#"
version: 2
seed: 42
name: "urn:dev:meter:1"
start: "2026-01-01T00:00:00Z"
end: 86400
units:
  - name: Volume
    symbol: L
    interval: 900
    reading: 0.0
    ceiling: 100.0
    categories:
      - { weight: 0.7, lower: 0.0, upper: 0.0 }
      - { weight: 0.2, lower: 0.1, upper: 19.0 }
      - { weight: 0.1, lower: 19.1, upper: 56.7812 }
"#;

    #[test]
    fn test_parse_schema() {
        let schema = SynthSchema::from_yaml(SAMPLE_SCHEMA).unwrap();

        assert_eq!(schema.version, 2);
        assert_eq!(schema.seed, Some(42));
        assert_eq!(schema.name, "urn:dev:meter:1");
        assert_eq!(schema.units.len(), 1);

        let unit = &schema.units[0];
        assert_eq!(unit.symbol, "L");
        assert_eq!(unit.interval, 900);
        assert_eq!(unit.ceiling, Some(100.0));
        assert_eq!(unit.floor, None);
        assert_eq!(unit.categories.len(), 3);
        assert_eq!(unit.categories[1], Category::new(0.2, 0.1, 19.0));
    }

    #[test]
    fn test_defaults() {
        let schema = SynthSchema::from_yaml(
            r#"
name: test
start: 0
end: 900
units:
  - name: Temperature
    symbol: Cel
    interval: 300
    categories:
      - { weight: 1.0, lower: 0.0, upper: 1.0 }
"#,
        )
        .unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, None);
        assert_eq!(schema.units[0].reading, 0.0);
    }

    #[test]
    fn test_time_spec_unix() {
        let spec = TimeSpec::Unix(86400);
        assert_eq!(spec.as_unix_seconds().unwrap(), 86400);
    }

    #[test]
    fn test_time_spec_rfc3339() {
        let spec = TimeSpec::from("1970-01-02T00:00:00Z");
        assert_eq!(spec.as_unix_seconds().unwrap(), 86400);
    }

    #[test]
    fn test_time_spec_date_only() {
        let spec = TimeSpec::from("1970-01-02");
        assert_eq!(spec.as_unix_seconds().unwrap(), 86400);
    }

    #[test]
    fn test_time_spec_invalid() {
        let spec = TimeSpec::from("next tuesday");
        assert!(matches!(
            spec.as_unix_seconds(),
            Err(SchemaError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_category_span() {
        assert_eq!(Category::new(0.2, 0.1, 19.0).span(), 18.9);
        assert_eq!(Category::new(0.7, 0.0, 0.0).span(), 0.0);
    }

    #[test]
    fn test_unit_weights() {
        let schema = SynthSchema::from_yaml(SAMPLE_SCHEMA).unwrap();
        assert_eq!(schema.units[0].weights(), vec![0.7, 0.2, 0.1]);
    }

    #[test]
    fn test_schema_serde_roundtrip() {
        let schema = SynthSchema::from_yaml(SAMPLE_SCHEMA).unwrap();

        let yaml = serde_yaml::to_string(&schema).unwrap();
        let parsed = SynthSchema::from_yaml(&yaml).unwrap();

        assert_eq!(schema, parsed);
    }
}
