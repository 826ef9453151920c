//! The flat measurement record handed to downstream codecs.

use serde::{Deserialize, Serialize};

/// One time-stamped measurement.
///
/// Each record carries the base metadata shared by all records of a
/// generation request (name, time origin, version) plus the per-step
/// offset, value, and unit symbol. The serde field labels are the contract
/// downstream encoders depend on for compact repeated-field encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Base name shared by the whole record sequence
    #[serde(rename = "bn")]
    pub base_name: String,

    /// Time origin of the generation window, unix seconds
    #[serde(rename = "bt")]
    pub base_time: f64,

    /// Schema version of the producing request
    #[serde(rename = "bver")]
    pub base_version: i32,

    /// Offset in seconds since `base_time`
    #[serde(rename = "t")]
    pub time: f64,

    /// Measured value
    #[serde(rename = "v")]
    pub value: f64,

    /// Unit symbol
    #[serde(rename = "u")]
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            base_name: "urn:dev:meter:1".to_string(),
            base_time: 1000.0,
            base_version: 1,
            time: 900.0,
            value: 12.5,
            unit: "L".to_string(),
        }
    }

    #[test]
    fn test_record_field_labels() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["bn"], "urn:dev:meter:1");
        assert_eq!(json["bt"], 1000.0);
        assert_eq!(json["bver"], 1);
        assert_eq!(json["t"], 900.0);
        assert_eq!(json["v"], 12.5);
        assert_eq!(json["u"], "L");
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = sample_record();

        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();

        assert_eq!(record, parsed);
    }
}
