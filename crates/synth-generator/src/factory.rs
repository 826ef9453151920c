//! Stamps derived readings into metadata-bearing records.

use crate::error::GeneratorError;
use synth_core::Record;

/// Builds records carrying one request's shared base metadata.
#[derive(Debug, Clone)]
pub struct RecordFactory {
    base_name: String,
    start: i64,
    version: i32,
}

impl RecordFactory {
    /// Create a factory for a generation window starting at `start`.
    pub fn new(base_name: impl Into<String>, start: i64, version: i32) -> Self {
        Self {
            base_name: base_name.into(),
            start,
            version,
        }
    }

    /// Create a record for one reading at an absolute timestamp.
    ///
    /// The step loop only produces timestamps at or after the window start,
    /// so an earlier timestamp here indicates a logic defect in the caller
    /// and is rejected.
    pub fn create(&self, value: f64, unit: &str, time: i64) -> Result<Record, GeneratorError> {
        if time < self.start {
            return Err(GeneratorError::TimeBeforeStart {
                time,
                start: self.start,
            });
        }

        Ok(Record {
            base_name: self.base_name.clone(),
            base_time: self.start as f64,
            base_version: self.version,
            time: (time - self.start) as f64,
            value,
            unit: unit.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_record() {
        let factory = RecordFactory::new("urn:dev:meter:1", 1000, 1);

        let record = factory.create(12.5, "L", 1900).unwrap();

        assert_eq!(record.base_name, "urn:dev:meter:1");
        assert_eq!(record.base_time, 1000.0);
        assert_eq!(record.base_version, 1);
        assert_eq!(record.time, 900.0);
        assert_eq!(record.value, 12.5);
        assert_eq!(record.unit, "L");
    }

    #[test]
    fn test_time_at_window_start() {
        let factory = RecordFactory::new("test", 1000, 1);

        let record = factory.create(0.0, "Cel", 1000).unwrap();
        assert_eq!(record.time, 0.0);
    }

    #[test]
    fn test_time_before_start_rejected() {
        let factory = RecordFactory::new("test", 1000, 1);

        let result = factory.create(1.0, "Cel", 999);
        assert!(matches!(
            result,
            Err(GeneratorError::TimeBeforeStart {
                time: 999,
                start: 1000
            })
        ));
    }
}
