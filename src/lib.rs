//! telemetry-synth: plausible time-series telemetry for sensor-data pipelines.
//!
//! Synthesizes time-stamped measurement records for one or more measurement
//! units over a fixed time window, without real hardware. Each unit's
//! readings follow a bounded random walk: a weighted category draw picks the
//! step's value range, a uniform draw sizes the delta, and configured
//! floor/ceiling bounds reflect deltas that would escape.
//!
//! The workspace splits into two crates, re-exported here:
//!
//! ```text
//! telemetry-synth (facade)
//!    │
//!    ├─── synth-core       schema, record type, shared errors
//!    └─── synth-generator  alias sampler, bounded walk, orchestration
//! ```
//!
//! # Example
//!
//! ```rust
//! use telemetry_synth::{GenerationRequest, SynthSchema};
//!
//! let schema = SynthSchema::from_yaml(r#"
//! seed: 42
//! name: "urn:dev:meter:1"
//! start: 0
//! end: 86400
//! units:
//!   - name: Volume
//!     symbol: L
//!     interval: 900
//!     categories:
//!       - { weight: 0.7, lower: 0.0, upper: 0.0 }
//!       - { weight: 0.2, lower: 0.1, upper: 19.0 }
//!       - { weight: 0.1, lower: 19.1, upper: 56.7812 }
//! "#)?;
//!
//! let mut request = GenerationRequest::new(schema)?;
//! let records = request.generate()?;
//! assert_eq!(records.len(), 96);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The produced [`Record`]s carry the field labels downstream codecs expect;
//! serializing them is left to an external encoder.

pub use synth_core::{Category, Record, SchemaError, SynthSchema, TimeSpec, UnitSpec};
pub use synth_generator::{
    AliasTable, BoundedWalk, GenerationRequest, GeneratorError, RecordFactory,
};
