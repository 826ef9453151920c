//! Core types for the telemetry-synth framework.
//!
//! This crate provides the foundational types shared across the synthesis
//! framework, including:
//!
//! - [`SynthSchema`] - Generation configuration loaded from YAML
//! - [`UnitSpec`] - Per-unit sampling configuration (categories, bounds, interval)
//! - [`Record`] - The flat measurement record handed to downstream codecs
//!
//! # Architecture
//!
//! The synth-core crate sits at the foundation of the framework:
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    └─── synth-generator  (depends on synth-core for schema and records)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::SynthSchema;
//!
//! let schema = SynthSchema::from_yaml(r#"
//! version: 1
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
//! "#).unwrap();
//!
//! assert_eq!(schema.units.len(), 1);
//! ```

pub mod record;
pub mod schema;

// Re-exports for convenience
pub use record::Record;
pub use schema::{Category, SchemaError, SynthSchema, TimeSpec, UnitSpec};
