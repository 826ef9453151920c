//! Sampling engine for the telemetry-synth framework.
//!
//! This crate turns a validated [`SynthSchema`](synth_core::SynthSchema)
//! into a flat sequence of time-stamped measurement records. Generation is
//! driven by a seeded RNG so identical seeds reproduce identical output.
//!
//! # Architecture
//!
//! ```text
//! SynthSchema (YAML)
//!        │
//!        ▼
//! ┌───────────────────┐
//! │ GenerationRequest │  validates config, derives duration and
//! │                   │  record capacity, owns per-unit totals
//! └─────────┬─────────┘
//!           │ per unit
//!           ▼
//!   AliasTable ──▶ BoundedWalk ──▶ RecordFactory
//!   (category)     (delta +        (base metadata +
//!                   containment)    time offset)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::SynthSchema;
//! use synth_generator::GenerationRequest;
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
//! "#).unwrap();
//!
//! let mut request = GenerationRequest::new(schema).unwrap();
//! let records = request.generate().unwrap();
//! assert_eq!(records.len(), 96);
//! ```

pub mod alias;
pub mod error;
pub mod factory;
pub mod request;
pub mod walk;

// Re-exports for convenience
pub use alias::AliasTable;
pub use error::GeneratorError;
pub use factory::RecordFactory;
pub use request::GenerationRequest;
pub use walk::BoundedWalk;
