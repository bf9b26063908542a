//! Shared test utilities used across the dcmst crates.
//!
//! [`tracing`] captures spans and events for instrumentation assertions;
//! [`ci`] reads the environment overrides that tune property suites.

pub mod ci;
pub mod tracing;
