pub mod api;

// Pure query construction and hit processing (always available, unit-tested
// without a running engine).
pub mod hits;
pub mod query;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod engine;

#[cfg(feature = "server")]
pub mod telemetry;
