//! # Meridian Core Types
//!
//! This crate defines the shared value records that flow through every
//! analyzer: portfolio positions, time-series points, price bars, and
//! allocation buckets.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate has no knowledge of any other part of the
//!   system. Every other crate depends on it, never the reverse.
//! - **Validated at Construction:** A `Position` that exists is a valid
//!   position. Non-positive shares or prices are rejected by
//!   `Position::new`, so the analyzers never re-check them.
//! - **Immutable Values:** All records are constructed by the caller,
//!   passed by reference into analyzer functions, and never mutated.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Period;
pub use error::CoreError;
pub use structs::{AllocationBucket, Position, PriceBar, TimeSeriesPoint};
