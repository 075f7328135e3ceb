//! Roomfit Domain Layer
//!
//! This crate holds the measurement model and the room-fit rules that every
//! other layer builds on. It has no I/O and no knowledge of files or terminals.
//!
//! ## Key Concepts
//!
//! - **Measurement**: a normalized feet/inches pair (inches always in `0..=11`)
//! - **Furniture**: a named length × width × height record
//! - **Room**: measured room dimensions used for the 2-D fit test
//! - **Fit**: length and width containment only; height is never compared
//!
//! ## Line format
//!
//! Persisted records are one line each:
//!
//! ```text
//! Sofa|6,0|3,0|2,6
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod furniture;
pub mod measurement;
pub mod room;

// Re-exports for convenience
pub use furniture::{Furniture, FurnitureError};
pub use measurement::{Measurement, MeasurementError};
pub use room::{fits, floor_area_sq_ft, FitReport, FitResult, Room};
