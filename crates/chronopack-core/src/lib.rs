//! chronopack Core - Scalar value seam and shared primitives
//!
//! This crate defines the surface the codec crates plug into:
//! - `Scalar`: read-side view over one encoded binary value
//! - `ScalarBuilder`: write-side cursor accepting typed scalar values
//! - Error taxonomy shared by all codecs

pub mod error;
pub mod scalar;

pub use error::*;
pub use scalar::*;
