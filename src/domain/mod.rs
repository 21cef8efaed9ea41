//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - input tags (`IndenterShape`, `BecModel`)
//! - per-call outputs (`Correction`, `SampleFailure`, `SampleFault`)
//! - the caller-facing configuration (`CorrectionConfig`)

pub mod config;
pub mod types;

pub use config::*;
pub use types::*;
