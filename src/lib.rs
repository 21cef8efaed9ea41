//! `bec-corrections` library crate.
//!
//! Bottom effect correction (BEC) coefficients for AFM nanoindentation of soft
//! samples resting on a rigid substrate. Each model returns one multiplicative
//! coefficient per indentation depth; the caller multiplies its raw moduli by
//! them.
//!
//! - `models`: the six literature models and their term tables
//! - `domain`: geometry/model tags, outputs, configuration
//! - `pipeline`: applying coefficients to moduli, batch evaluation
//!
//! ```
//! use bec_corrections::domain::IndenterShape;
//! use bec_corrections::models::dimitriadis_paraboloid_bonded;
//!
//! let out = dimitriadis_paraboloid_bonded(2.0, &[0.0, 0.5], IndenterShape::Paraboloid, 5.0)?;
//! assert_eq!(out.coefficients.len(), 2);
//! assert_eq!(out.coefficients[0], 1.0);
//! # Ok::<(), bec_corrections::error::BecError>(())
//! ```

pub mod domain;
pub mod error;
pub mod math;
pub mod models;
pub mod pipeline;

pub use domain::{BecModel, Correction, CorrectionConfig, IndenterShape, SampleFailure, SampleFault};
pub use error::BecError;
pub use models::correction;
