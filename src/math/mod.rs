//! Mathematical utilities: series evaluation shared by the correction models.

pub mod series;

pub use series::*;
