//! Per-order term tables for the Garcia–Garcia and Kontomaris series.
//!
//! Tables are `static` arrays of plain function pointers: built at compile time,
//! shared read-only by every call.

use crate::domain::IndenterShape;

/// Garcia–Garcia term: `(h, depth, tip_parameter) -> value`.
pub type GarciaTerm = fn(f64, f64, f64) -> f64;

/// Kontomaris term: `(depth, radius) -> value`.
pub type KontomarisTerm = fn(f64, f64) -> f64;

/// Paraboloid tip, `tip_parameter` is the radius.
pub static GARCIA_PARABOLOID: [GarciaTerm; 4] = [
    |h, d, r| 1.133 * (d * r).sqrt() / h,
    |h, d, r| 1.497 * d * r / h.powi(2),
    |h, d, r| 1.469 * d * r * (d * r).sqrt() / h.powi(3),
    |h, d, r| 0.755 * d.powi(2) * r.powi(2) / h.powi(4),
];

/// Conical tip, `tip_parameter` is the half-opening angle in radians.
pub static GARCIA_CONICAL: [GarciaTerm; 4] = [
    |h, d, a| 0.721 * d * a.tan() / h,
    |h, d, a| 0.650 * d.powi(2) * a.tan().powi(2) / h.powi(2),
    |h, d, a| 0.491 * d.powi(3) * a.tan().powi(3) / h.powi(3),
    |h, d, a| 0.225 * d.powi(4) * a.tan().powi(4) / h.powi(4),
];

/// Flat punch, `tip_parameter` is the punch radius. Depth does not enter.
pub static GARCIA_FLAT_PUNCH: [GarciaTerm; 4] = [
    |h, _, r| 1.133 * r / h,
    |h, _, r| 1.283 * r.powi(2) / h.powi(2),
    |h, _, r| 0.598 * r.powi(3) / h.powi(3),
    |h, _, r| -0.291 * r.powi(4) / h.powi(4),
];

/// Series constants c1..c6 of Kontomaris & Malamou (2021), eq. 17.
pub const KONTOMARIS_CONSTANTS: [f64; 6] = [
    1.0100000, -0.0730300, -0.1357000, 0.0359800, -0.0040240, 0.0001653,
];

/// Term j carries `c_j / (j + 1)`, depth to the power `j - 1/2` and radius to
/// the power `-(j - 1/2)`, relative to the `(3/2)·√R` prefactor.
pub static KONTOMARIS: [KontomarisTerm; 6] = [
    |_, r| 2.0 / 3.0 * KONTOMARIS_CONSTANTS[0] / r.sqrt(),
    |d, r| 1.0 / 2.0 * KONTOMARIS_CONSTANTS[1] * d.sqrt() / r,
    |d, r| 1.0 / 3.0 * KONTOMARIS_CONSTANTS[2] * d * d.sqrt() / r.powi(2),
    |d, r| 1.0 / 4.0 * KONTOMARIS_CONSTANTS[3] * d.powi(2) * d.sqrt() / r.powi(3),
    |d, r| 1.0 / 5.0 * KONTOMARIS_CONSTANTS[4] * d.powi(3) * d.sqrt() / r.powi(4),
    |d, r| 1.0 / 6.0 * KONTOMARIS_CONSTANTS[5] * d.powi(4) * d.sqrt() / r.powi(5),
];

/// Garcia–Garcia table for a geometry, or `None` if the model has no series
/// for it.
pub fn garcia_terms(shape: IndenterShape) -> Option<&'static [GarciaTerm]> {
    match shape {
        IndenterShape::Paraboloid => Some(&GARCIA_PARABOLOID),
        IndenterShape::Conical => Some(&GARCIA_CONICAL),
        IndenterShape::FlatPunch => Some(&GARCIA_FLAT_PUNCH),
        IndenterShape::Cone => None,
    }
}
