//! Dimitriadis et al. (2002), paraboloid tip on a thin layer.
//!
//! Source: <https://www.ncbi.nlm.nih.gov/pmc/articles/PMC1302067/pdf/11964265.pdf>
//!
//! With `X = √(δR) / h` the correction is the quartic
//! `1 + a1·X + a2·X² + a3·X³ + a4·X⁴`; the coefficients depend on whether the
//! sample adheres to the substrate (eq. 12) or can slip on it (eq. 11).

use crate::domain::{BecModel, Correction, IndenterShape};
use crate::error::BecError;
use crate::math::power_series;
use crate::models::{NEUTRAL_COEFFICIENT, evaluate_samples, require_shape};

/// Eq. (12), sample bonded to the substrate.
pub const BONDED_COEFFS: [f64; 4] = [1.133, 1.283, 0.769, 0.0975];

/// Eq. (11), sample not bonded to the substrate.
pub const NOT_BONDED_COEFFS: [f64; 4] = [0.884, 0.781, 0.386, 0.0048];

pub fn dimitriadis_paraboloid_bonded(
    h: f64,
    indentations: &[f64],
    shape: IndenterShape,
    radius: f64,
) -> Result<Correction, BecError> {
    dimitriadis(BecModel::DimitriadisBonded, &BONDED_COEFFS, h, indentations, shape, radius)
}

pub fn dimitriadis_paraboloid_not_bonded(
    h: f64,
    indentations: &[f64],
    shape: IndenterShape,
    radius: f64,
) -> Result<Correction, BecError> {
    dimitriadis(
        BecModel::DimitriadisNotBonded,
        &NOT_BONDED_COEFFS,
        h,
        indentations,
        shape,
        radius,
    )
}

fn dimitriadis(
    model: BecModel,
    coeffs: &[f64; 4],
    h: f64,
    indentations: &[f64],
    shape: IndenterShape,
    radius: f64,
) -> Result<Correction, BecError> {
    require_shape(model, shape)?;
    Ok(evaluate_samples(model, indentations, |depth| {
        if h <= 0.0 {
            return Ok(NEUTRAL_COEFFICIENT);
        }
        let x = (depth * radius).sqrt() / h;
        Ok(power_series(1.0, coeffs, x))
    }))
}
