//! Gavara & Chadwick (2012), conical tip.
//!
//! Source: <https://www.nature.com/articles/nnano.2012.163>

use std::f64::consts::PI;

use crate::domain::{BecModel, Correction, IndenterShape};
use crate::error::BecError;
use crate::models::{NEUTRAL_COEFFICIENT, evaluate_samples, require_shape};

/// Leading constant shared with the Managuli series.
pub const CONE_ALPHA: f64 = 1.7795;

/// `1 + α·(2·tan θ / π²)·X + 16·α²·tan²θ·X²` with `X = δ / h`.
pub fn gavara_cone(
    h: f64,
    indentations: &[f64],
    shape: IndenterShape,
    half_opening_angle: f64,
) -> Result<Correction, BecError> {
    let model = BecModel::Gavara;
    require_shape(model, shape)?;
    let tan_angle = half_opening_angle.tan();

    Ok(evaluate_samples(model, indentations, |depth| {
        if h <= 0.0 {
            return Ok(NEUTRAL_COEFFICIENT);
        }
        let x = depth / h;
        let o1 = CONE_ALPHA * (2.0 * tan_angle / PI.powi(2)) * x;
        let o2 = 16.0 * CONE_ALPHA.powi(2) * tan_angle.powi(2) * x.powi(2);
        Ok(1.0 + o1 + o2)
    }))
}
