//! Managuli & Roy (2018), eq. (1), conical tip.
//!
//! Source: <https://link.springer.com/article/10.1007/s40799-018-0268-8>

use std::f64::consts::PI;

use crate::domain::{BecModel, Correction, IndenterShape};
use crate::error::BecError;
use crate::models::gavara::CONE_ALPHA;
use crate::models::{NEUTRAL_COEFFICIENT, evaluate_samples, require_shape};

/// `1 + 4·C·δ/h + 20·C²·δ²/h²` with `C = α·tan θ / π²`.
pub fn managuli_cone(
    h: f64,
    indentations: &[f64],
    shape: IndenterShape,
    half_opening_angle: f64,
) -> Result<Correction, BecError> {
    let model = BecModel::Managuli;
    require_shape(model, shape)?;
    let c = CONE_ALPHA * half_opening_angle.tan() / PI.powi(2);

    Ok(evaluate_samples(model, indentations, |depth| {
        if h <= 0.0 {
            return Ok(NEUTRAL_COEFFICIENT);
        }
        let o1 = 4.0 * c * depth / h;
        let o2 = 20.0 * c.powi(2) * depth.powi(2) / h.powi(2);
        Ok(1.0 + o1 + o2)
    }))
}
