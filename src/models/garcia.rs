//! Garcia & Garcia (2018): generalized bottom effect correction.
//!
//! Source: <https://www.cell.com/biophysj/pdf/S0006-3495(18)30590-3.pdf>
//!
//! The correction is `1 + Σ_{j=1}^{order} O_j(h, δ, p)` where `O_j` comes from a
//! per-geometry table (see [`crate::models::terms`]) and `p` is either the tip
//! radius or the half-opening angle. Lower orders give the cruder
//! approximations of the paper.

use crate::domain::config::check_order;
use crate::domain::{BecModel, Correction, IndenterShape, SampleFault};
use crate::error::BecError;
use crate::math::partial_sum;
use crate::models::terms::garcia_terms;
use crate::models::{NEUTRAL_COEFFICIENT, evaluate_samples};

pub const GARCIA_DEFAULT_ORDER: usize = 4;

pub fn garcia_garcia(
    h: f64,
    indentations: &[f64],
    shape: IndenterShape,
    tip_parameter: f64,
    order: usize,
) -> Result<Correction, BecError> {
    let model = BecModel::GarciaGarcia;
    let terms = garcia_terms(shape).ok_or_else(|| BecError::geometry_mismatch(model, shape))?;
    check_order(model, order)?;

    Ok(evaluate_samples(model, indentations, |depth| {
        if h <= 0.0 {
            return Ok(NEUTRAL_COEFFICIENT);
        }
        let values = terms.iter().map(|term| term(h, depth, tip_parameter));
        partial_sum(1.0, values, order).ok_or(SampleFault::OrderOutOfRange {
            order,
            available: terms.len(),
        })
    }))
}
