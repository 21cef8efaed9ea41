//! Bottom effect correction models.
//!
//! Each provider is a small, pure function of
//! `(h, indentations, shape, tip_parameter[, order])` so that the fitting
//! pipeline calling into this crate can stay generic over the model choice.
//!
//! All providers share the same two-tier failure policy:
//! - structural mistakes (wrong geometry, order 0) fail the whole call
//! - numeric trouble at one sample degrades that sample to 1.0 and is recorded

pub mod dimitriadis;
pub mod garcia;
pub mod gavara;
pub mod kontomaris;
pub mod managuli;
pub mod terms;

pub use dimitriadis::*;
pub use garcia::*;
pub use gavara::*;
pub use kontomaris::*;
pub use managuli::*;

use crate::domain::{BecModel, Correction, IndenterShape, SampleFailure, SampleFault};
use crate::domain::config::check_order;
use crate::error::BecError;

/// Coefficient used for samples that carry no correction.
pub const NEUTRAL_COEFFICIENT: f64 = 1.0;

/// Evaluate any model by tag.
///
/// `order = None` selects the model default. The fixed-series models only
/// accept their own term count as an explicit order.
pub fn correction(
    model: BecModel,
    h: f64,
    indentations: &[f64],
    shape: IndenterShape,
    tip_parameter: f64,
    order: Option<usize>,
) -> Result<Correction, BecError> {
    if let Some(order) = order {
        check_order(model, order)?;
    }
    let order = order.unwrap_or_else(|| model.default_order());

    match model {
        BecModel::DimitriadisBonded => {
            dimitriadis_paraboloid_bonded(h, indentations, shape, tip_parameter)
        }
        BecModel::DimitriadisNotBonded => {
            dimitriadis_paraboloid_not_bonded(h, indentations, shape, tip_parameter)
        }
        BecModel::Gavara => gavara_cone(h, indentations, shape, tip_parameter),
        BecModel::Managuli => managuli_cone(h, indentations, shape, tip_parameter),
        BecModel::GarciaGarcia => garcia_garcia(h, indentations, shape, tip_parameter, order),
        BecModel::Kontomaris => {
            kontomaris_sphere_approx(h, indentations, shape, tip_parameter, order)
        }
    }
}

/// Fail with a geometry mismatch unless `model` accepts `shape`.
pub(crate) fn require_shape(model: BecModel, shape: IndenterShape) -> Result<(), BecError> {
    if model.supports(shape) {
        Ok(())
    } else {
        Err(BecError::geometry_mismatch(model, shape))
    }
}

/// Run `per_sample` over every depth, isolating failures.
///
/// A sample whose closure returns `Err`, or a non-finite value, gets
/// [`NEUTRAL_COEFFICIENT`] and a [`SampleFailure`] entry. The output always has
/// `indentations.len()` coefficients.
pub fn evaluate_samples<F>(model: BecModel, indentations: &[f64], per_sample: F) -> Correction
where
    F: Fn(f64) -> Result<f64, SampleFault>,
{
    let mut coefficients = Vec::with_capacity(indentations.len());
    let mut failures = Vec::new();

    for (index, &depth) in indentations.iter().enumerate() {
        let outcome = per_sample(depth).and_then(|value| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(SampleFault::NonFinite { value })
            }
        });

        match outcome {
            Ok(value) => coefficients.push(value),
            Err(fault) => {
                tracing::warn!(
                    model = model.as_str(),
                    index,
                    depth,
                    fallback = NEUTRAL_COEFFICIENT,
                    %fault,
                    "BEC sample degraded"
                );
                coefficients.push(NEUTRAL_COEFFICIENT);
                failures.push(SampleFailure {
                    index,
                    depth,
                    fault,
                });
            }
        }
    }

    tracing::debug!(
        model = model.as_str(),
        samples = coefficients.len(),
        failures = failures.len(),
        "BEC coefficients computed"
    );

    Correction {
        coefficients,
        failures,
    }
}
