//! Shared "apply correction" logic for indentation-fit pipelines.
//!
//! The fitting code upstream produces, per force curve, a sample height, the
//! indentation depths and the raw (uncorrected) moduli at those depths. This
//! module runs the configured model and multiplies the result in:
//!
//! raw moduli -> BEC coefficients -> corrected moduli
//!
//! Curves are independent, so a batch is evaluated in parallel.

use rayon::prelude::*;

use crate::domain::{Correction, CorrectionConfig};
use crate::error::BecError;
use crate::models;

/// One processed force curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveInput {
    /// Undeformed sample thickness at the indentation point (`<= 0` if unknown).
    pub sample_height: f64,
    pub indentations: Vec<f64>,
    /// Apparent moduli, one per indentation.
    pub raw_moduli: Vec<f64>,
}

/// Corrected moduli together with the coefficients that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectedCurve {
    pub correction: Correction,
    pub moduli: Vec<f64>,
}

/// Multiply raw moduli by coefficients element-wise.
pub fn apply_to_moduli(raw_moduli: &[f64], coefficients: &[f64]) -> Result<Vec<f64>, BecError> {
    if raw_moduli.len() != coefficients.len() {
        return Err(BecError::LengthMismatch {
            expected: raw_moduli.len(),
            actual: coefficients.len(),
        });
    }
    Ok(raw_moduli
        .iter()
        .zip(coefficients)
        .map(|(e, c)| e * c)
        .collect())
}

/// Correct a single curve.
pub fn correct_curve(config: &CorrectionConfig, curve: &CurveInput) -> Result<CorrectedCurve, BecError> {
    if curve.indentations.len() != curve.raw_moduli.len() {
        return Err(BecError::LengthMismatch {
            expected: curve.indentations.len(),
            actual: curve.raw_moduli.len(),
        });
    }

    let correction = models::correction(
        config.model,
        curve.sample_height,
        &curve.indentations,
        config.shape,
        config.tip_parameter,
        config.order,
    )?;
    let moduli = apply_to_moduli(&curve.raw_moduli, &correction.coefficients)?;

    Ok(CorrectedCurve { correction, moduli })
}

/// Correct many curves with the same configuration.
///
/// The configuration is validated once up front; a structural problem with it
/// is returned for the whole batch. Per-curve results keep the input order.
pub fn correct_batch(
    config: &CorrectionConfig,
    curves: &[CurveInput],
) -> Result<Vec<Result<CorrectedCurve, BecError>>, BecError> {
    config.validate()?;

    let results: Vec<Result<CorrectedCurve, BecError>> = curves
        .par_iter()
        .map(|curve| correct_curve(config, curve))
        .collect();

    let n_degraded: usize = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|c| c.correction.failures.len())
        .sum();
    tracing::debug!(
        model = config.model.as_str(),
        curves = curves.len(),
        degraded_samples = n_degraded,
        "BEC batch corrected"
    );

    Ok(results)
}
