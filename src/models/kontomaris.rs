//! Kontomaris & Malamou (2021), eq. (17).
//!
//! Source: <https://doi.org/10.1088/1361-6404/abccfb>
//!
//! Corrects the Sneddon paraboloid approximation for a finite sphere. The
//! sample height plays no role: the coefficient depends on the sphere radius
//! and the indentation depth only, and the sum starts from zero.

use crate::domain::config::check_order;
use crate::domain::{BecModel, Correction, IndenterShape, SampleFault};
use crate::error::BecError;
use crate::math::partial_sum;
use crate::models::terms::KONTOMARIS;
use crate::models::{evaluate_samples, require_shape};

pub const KONTOMARIS_DEFAULT_ORDER: usize = 6;

/// `Σ_{j=1}^{order} (3/2)·√R·term_j(δ, R)`.
pub fn kontomaris_sphere_approx(
    _h: f64,
    indentations: &[f64],
    shape: IndenterShape,
    radius: f64,
    order: usize,
) -> Result<Correction, BecError> {
    let model = BecModel::Kontomaris;
    require_shape(model, shape)?;
    check_order(model, order)?;
    let prefactor = 1.5 * radius.sqrt();

    Ok(evaluate_samples(model, indentations, |depth| {
        let values = KONTOMARIS.iter().map(|term| prefactor * term(depth, radius));
        partial_sum(0.0, values, order).ok_or(SampleFault::OrderOutOfRange {
            order,
            available: KONTOMARIS.len(),
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_depth_leaves_first_constant() {
        let out = kontomaris_sphere_approx(0.0, &[0.0], IndenterShape::Paraboloid, 5.0, 6).unwrap();
        assert!((out.coefficients[0] - 1.01).abs() < 1e-12, "got {}", out.coefficients[0]);
    }

    #[test]
    fn reference_value_full_order() {
        let out = kontomaris_sphere_approx(
            0.0,
            &[1.0],
            IndenterShape::Paraboloid,
            5.0,
            KONTOMARIS_DEFAULT_ORDER,
        )
        .unwrap();
        assert!((out.coefficients[0] - 0.979_673_376_586_778_6).abs() < 1e-9);
    }

    #[test]
    fn height_is_ignored() {
        let depths = [0.2, 0.8];
        let a = kontomaris_sphere_approx(-1.0, &depths, IndenterShape::Paraboloid, 5.0, 6).unwrap();
        let b = kontomaris_sphere_approx(10.0, &depths, IndenterShape::Paraboloid, 5.0, 6).unwrap();
        assert_eq!(a, b);
        assert!(a.coefficients.iter().all(|&c| c != 1.0));
    }

    #[test]
    fn order_one_is_constant_in_depth() {
        let out =
            kontomaris_sphere_approx(0.0, &[0.0, 1.0, 4.0], IndenterShape::Paraboloid, 5.0, 1).unwrap();
        for c in out.coefficients {
            assert!((c - 1.01).abs() < 1e-12);
        }
    }

    #[test]
    fn order_zero_is_rejected() {
        let result = kontomaris_sphere_approx(0.0, &[0.1, 0.5], IndenterShape::Paraboloid, 5.0, 0);
        assert!(
            matches!(result, Err(BecError::InvalidOrder { model: BecModel::Kontomaris, order: 0, .. })),
            "order 0 must not zero the coefficients: {result:?}"
        );
    }

    #[test]
    fn order_past_table_degrades() {
        let out = kontomaris_sphere_approx(0.0, &[0.3], IndenterShape::Paraboloid, 5.0, 7).unwrap();
        assert_eq!(out.coefficients, vec![1.0]);
        assert_eq!(
            out.failures[0].fault,
            SampleFault::OrderOutOfRange {
                order: 7,
                available: 6
            }
        );
    }

    #[test]
    fn negative_depth_is_isolated() {
        let out =
            kontomaris_sphere_approx(0.0, &[0.5, -0.5], IndenterShape::Paraboloid, 5.0, 6).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out.coefficients[1], 1.0);
        assert_eq!(out.failures[0].index, 1);
    }

    #[test]
    fn only_paraboloid() {
        for shape in [IndenterShape::Cone, IndenterShape::Conical, IndenterShape::FlatPunch] {
            let err = kontomaris_sphere_approx(0.0, &[0.1], shape, 5.0, 6).unwrap_err();
            assert_eq!(err, BecError::geometry_mismatch(BecModel::Kontomaris, shape));
        }
    }
}
