use bec_corrections::models::{
    dimitriadis_paraboloid_bonded, dimitriadis_paraboloid_not_bonded, garcia_garcia, gavara_cone,
    kontomaris_sphere_approx, managuli_cone,
};
use bec_corrections::{BecError, BecModel, IndenterShape, correction};
use proptest::prelude::*;

/// (model, accepted shape, plausible tip parameter)
const CASES: [(BecModel, IndenterShape, f64); 8] = [
    (BecModel::DimitriadisBonded, IndenterShape::Paraboloid, 5.0),
    (BecModel::DimitriadisNotBonded, IndenterShape::Paraboloid, 5.0),
    (BecModel::Gavara, IndenterShape::Cone, 0.35),
    (BecModel::Managuli, IndenterShape::Cone, 0.35),
    (BecModel::GarciaGarcia, IndenterShape::Paraboloid, 5.0),
    (BecModel::GarciaGarcia, IndenterShape::Conical, 0.35),
    (BecModel::GarciaGarcia, IndenterShape::FlatPunch, 2.0),
    (BecModel::Kontomaris, IndenterShape::Paraboloid, 5.0),
];

proptest! {
    #[test]
    fn output_length_matches_input(
        h in -2.0f64..10.0,
        depths in prop::collection::vec(-1.0f64..5.0, 0..64),
        order in 1usize..9,
    ) {
        for (model, shape, tip) in CASES {
            let order = model.has_selectable_order().then_some(order);
            let out = correction(model, h, &depths, shape, tip, order).unwrap();
            prop_assert_eq!(out.coefficients.len(), depths.len());
            prop_assert!(out.coefficients.iter().all(|c| c.is_finite()));
            for failure in &out.failures {
                prop_assert_eq!(out.coefficients[failure.index], 1.0);
            }
        }
    }

    #[test]
    fn non_positive_height_is_identity(
        h in -10.0f64..=0.0,
        depths in prop::collection::vec(0.0f64..5.0, 1..32),
    ) {
        for (model, shape, tip) in CASES {
            if model == BecModel::Kontomaris {
                continue;
            }
            let out = correction(model, h, &depths, shape, tip, None).unwrap();
            prop_assert!(out.coefficients.iter().all(|&c| c == 1.0));
            prop_assert!(out.is_clean());
        }
    }

    #[test]
    fn zero_indentation_is_neutral(h in 0.01f64..10.0, tip in 0.01f64..1.2) {
        let zero = [0.0];
        let p = IndenterShape::Paraboloid;
        prop_assert_eq!(dimitriadis_paraboloid_bonded(h, &zero, p, tip).unwrap().coefficients[0], 1.0);
        prop_assert_eq!(dimitriadis_paraboloid_not_bonded(h, &zero, p, tip).unwrap().coefficients[0], 1.0);
        prop_assert_eq!(gavara_cone(h, &zero, IndenterShape::Cone, tip).unwrap().coefficients[0], 1.0);
        prop_assert_eq!(managuli_cone(h, &zero, IndenterShape::Cone, tip).unwrap().coefficients[0], 1.0);
    }

    #[test]
    fn valid_depths_never_degrade(
        h in 0.1f64..10.0,
        depths in prop::collection::vec(0.0f64..5.0, 1..32),
    ) {
        for (model, shape, tip) in CASES {
            let out = correction(model, h, &depths, shape, tip, None).unwrap();
            prop_assert!(out.is_clean(), "{}: {:?}", model, out.failures);
        }
    }
}

#[test]
fn gavara_rejects_paraboloid() {
    let err = gavara_cone(1.0, &[0.1], IndenterShape::Paraboloid, 0.5).unwrap_err();
    assert!(matches!(err, BecError::GeometryMismatch { .. }));
    assert!(err.to_string().contains("paraboloid"));
}

#[test]
fn garcia_lower_orders_are_selectable() {
    let depths = [0.25, 0.5, 1.0];
    let full = garcia_garcia(2.0, &depths, IndenterShape::Paraboloid, 5.0, 4).unwrap();
    let first = garcia_garcia(2.0, &depths, IndenterShape::Paraboloid, 5.0, 1).unwrap();
    for (f, o1) in full.coefficients.iter().zip(&first.coefficients) {
        assert!(f > o1);
    }
}

#[test]
fn kontomaris_zero_depth_reference() {
    let out = kontomaris_sphere_approx(0.0, &[0.0], IndenterShape::Paraboloid, 5.0, 6).unwrap();
    assert!((out.coefficients[0] - 1.01).abs() < 1e-12);
}
