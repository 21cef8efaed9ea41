//! Truncated power series.
//!
//! Every correction in this crate has the form
//!
//! ```text
//! c = c0 + Σ_{j=1}^{n} a_j X^j
//! ```
//!
//! for a model-specific normalized variable `X` (or a sum of precomputed terms
//! when the terms do not share a single variable).

/// Evaluate `constant + Σ coeffs[j] * x^(j+1)` using Horner's scheme.
///
/// An empty `coeffs` slice returns `constant`.
pub fn power_series(constant: f64, coeffs: &[f64], x: f64) -> f64 {
    let tail = coeffs.iter().rev().fold(0.0, |acc, &a| (acc + a) * x);
    constant + tail
}

/// Sum the first `order` values yielded by `terms`, starting from `init`.
///
/// Returns `None` when fewer than `order` terms are available.
pub fn partial_sum<I>(init: f64, terms: I, order: usize) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut acc = init;
    let mut taken = 0;
    for term in terms.into_iter().take(order) {
        acc += term;
        taken += 1;
    }
    (taken == order).then_some(acc)
}
