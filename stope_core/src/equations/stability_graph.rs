//! # Mathews-Potvin Stability Graph
//!
//! Adjustment factors, the modified stability number N' and the design
//! hydraulic radius read off the simplified stability graph.
//!
//! ```text
//! N' = Q × A × B × C
//! ```

use crate::units::{clamp, Degrees, Radians};

/// Depth beyond which the stress factor A takes its full value.
pub const STRESS_FACTOR_DEPTH_M: f64 = 500.0;

/// Rock stress factor A.
///
/// Deeper stopes get the full value in this simplified model:
/// - depth > 500 m: A = 1.0
/// - otherwise: A = 0.85
#[inline]
pub fn stress_factor_a(depth_m: f64) -> f64 {
    if depth_m > STRESS_FACTOR_DEPTH_M {
        1.0
    } else {
        0.85
    }
}

/// Joint orientation factor B.
///
/// ```text
/// B = clamp(0.3 + (dip - 20) / 70, 0.3, 0.7)
/// ```
#[inline]
pub fn orientation_factor_b(dip: Degrees) -> f64 {
    clamp(0.3 + (dip.0 - 20.0) / 70.0, 0.3, 0.7)
}

/// Gravity adjustment factor C.
///
/// ```text
/// C = 1 - cos(dip)
/// ```
#[inline]
pub fn gravity_factor_c(dip: Degrees) -> f64 {
    let rad: Radians = dip.into();
    1.0 - rad.0.cos()
}

/// Modified stability number N' = Q × A × B × C.
#[inline]
pub fn modified_stability_number(q: f64, a: f64, b: f64, c: f64) -> f64 {
    q * a * b * c
}

/// Design hydraulic radius (m) from the piecewise stability-graph curve.
///
/// | N'            | HR                       |
/// |---------------|--------------------------|
/// | N' ≤ 3        | 2.5 + 0.5 × N'           |
/// | 3 < N' ≤ 10   | 4.0 + 0.8 × N'           |
/// | N' > 10       | 7.0 + 5.0 × log10(N')    |
#[inline]
pub fn design_hydraulic_radius(n_prime: f64) -> f64 {
    if n_prime <= 3.0 {
        2.5 + 0.5 * n_prime
    } else if n_prime <= 10.0 {
        4.0 + 0.8 * n_prime
    } else {
        7.0 + 5.0 * n_prime.log10()
    }
}
