//! # In-Situ Stress
//!
//! Lithostatic vertical stress and the depth-dependent horizontal-to-vertical
//! stress ratio k for Indian shield conditions.

use crate::units::{clamp, MegaPascals, Meters};

/// Depth below which k is held at its shallow value.
pub const SHALLOW_DEPTH_M: f64 = 300.0;

/// k at shallow depth.
pub const SHALLOW_K_RATIO: f64 = 1.5;

/// Vertical stress σv = depth × gradient.
#[inline]
pub fn vertical_stress(depth: Meters, gradient_mpa_per_m: f64) -> MegaPascals {
    MegaPascals(depth.0 * gradient_mpa_per_m)
}

/// Horizontal-to-vertical stress ratio.
///
/// ```text
/// depth < 300 m:  k = 1.5
/// otherwise:      k = clamp(0.65 + 1350 / (depth + 200), 0.5, 2.0)
/// ```
#[inline]
pub fn k_ratio(depth: Meters) -> f64 {
    if depth.0 < SHALLOW_DEPTH_M {
        SHALLOW_K_RATIO
    } else {
        clamp(0.65 + 1350.0 / (depth.0 + 200.0), 0.5, 2.0)
    }
}

/// Horizontal stress σh = k × σv.
#[inline]
pub fn horizontal_stress(vertical: MegaPascals, k: f64) -> MegaPascals {
    vertical * k
}
