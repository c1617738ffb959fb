//! # Rock Mass Classification
//!
//! RQD-based correlations for Rock Mass Rating (RMR) and the Barton Q-index.

use crate::config::JointParameters;
use crate::units::clamp;

/// Rock Mass Rating from RQD with a regional correction.
///
/// ```text
/// RMR = clamp(0.77 × RQD + 12 + adjustment, 0, 100)
/// ```
///
/// `rqd` is clamped to [0, 100] before use.
#[inline]
pub fn rmr_from_rqd(rqd: f64, adjustment: f64) -> f64 {
    let rqd = clamp(rqd, 0.0, 100.0);
    clamp(0.77 * rqd + 12.0 + adjustment, 0.0, 100.0)
}

/// Barton Q-index.
///
/// ```text
/// Q = (RQD / Jn) × (Jr / Ja) × (Jw / SRF)
/// ```
///
/// Block size × inter-block shear strength × active stress.
#[inline]
pub fn q_value(rqd: f64, joints: &JointParameters) -> f64 {
    let rqd = clamp(rqd, 0.0, 100.0);
    (rqd / joints.jn) * (joints.jr / joints.ja) * (joints.jw / joints.srf)
}
