//! # Hoek-Brown Rock Mass Strength
//!
//! Generalised Hoek-Brown parameters with GSI estimated from RQD.
//!
//! ```text
//! mb = mi × exp((GSI - 100) / 28)
//! s  = exp((GSI - 100) / 9)
//! a  = 1/2 + 1/6 × (exp(-GSI/15) - exp(-20/3))
//! σcm = UCS × s^a
//! ```

use crate::units::clamp;

/// Uniaxial compressive strength (MPa) correlated from RQD.
#[inline]
pub fn ucs_from_rqd(rqd: f64) -> f64 {
    20.0 + 0.8 * rqd
}

/// Geological Strength Index estimated from RQD, limited to [20, 85].
#[inline]
pub fn gsi_from_rqd(rqd: f64) -> f64 {
    clamp(rqd - 15.0, 20.0, 85.0)
}

/// Reduced material constant mb.
#[inline]
pub fn hoek_brown_mb(mi: f64, gsi: f64) -> f64 {
    mi * ((gsi - 100.0) / 28.0).exp()
}

/// Rock mass constant s (undisturbed rock, D = 0).
#[inline]
pub fn hoek_brown_s(gsi: f64) -> f64 {
    ((gsi - 100.0) / 9.0).exp()
}

/// Rock mass constant a.
#[inline]
pub fn hoek_brown_a(gsi: f64) -> f64 {
    0.5 + ((-gsi / 15.0).exp() - (-20.0_f64 / 3.0).exp()) / 6.0
}

/// Uniaxial compressive strength of the rock mass σcm = UCS × s^a.
#[inline]
pub fn rock_mass_strength(ucs: f64, s: f64, a: f64) -> f64 {
    ucs * s.powf(a)
}

/// Strength multiplier for orebody thickness: 1 + 0.015 × ln(t + 1).
#[inline]
pub fn thickness_adjustment(ore_thickness_m: f64) -> f64 {
    1.0 + 0.015 * (ore_thickness_m + 1.0).ln()
}
