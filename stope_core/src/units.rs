//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the stope engine mixes:
//! lengths in metres, angles in degrees and radians, and stresses in MPa.
//! They are plain `f64` newtypes that serialize as bare numbers.
//!
//! ## Example
//!
//! ```rust
//! use stope_core::units::{Degrees, Radians, Meters};
//!
//! let dip = Degrees(60.0);
//! let rad: Radians = dip.into();
//! assert!((rad.0.cos() - 0.5).abs() < 1e-12);
//!
//! let depth = Meters(400.0);
//! assert_eq!((depth * 2.0).value(), 800.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

// ============================================================================
// Angles
// ============================================================================

/// Angle in degrees (dip is always measured from horizontal)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Stress
// ============================================================================

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }

            /// Value rounded to 2 decimal places for display
            pub fn rounded(self) -> f64 {
                round2(self.0)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);
impl_arithmetic!(MegaPascals);

// ============================================================================
// Rounding
// ============================================================================

/// Round to 2 decimal places, half away from zero.
///
/// Every numeric leaf of a design result passes through here exactly once.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp that tolerates NaN by returning the lower bound.
#[inline]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        lo
    } else {
        value.max(lo).min(hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);

        let back: Degrees = rad.into();
        assert!((back.0 - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 0.8).0, 8.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(78.6000000001), 78.6);
        assert_eq!(round2(6.12383), 6.12);
        assert_eq!(round2(-2.3449), -2.34);
        assert_eq!(MegaPascals(12.12217).rounded(), 12.12);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.8, 0.3, 0.7), 0.7);
        assert_eq!(clamp(0.1, 0.3, 0.7), 0.3);
        assert_eq!(clamp(0.5, 0.3, 0.7), 0.5);
        assert_eq!(clamp(f64::NAN, 0.3, 0.7), 0.3);
    }

    #[test]
    fn test_serialization() {
        let depth = Meters(400.5);
        let json = serde_json::to_string(&depth).unwrap();
        assert_eq!(json, "400.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(depth, roundtrip);
    }
}
