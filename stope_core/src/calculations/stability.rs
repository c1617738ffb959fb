//! # Stress and Strength Analysis
//!
//! Compares Hoek-Brown rock mass strength against the in-situ vertical
//! stress and grades the resulting safety factor.
//!
//! ## Procedure
//!
//! 1. σv = depth × stress gradient, depth floored at 0.1 m
//! 2. k from depth, σh = k × σv
//! 3. UCS (measured, or 20 + 0.8 × RQD) and GSI from RQD
//! 4. Hoek-Brown mb, s, a and σcm = UCS × s^a
//! 5. σcm scaled by 1 + 0.015 × ln(t + 1) for orebody thickness t
//! 6. SF = σcm / σv rounded to 2 dp, then graded and checked against DGMS
//!
//! ## Example
//!
//! ```rust
//! use stope_core::calculations::stability::{StabilityClass, StressStrengthAnalyzer};
//! use stope_core::config::DesignConfig;
//! use stope_core::inputs::DesignInputs;
//!
//! let analyzer = StressStrengthAnalyzer::new(&DesignConfig::default());
//! let assessment = analyzer.assess(&DesignInputs::new(55.0, 2.0, 80.0, 400.0));
//! assert_eq!(assessment.safety_factor, 1.08);
//! assert_eq!(assessment.stability_class, StabilityClass::Unstable);
//! assert!(!assessment.dgms_compliant);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::config::DesignConfig;
use crate::equations::{
    gsi_from_rqd, hoek_brown_a, hoek_brown_mb, hoek_brown_s, horizontal_stress, k_ratio, rock_mass_strength,
    thickness_adjustment, ucs_from_rqd, vertical_stress,
};
use crate::inputs::DesignInputs;
use crate::units::{clamp, round2, Meters};

/// Depth floor that keeps σv strictly positive (m)
pub const MIN_DEPTH_M: f64 = 0.1;

/// Thickness floor for the logarithmic thickness adjustment (m)
pub const MIN_THICKNESS_M: f64 = 0.1;

/// Safety factor grade, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StabilityClass {
    Unstable,
    Marginal,
    Stable,
    HighlyStable,
}

impl StabilityClass {
    /// Grade a safety factor: <1.5, [1.5, 2.0), [2.0, 2.5), >=2.5.
    pub fn from_safety_factor(safety_factor: f64) -> Self {
        if safety_factor >= 2.5 {
            StabilityClass::HighlyStable
        } else if safety_factor >= 2.0 {
            StabilityClass::Stable
        } else if safety_factor >= 1.5 {
            StabilityClass::Marginal
        } else {
            StabilityClass::Unstable
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StabilityClass::Unstable => "Unstable",
            StabilityClass::Marginal => "Marginal",
            StabilityClass::Stable => "Stable",
            StabilityClass::HighlyStable => "Highly Stable",
        }
    }
}

impl fmt::Display for StabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Hoek-Brown parameters behind a strength estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoekBrownParameters {
    /// Intact uniaxial compressive strength (MPa)
    pub ucs: f64,
    /// Geological Strength Index
    pub gsi: f64,
    pub mb: f64,
    pub s: f64,
    pub a: f64,
}

/// Rock mass strength with the parameters that produced it (full precision).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RockStrength {
    pub hoek_brown: HoekBrownParameters,
    /// σcm before the thickness adjustment (MPa)
    pub unadjusted: f64,
    /// Thickness multiplier applied to σcm
    pub thickness_factor: f64,
    /// Adjusted rock mass strength (MPa)
    pub strength: f64,
}

/// Stability outcome for one stope. Numeric fields are rounded to 2 dp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityAssessment {
    pub safety_factor: f64,
    pub stability_class: StabilityClass,
    /// In-situ vertical stress σv (MPa)
    pub vertical_stress: f64,
    /// In-situ horizontal stress σh (MPa)
    pub horizontal_stress: f64,
    /// Horizontal-to-vertical stress ratio
    pub k_ratio: f64,
    /// Thickness-adjusted rock mass strength (MPa)
    pub rock_strength: f64,
    pub dgms_compliant: bool,
}

/// Stress/strength analysis component.
#[derive(Debug, Clone, Copy)]
pub struct StressStrengthAnalyzer {
    stress_gradient: f64,
    mi: f64,
    safety_factor_min: f64,
}

impl StressStrengthAnalyzer {
    pub fn new(config: &DesignConfig) -> Self {
        StressStrengthAnalyzer {
            stress_gradient: config.geomechanics.stress_factor_mpa_per_m,
            mi: config.geomechanics.hoek_brown_mi,
            safety_factor_min: config.regulatory.safety_factor_min,
        }
    }

    /// Hoek-Brown strength estimate for the inputs.
    pub fn strength(&self, inputs: &DesignInputs) -> RockStrength {
        let rqd = clamp(inputs.rqd, 0.0, 100.0);
        let ucs = inputs.ucs_mpa.unwrap_or_else(|| ucs_from_rqd(rqd));
        let gsi = gsi_from_rqd(rqd);
        let hoek_brown = HoekBrownParameters {
            ucs,
            gsi,
            mb: hoek_brown_mb(self.mi, gsi),
            s: hoek_brown_s(gsi),
            a: hoek_brown_a(gsi),
        };

        let unadjusted = rock_mass_strength(ucs, hoek_brown.s, hoek_brown.a);
        let thickness_factor = thickness_adjustment(inputs.ore_thickness.max(MIN_THICKNESS_M));

        RockStrength {
            hoek_brown,
            unadjusted,
            thickness_factor,
            strength: unadjusted * thickness_factor,
        }
    }

    /// Full stability assessment.
    pub fn assess(&self, inputs: &DesignInputs) -> StabilityAssessment {
        let depth = if inputs.mining_depth < MIN_DEPTH_M || inputs.mining_depth.is_nan() {
            warn!(depth = inputs.mining_depth, floor = MIN_DEPTH_M, "mining depth below floor, clamping");
            MIN_DEPTH_M
        } else {
            inputs.mining_depth
        };

        let sigma_v = vertical_stress(Meters(depth), self.stress_gradient);
        let k = k_ratio(Meters(depth));
        let sigma_h = horizontal_stress(sigma_v, k);
        let strength = self.strength(inputs);

        let safety_factor = round2(strength.strength / sigma_v.value());
        let stability_class = StabilityClass::from_safety_factor(safety_factor);

        debug!(
            sigma_v = sigma_v.value(),
            k,
            strength = strength.strength,
            safety_factor,
            %stability_class,
            "stability assessed"
        );

        StabilityAssessment {
            safety_factor,
            stability_class,
            vertical_stress: sigma_v.rounded(),
            horizontal_stress: sigma_h.rounded(),
            k_ratio: round2(k),
            rock_strength: round2(strength.strength),
            dgms_compliant: safety_factor >= self.safety_factor_min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> StressStrengthAnalyzer {
        StressStrengthAnalyzer::new(&DesignConfig::default())
    }

    #[test]
    fn test_reference_assessment() {
        let a = analyzer().assess(&DesignInputs::new(55.0, 2.0, 80.0, 400.0));
        assert_eq!(a.vertical_stress, 11.2);
        assert_eq!(a.k_ratio, 2.0);
        assert_eq!(a.horizontal_stress, 22.4);
        assert_eq!(a.rock_strength, 12.12);
        assert_eq!(a.safety_factor, 1.08);
        assert_eq!(a.stability_class, StabilityClass::Unstable);
        assert!(!a.dgms_compliant);
    }

    #[test]
    fn test_reference_hoek_brown_parameters() {
        let s = analyzer().strength(&DesignInputs::new(55.0, 2.0, 80.0, 400.0));
        assert_eq!(s.hoek_brown.ucs, 84.0);
        assert_eq!(s.hoek_brown.gsi, 65.0);
        assert!((s.hoek_brown.s - (-35.0_f64 / 9.0).exp()).abs() < 1e-12);
        assert!((s.unadjusted - 11.9256).abs() < 1e-3);
        assert!((s.thickness_factor - (1.0 + 0.015 * 3.0_f64.ln())).abs() < 1e-12);
        assert!((s.strength - 12.1222).abs() < 1e-3);
    }

    #[test]
    fn test_class_thresholds() {
        assert_eq!(StabilityClass::from_safety_factor(1.49), StabilityClass::Unstable);
        assert_eq!(StabilityClass::from_safety_factor(1.5), StabilityClass::Marginal);
        assert_eq!(StabilityClass::from_safety_factor(1.99), StabilityClass::Marginal);
        assert_eq!(StabilityClass::from_safety_factor(2.0), StabilityClass::Stable);
        assert_eq!(StabilityClass::from_safety_factor(2.49), StabilityClass::Stable);
        assert_eq!(StabilityClass::from_safety_factor(2.5), StabilityClass::HighlyStable);
        assert!(StabilityClass::Unstable < StabilityClass::HighlyStable);
    }

    #[test]
    fn test_shallow_stope_is_stable() {
        // σv = 1.4 MPa at 50 m, far below any RQD-80 strength
        let a = analyzer().assess(&DesignInputs::new(55.0, 2.0, 80.0, 50.0));
        assert_eq!(a.k_ratio, 1.5);
        assert_eq!(a.stability_class, StabilityClass::HighlyStable);
        assert!(a.dgms_compliant);
    }

    #[test]
    fn test_compliance_tracks_safety_factor() {
        let an = analyzer();
        for depth in [20.0, 80.0, 150.0, 300.0, 800.0, 1800.0] {
            for rqd in [25.0, 50.0, 75.0, 100.0] {
                let a = an.assess(&DesignInputs::new(40.0, 5.0, rqd, depth));
                assert_eq!(a.dgms_compliant, a.safety_factor >= 1.5);
                assert_eq!(a.stability_class, StabilityClass::from_safety_factor(a.safety_factor));
            }
        }
    }

    #[test]
    fn test_zero_depth_is_floored() {
        let a = analyzer().assess(&DesignInputs::new(30.0, 2.0, 60.0, 0.0));
        assert!(a.safety_factor.is_finite());
        assert!(a.safety_factor > 0.0);
        assert_eq!(a.k_ratio, 1.5);
    }

    #[test]
    fn test_measured_ucs_overrides_correlation() {
        let an = analyzer();
        let base = DesignInputs::new(55.0, 2.0, 80.0, 400.0);
        let measured = an.strength(&base.with_ucs(168.0));
        assert_eq!(measured.hoek_brown.ucs, 168.0);
        assert!((measured.strength - 2.0 * an.strength(&base).strength).abs() < 1e-9);
    }

    #[test]
    fn test_deep_k_ratio_formula() {
        let a = analyzer().assess(&DesignInputs::new(40.0, 5.0, 60.0, 2000.0));
        assert_eq!(a.k_ratio, round2(0.65 + 1350.0 / 2200.0));
    }

    #[test]
    fn test_serialized_shape() {
        let a = analyzer().assess(&DesignInputs::new(55.0, 2.0, 80.0, 400.0));
        let v = serde_json::to_value(a).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        assert_eq!(v["stability_class"], "Unstable");
        assert_eq!(v["dgms_compliant"], false);
    }
}
