//! # Design Configuration
//!
//! Geomechanical and regulatory constants consumed by the design components.
//! A `DesignConfig` is built once (defaults, TOML file, or project file) and
//! handed to each component at construction; nothing reads process-wide state.
//!
//! ## Defaults
//!
//! | Section        | Constant                      | Default |
//! |----------------|-------------------------------|---------|
//! | joints         | Jn / Jr / Ja / Jw / SRF       | 9 / 2 / 1 / 1.0 / 2.5 |
//! | geomechanics   | CMRI RMR adjustment           | 5       |
//! | geomechanics   | vertical stress gradient      | 0.028 MPa/m |
//! | geomechanics   | Hoek-Brown mi                 | 15      |
//! | regulatory     | DGMS minimum safety factor    | 1.5     |
//! | regulatory     | DGMS minimum pillar width     | 3.0 m   |
//! | costs          | labour rate                   | 1200 INR/person-day |
//!
//! ## Example
//!
//! ```rust
//! use stope_core::config::DesignConfig;
//!
//! let cfg = DesignConfig::from_toml_str("[joints]\njn = 12.0\n").unwrap();
//! assert_eq!(cfg.joints.jn, 12.0);
//! assert_eq!(cfg.joints.srf, 2.5); // untouched keys keep their defaults
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Q-system joint parameters (Barton).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointParameters {
    /// Joint set number Jn
    pub jn: f64,
    /// Joint roughness number Jr
    pub jr: f64,
    /// Joint alteration number Ja
    pub ja: f64,
    /// Joint water reduction factor Jw
    pub jw: f64,
    /// Stress reduction factor SRF
    pub srf: f64,
}

impl Default for JointParameters {
    fn default() -> Self {
        JointParameters {
            jn: 9.0,
            jr: 2.0,
            ja: 1.0,
            jw: 1.0,
            srf: 2.5,
        }
    }
}

/// Empirical constants for rock mass rating, stress and strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeomechanicalConstants {
    /// Regional (CMRI) correction added to the RQD-based RMR
    pub rmr_adjustment: f64,
    /// Vertical stress gradient in MPa per metre of depth
    pub stress_factor_mpa_per_m: f64,
    /// Hoek-Brown intact material constant mi
    pub hoek_brown_mi: f64,
}

impl Default for GeomechanicalConstants {
    fn default() -> Self {
        GeomechanicalConstants {
            rmr_adjustment: 5.0,
            stress_factor_mpa_per_m: 0.028,
            hoek_brown_mi: 15.0,
        }
    }
}

/// DGMS regulatory limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulatoryLimits {
    /// Minimum safety factor for compliance
    pub safety_factor_min: f64,
    /// Minimum stope/pillar width in metres
    pub min_pillar_width_m: f64,
}

impl Default for RegulatoryLimits {
    fn default() -> Self {
        RegulatoryLimits {
            safety_factor_min: 1.5,
            min_pillar_width_m: 3.0,
        }
    }
}

/// Unit rates for the cost estimate (INR).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRates {
    /// Labour rate per person-day
    pub labor_rate_inr_per_person_day: f64,
    /// Equipment cost per cubic metre
    pub equipment_rate_inr_per_m3: f64,
    /// Ventilation base cost per cubic metre (scaled by depth)
    pub ventilation_rate_inr_per_m3: f64,
    /// Support base rate for RQD below 50
    pub support_rate_poor_inr_per_m3: f64,
    /// Support base rate for RQD in [50, 75)
    pub support_rate_fair_inr_per_m3: f64,
    /// Support base rate for RQD of 75 and above
    pub support_rate_good_inr_per_m3: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        CostRates {
            labor_rate_inr_per_person_day: 1200.0,
            equipment_rate_inr_per_m3: 62.0,
            ventilation_rate_inr_per_m3: 120.0,
            support_rate_poor_inr_per_m3: 480.0,
            support_rate_fair_inr_per_m3: 320.0,
            support_rate_good_inr_per_m3: 180.0,
        }
    }
}

/// Complete configuration for one design run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    pub joints: JointParameters,
    pub geomechanics: GeomechanicalConstants,
    pub regulatory: RegulatoryLimits,
    pub costs: CostRates,
}

impl DesignConfig {
    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let cfg: DesignConfig =
            toml::from_str(text).map_err(|e| CalcError::serialization(format!("Invalid config TOML: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Render this configuration as TOML.
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Reject constants that would divide by zero or flip signs inside the formulas.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("joints.jn", self.joints.jn),
            ("joints.ja", self.joints.ja),
            ("joints.srf", self.joints.srf),
            ("geomechanics.stress_factor_mpa_per_m", self.geomechanics.stress_factor_mpa_per_m),
            ("geomechanics.hoek_brown_mi", self.geomechanics.hoek_brown_mi),
            ("regulatory.safety_factor_min", self.regulatory.safety_factor_min),
            ("regulatory.min_pillar_width_m", self.regulatory.min_pillar_width_m),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_config(field, value.to_string(), "Must be a positive number"));
            }
        }

        let non_negative = [
            ("joints.jr", self.joints.jr),
            ("joints.jw", self.joints.jw),
            ("costs.labor_rate_inr_per_person_day", self.costs.labor_rate_inr_per_person_day),
            ("costs.equipment_rate_inr_per_m3", self.costs.equipment_rate_inr_per_m3),
            ("costs.ventilation_rate_inr_per_m3", self.costs.ventilation_rate_inr_per_m3),
            ("costs.support_rate_poor_inr_per_m3", self.costs.support_rate_poor_inr_per_m3),
            ("costs.support_rate_fair_inr_per_m3", self.costs.support_rate_fair_inr_per_m3),
            ("costs.support_rate_good_inr_per_m3", self.costs.support_rate_good_inr_per_m3),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_config(field, value.to_string(), "Must be a finite, non-negative number"));
            }
        }

        if !self.geomechanics.rmr_adjustment.is_finite() {
            return Err(CalcError::invalid_config(
                "geomechanics.rmr_adjustment",
                self.geomechanics.rmr_adjustment.to_string(),
                "Must be a finite number",
            ));
        }
        Ok(())
    }
}
