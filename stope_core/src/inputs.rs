//! # Design Inputs
//!
//! The value object a design request starts from, plus the boundary checks a
//! front end runs before handing it to the engine.
//!
//! The engine itself never rejects input: it clamps defensively and always
//! returns a result. Range enforcement lives here so that callers can reject
//! out-of-range values with a descriptive message first.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "dip_angle": 55.0,
//!   "ore_thickness": 2.0,
//!   "rqd": 80.0,
//!   "mining_depth": 400.0,
//!   "ore_density": 2.7,
//!   "ore_type": "Copper"
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Fields every input document must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["dip_angle", "ore_thickness", "rqd", "mining_depth"];

/// Default ore density in t/m³ when none is supplied.
pub const DEFAULT_ORE_DENSITY: f64 = 2.7;

/// Allowed ranges with the regulation each one comes from.
pub mod limits {
    /// Ore body thickness (m), IBM economic standards
    pub const ORE_THICKNESS: (f64, f64) = (0.3, 100.0);
    /// Dip angle (degrees), MMR limit for most methods
    pub const DIP_ANGLE: (f64, f64) = (0.0, 70.0);
    /// RQD (%), DGMS minimum for any mining operation
    pub const RQD: (f64, f64) = (25.0, 100.0);
    /// Mining depth (m), practical limit for Indian underground mines
    pub const MINING_DEPTH: (f64, f64) = (5.0, 2000.0);
    /// Measured UCS (MPa), typical rock strength range
    pub const UCS: (f64, f64) = (10.0, 300.0);
    /// Upper bound on ore density (t/m³)
    pub const MAX_ORE_DENSITY: f64 = 10.0;
}

/// Mineral classification of the orebody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OreType {
    #[default]
    Generic,
    Gold,
    Copper,
    Iron,
    Zinc,
    Lead,
    Bauxite,
    Chromite,
    Manganese,
    Limestone,
    Coal,
}

impl OreType {
    /// All ore types for UI selection
    pub const ALL: [OreType; 11] = [
        OreType::Generic,
        OreType::Gold,
        OreType::Copper,
        OreType::Iron,
        OreType::Zinc,
        OreType::Lead,
        OreType::Bauxite,
        OreType::Chromite,
        OreType::Manganese,
        OreType::Limestone,
        OreType::Coal,
    ];

    /// Lower-case name as used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OreType::Generic => "generic",
            OreType::Gold => "gold",
            OreType::Copper => "copper",
            OreType::Iron => "iron",
            OreType::Zinc => "zinc",
            OreType::Lead => "lead",
            OreType::Bauxite => "bauxite",
            OreType::Chromite => "chromite",
            OreType::Manganese => "manganese",
            OreType::Limestone => "limestone",
            OreType::Coal => "coal",
        }
    }

    /// Parse a name, case-insensitive and trimmed.
    pub fn parse(name: &str) -> Option<OreType> {
        let needle = name.trim().to_lowercase();
        OreType::ALL.into_iter().find(|t| t.name() == needle)
    }

    /// Parse a name, falling back to `Generic` with an advisory when unknown.
    pub fn parse_or_generic(name: &str) -> (OreType, Option<Advisory>) {
        match OreType::parse(name) {
            Some(t) => (t, None),
            None => {
                let valid: Vec<&str> = OreType::ALL.iter().map(|t| t.name()).collect();
                let advisory = Advisory::new(
                    AdvisoryKind::UnknownOreType,
                    format!(
                        "Ore type '{}' not recognized. Using 'generic' instead. Valid types: {}",
                        name.trim(),
                        valid.join(", ")
                    ),
                );
                (OreType::Generic, Some(advisory))
            }
        }
    }
}

impl fmt::Display for OreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a DGMS advisory note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvisoryKind {
    /// Steep dip in only moderately competent rock
    SteepDipModerateRqd,
    /// Flat orebody at significant depth
    ShallowDipAtDepth,
    /// Poor rock at depth
    PoorRockAtDepth,
    /// Thin orebody with steep dip
    ThinSteepOrebody,
    /// Unrecognized ore type name
    UnknownOreType,
}

/// A non-blocking compliance note attached to a set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub message: String,
}

impl Advisory {
    pub fn new(kind: AdvisoryKind, message: impl Into<String>) -> Self {
        Advisory {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Inputs for a single stope design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignInputs {
    /// Dip of the orebody from horizontal (degrees)
    pub dip_angle: f64,

    /// True thickness of the orebody (m)
    pub ore_thickness: f64,

    /// Rock Quality Designation (%)
    pub rqd: f64,

    /// Depth below surface (m)
    pub mining_depth: f64,

    /// In-place ore density (t/m³); tonnage and cost per tonne only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ore_density: Option<f64>,

    /// Measured uniaxial compressive strength (MPa); replaces the RQD correlation when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ucs_mpa: Option<f64>,

    /// Mineral classification
    #[serde(default)]
    pub ore_type: OreType,
}

impl DesignInputs {
    /// Inputs with the four required fields and defaults for the rest.
    pub fn new(dip_angle: f64, ore_thickness: f64, rqd: f64, mining_depth: f64) -> Self {
        DesignInputs {
            dip_angle,
            ore_thickness,
            rqd,
            mining_depth,
            ore_density: None,
            ucs_mpa: None,
            ore_type: OreType::Generic,
        }
    }

    /// Parse a JSON input document, reporting the first absent required field by name.
    pub fn from_json(text: &str) -> CalcResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| CalcError::serialization(format!("Invalid input JSON: {}", e)))?;
        for field in REQUIRED_FIELDS {
            if value.get(field).map_or(true, |v| v.is_null()) {
                return Err(CalcError::missing_field(field));
            }
        }
        serde_json::from_value(value).map_err(|e| CalcError::serialization(e.to_string()))
    }

    pub fn with_density(mut self, ore_density: f64) -> Self {
        self.ore_density = Some(ore_density);
        self
    }

    pub fn with_ucs(mut self, ucs_mpa: f64) -> Self {
        self.ucs_mpa = Some(ucs_mpa);
        self
    }

    pub fn with_ore_type(mut self, ore_type: OreType) -> Self {
        self.ore_type = ore_type;
        self
    }

    /// Ore density, falling back to 2.7 t/m³.
    pub fn density(&self) -> f64 {
        self.ore_density.unwrap_or(DEFAULT_ORE_DENSITY)
    }

    /// Validate input parameters, returning the first violation.
    pub fn validate(&self) -> CalcResult<()> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every range violation, in field order.
    pub fn validate_all(&self) -> Vec<CalcError> {
        self.violations()
    }

    fn violations(&self) -> Vec<CalcError> {
        let mut errors = Vec::new();

        let ranged = [
            ("ore_thickness", "Ore body thickness (m)", self.ore_thickness, limits::ORE_THICKNESS, "IBM economic standards"),
            ("dip_angle", "Dip angle (degrees)", self.dip_angle, limits::DIP_ANGLE, "MMR for most methods"),
            ("rqd", "Rock Quality Designation (%)", self.rqd, limits::RQD, "DGMS minimum requirements"),
            (
                "mining_depth",
                "Mining depth (m)",
                self.mining_depth,
                limits::MINING_DEPTH,
                "practical limits for Indian underground mines",
            ),
        ];
        for (field, label, value, range, reference) in ranged {
            if let Some(err) = check_range(field, label, value, range, reference) {
                errors.push(err);
            }
        }

        if let Some(density) = self.ore_density {
            if !density.is_finite() || density <= 0.0 || density > limits::MAX_ORE_DENSITY {
                errors.push(CalcError::invalid_input(
                    "ore_density",
                    density.to_string(),
                    format!("Ore density must be greater than 0 and at most {} t/m³", limits::MAX_ORE_DENSITY),
                ));
            }
        }

        if let Some(ucs) = self.ucs_mpa {
            if let Some(err) = check_range(
                "ucs_mpa",
                "Unconfined compressive strength (MPa)",
                ucs,
                limits::UCS,
                "typical rock strength range",
            ) {
                errors.push(err);
            }
        }

        errors
    }

    /// DGMS compliance notes for this combination of inputs.
    ///
    /// These never block a design; they flag conditions that need extra
    /// ground support or review.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut notes = Vec::new();
        let (dip, rqd, depth) = (self.dip_angle, self.rqd, self.mining_depth);

        if dip > 60.0 && rqd < 70.0 {
            notes.push(Advisory::new(
                AdvisoryKind::SteepDipModerateRqd,
                "DGMS Safety Alert: High dip angle (>60°) with moderate RQD (<70%) requires \
                 additional ground support and monitoring.",
            ));
        }
        if dip < 20.0 && depth > 500.0 {
            notes.push(Advisory::new(
                AdvisoryKind::ShallowDipAtDepth,
                "DGMS Compliance Note: Shallow dip (<20°) at significant depth (>500m) may \
                 require specialized support systems per MMR guidelines.",
            ));
        }
        if rqd < 50.0 && depth > 300.0 {
            notes.push(Advisory::new(
                AdvisoryKind::PoorRockAtDepth,
                "DGMS Warning: Poor rock quality (RQD<50%) at depth >300m requires enhanced \
                 support design per DGMS circular.",
            ));
        }
        if self.ore_thickness < 1.0 && dip > 45.0 {
            notes.push(Advisory::new(
                AdvisoryKind::ThinSteepOrebody,
                "DGMS Note: Thin ore bodies (<1m) with steep dip (>45°) may require specialized \
                 mining methods.",
            ));
        }
        notes
    }
}

fn check_range(field: &str, label: &str, value: f64, (min, max): (f64, f64), reference: &str) -> Option<CalcError> {
    if !value.is_finite() {
        return Some(CalcError::invalid_input(field, value.to_string(), format!("{} must be a valid number", label)));
    }
    if value < min {
        return Some(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be at least {} ({})", label, min, reference),
        ));
    }
    if value > max {
        return Some(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} exceeds maximum allowed value {} ({})", label, max, reference),
        ));
    }
    None
}
