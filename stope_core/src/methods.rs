//! # Mining Method Selection
//!
//! The closed set of stope types and the ordered decision table that picks
//! one from dip, RQD and depth.
//!
//! ## Decision Table (first match wins)
//!
//! | # | Condition                                  | Method                   |
//! |---|--------------------------------------------|--------------------------|
//! | 1 | dip > 60 ∧ RQD ≥ 75 ∧ depth < 800          | Vertical Crater Retreat  |
//! | 2 | 45 < dip ≤ 60 ∧ RQD ≥ 75                   | Sublevel Stoping         |
//! | 3 | 30 < dip ≤ 45 ∧ RQD ≥ 60                   | Cut-and-Fill             |
//! | 4 | dip ≤ 30 ∧ RQD ≥ 50                        | Room-and-Pillar          |
//! | 5 | dip > 50 ∧ RQD ≥ 40                        | Shrinkage Stoping        |
//! | 6 | otherwise                                  | Shrinkage Stoping        |
//!
//! ## Example
//!
//! ```rust
//! use stope_core::methods::{MethodClassifier, StopeType};
//!
//! assert_eq!(MethodClassifier::classify(55.0, 80.0, 400.0), StopeType::SublevelStoping);
//! assert_eq!(MethodClassifier::classify(20.0, 55.0, 200.0), StopeType::RoomAndPillar);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Underground stoping method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopeType {
    SublevelStoping,
    RoomAndPillar,
    CutAndFill,
    ShrinkageStoping,
    VerticalCraterRetreat,
}

impl StopeType {
    /// All stope types for UI selection
    pub const ALL: [StopeType; 5] = [
        StopeType::SublevelStoping,
        StopeType::RoomAndPillar,
        StopeType::CutAndFill,
        StopeType::ShrinkageStoping,
        StopeType::VerticalCraterRetreat,
    ];

    /// Get display name for this method
    pub fn display_name(&self) -> &'static str {
        match self {
            StopeType::SublevelStoping => "Sublevel Stoping",
            StopeType::RoomAndPillar => "Room-and-Pillar",
            StopeType::CutAndFill => "Cut-and-Fill",
            StopeType::ShrinkageStoping => "Shrinkage Stoping",
            StopeType::VerticalCraterRetreat => "Vertical Crater Retreat",
        }
    }

    /// Typical dimensions and applicability limits for this method.
    pub fn characteristics(&self) -> StopeCharacteristics {
        match self {
            StopeType::SublevelStoping => StopeCharacteristics {
                typical_width_m: (15.0, 25.0),
                typical_length_m: (40.0, 80.0),
                typical_height_m: (20.0, 60.0),
                min_dip: Some(45.0),
                max_dip: None,
                min_rqd: 75.0,
                description: "Large-scale method with sublevel development",
            },
            StopeType::RoomAndPillar => StopeCharacteristics {
                typical_width_m: (6.0, 12.0),
                typical_length_m: (20.0, 50.0),
                typical_height_m: (3.0, 8.0),
                min_dip: None,
                max_dip: Some(30.0),
                min_rqd: 50.0,
                description: "Systematic extraction with support pillars",
            },
            StopeType::CutAndFill => StopeCharacteristics {
                typical_width_m: (8.0, 15.0),
                typical_length_m: (30.0, 60.0),
                typical_height_m: (4.0, 12.0),
                min_dip: Some(30.0),
                max_dip: None,
                min_rqd: 60.0,
                description: "Sequential cutting and backfilling",
            },
            StopeType::ShrinkageStoping => StopeCharacteristics {
                typical_width_m: (4.0, 8.0),
                typical_length_m: (20.0, 40.0),
                typical_height_m: (15.0, 50.0),
                min_dip: Some(50.0),
                max_dip: None,
                min_rqd: 40.0,
                description: "Ore storage method for steep deposits",
            },
            StopeType::VerticalCraterRetreat => StopeCharacteristics {
                typical_width_m: (20.0, 35.0),
                typical_length_m: (50.0, 100.0),
                typical_height_m: (30.0, 80.0),
                min_dip: Some(60.0),
                max_dip: None,
                min_rqd: 80.0,
                description: "Large-hole blasting method",
            },
        }
    }
}

impl fmt::Display for StopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Typical geometry and applicability of a stoping method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StopeCharacteristics {
    /// (min, max) typical stope width
    pub typical_width_m: (f64, f64),
    /// (min, max) typical stope length
    pub typical_length_m: (f64, f64),
    /// (min, max) typical stope height
    pub typical_height_m: (f64, f64),
    /// Minimum dip the method is normally used at
    pub min_dip: Option<f64>,
    /// Maximum dip the method is normally used at
    pub max_dip: Option<f64>,
    /// Minimum RQD the method is normally used at
    pub min_rqd: f64,
    pub description: &'static str,
}

/// Mining method decision table.
pub struct MethodClassifier;

impl MethodClassifier {
    /// Select a stope type. Total: every input maps to exactly one method.
    #[allow(clippy::if_same_then_else)]
    pub fn classify(dip: f64, rqd: f64, depth: f64) -> StopeType {
        if dip > 60.0 && rqd >= 75.0 && depth < 800.0 {
            StopeType::VerticalCraterRetreat
        } else if dip > 45.0 && dip <= 60.0 && rqd >= 75.0 {
            StopeType::SublevelStoping
        } else if dip > 30.0 && dip <= 45.0 && rqd >= 60.0 {
            StopeType::CutAndFill
        } else if dip <= 30.0 && rqd >= 50.0 {
            StopeType::RoomAndPillar
        } else if dip > 50.0 && rqd >= 40.0 {
            StopeType::ShrinkageStoping
        } else {
            StopeType::ShrinkageStoping
        }
    }
}
