//! # Regulatory References
//!
//! Indian mining regulations (DGMS circulars and the Metalliferous Mines
//! Regulations) cited in design reports.

use serde::{Deserialize, Serialize};

/// A DGMS/MMR requirement a stope design is checked or reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regulation {
    /// Minimum safety factor for stope stability
    SafetyFactor,
    /// Mine ventilation standards
    Ventilation,
    /// Strata control and ground support
    StrataControl,
    /// Pillar dimensions
    PillarDesign,
}

impl Regulation {
    pub const ALL: [Regulation; 4] = [
        Regulation::SafetyFactor,
        Regulation::Ventilation,
        Regulation::StrataControl,
        Regulation::PillarDesign,
    ];

    /// Circular/regulation number for reports
    pub fn citation(&self) -> &'static str {
        match self {
            Regulation::SafetyFactor => "DGMS Tech. Circular No. 3 of 2019",
            Regulation::Ventilation => "DGMS Circular No. 01 of 2011 & Reg. 130/157 of MMR",
            Regulation::StrataControl => "MMR 2011 Regulation 111, DGMS Circular No. 3 of 2017",
            Regulation::PillarDesign => "DGMS (Tech)(SCR) Circular No. 01 of 2019",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Regulation::SafetyFactor => "Safety Factor",
            Regulation::Ventilation => "Ventilation",
            Regulation::StrataControl => "Strata Control",
            Regulation::PillarDesign => "Pillar Design",
        }
    }
}
