//! # Text Reports
//!
//! Plain-text renderings of a [`StopeDesignResult`]: a one-screen summary
//! for terminals and a longer report suitable for saving next to the
//! design file.
//!
//! ## Example
//!
//! ```rust
//! use stope_core::calculations::StopeDesigner;
//! use stope_core::inputs::DesignInputs;
//! use stope_core::report;
//!
//! let inputs = DesignInputs::new(55.0, 2.0, 80.0, 400.0);
//! let result = StopeDesigner::default().design(&inputs);
//!
//! let summary = report::summarize(&result);
//! assert!(summary.contains("Sublevel Stoping"));
//!
//! let text = report::summary_text(&result, &inputs.advisories(), Some("Level 3 north drive"));
//! assert!(text.contains("APPLICABLE INDIAN MINING REGULATIONS"));
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::calculations::StopeDesignResult;
use crate::inputs::Advisory;
use crate::references::Regulation;
use crate::rock_mass::RockMassClassifier;

const RULE: &str = "=============================================";

/// Short multi-line summary.
pub fn summarize(result: &StopeDesignResult) -> String {
    let d = &result.dimensions;
    let s = &result.stability;
    let compliance = if s.dgms_compliant { "✓" } else { "✗" };

    format!(
        "Stope Design Summary\n\
         Method: {}\n\
         Dimensions (L×W×H): {:.2} × {:.2} × {:.2} m\n\
         Volume: {:.2} m³\n\
         Safety Factor: {:.2} {} DGMS\n\
         Stability: {}\n\
         Total Cost: INR {:.2}",
        result.stope_type, d.length, d.width, d.height, d.volume, s.safety_factor, compliance, s.stability_class,
        result.costs.total,
    )
}

/// Full plain-text report stamped with the current time.
pub fn summary_text(result: &StopeDesignResult, advisories: &[Advisory], notes: Option<&str>) -> String {
    render_summary(result, advisories, notes, Utc::now())
}

/// Full plain-text report with an explicit generation time.
pub fn render_summary(
    result: &StopeDesignResult,
    advisories: &[Advisory],
    notes: Option<&str>,
    generated: DateTime<Utc>,
) -> String {
    SummaryReport {
        result,
        advisories,
        notes,
        generated,
    }
    .to_string()
}

/// Full report as a [`fmt::Display`] value, for writing straight to a
/// file or terminal without building the string first.
pub struct SummaryReport<'a> {
    pub result: &'a StopeDesignResult,
    pub advisories: &'a [Advisory],
    pub notes: Option<&'a str>,
    pub generated: DateTime<Utc>,
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.result.dimensions;
        let s = &self.result.stability;
        let c = &self.result.costs;

        writeln!(f, "{}", RULE)?;
        writeln!(f, "           MINING STOPE DESIGN SUMMARY")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Generated on: {}", self.generated.format("%Y-%m-%d %H:%M"))?;
        writeln!(f)?;

        section(f, "STOPE CONFIGURATION")?;
        writeln!(f, "Stope Type: {}", self.result.stope_type)?;
        writeln!(f, "Length: {:.2} m", d.length)?;
        writeln!(f, "Width: {:.2} m", d.width)?;
        writeln!(f, "Height: {:.2} m", d.height)?;
        writeln!(f, "Volume: {:.2} m³", d.volume)?;
        writeln!(f, "Hydraulic Radius: {:.2} m", d.hydraulic_radius)?;
        writeln!(f, "Design Hydraulic Radius: {:.2} m", d.design_hydraulic_radius)?;
        writeln!(f, "Stability Number (N'): {:.2}", d.stability_number)?;
        writeln!(f, "RMR: {:.2} ({})", d.rmr, RockMassClassifier::rmr_class(d.rmr))?;
        writeln!(f, "Q-value: {:.2}", d.q_value)?;
        writeln!(f)?;

        section(f, "STABILITY ANALYSIS")?;
        let compliance = if s.dgms_compliant {
            "[COMPLIANT] DGMS Compliant"
        } else {
            "[WARNING] Below DGMS Minimum"
        };
        writeln!(f, "Safety Factor: {:.2} ({})", s.safety_factor, compliance)?;
        writeln!(f, "Stability Class: {}", s.stability_class)?;
        writeln!(f, "Vertical Stress: {:.2} MPa", s.vertical_stress)?;
        writeln!(f, "Horizontal Stress: {:.2} MPa", s.horizontal_stress)?;
        writeln!(f, "K Ratio: {:.2}", s.k_ratio)?;
        writeln!(f, "Rock Strength: {:.2} MPa", s.rock_strength)?;
        writeln!(f)?;

        section(f, "APPLICABLE INDIAN MINING REGULATIONS")?;
        for reg in Regulation::ALL {
            writeln!(f, "- {}: {}", reg.title(), reg.citation())?;
        }
        writeln!(f)?;

        section(f, "COST ANALYSIS (IBM STANDARDS)")?;
        writeln!(f, "Total Cost: INR {:.2}", c.total)?;
        writeln!(f, "Cost Breakdown:")?;
        writeln!(f, "  - Labor: INR {:.2}", c.labor)?;
        writeln!(f, "  - Equipment: INR {:.2}", c.equipment)?;
        writeln!(f, "  - Support: INR {:.2}", c.support)?;
        writeln!(f, "  - Ventilation: INR {:.2}", c.ventilation)?;

        if !self.advisories.is_empty() {
            writeln!(f)?;
            section(f, "DGMS SAFETY ALERTS & COMPLIANCE NOTES")?;
            for advisory in self.advisories {
                writeln!(f, "- {}", advisory)?;
            }
        }

        if let Some(notes) = self.notes.map(str::trim).filter(|n| !n.is_empty()) {
            writeln!(f)?;
            section(f, "ADDITIONAL NOTES")?;
            writeln!(f, "{}", notes)?;
        }

        Ok(())
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "-".repeat(title.chars().count()))
}
