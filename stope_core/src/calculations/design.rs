//! # Stope Design Orchestrator
//!
//! Runs the design pipeline for one set of inputs:
//!
//! ```text
//! Received → Classified → Sized → Assessed → Costed → Complete
//! ```
//!
//! Every stage is a pure computation on the immutable components built from
//! the [`DesignConfig`] at construction. A `StopeDesigner` holds no mutable
//! state, so one instance can be shared across threads and two calls with
//! the same inputs return identical results.
//!
//! ## Example
//!
//! ```rust
//! use stope_core::calculations::design::StopeDesigner;
//! use stope_core::config::DesignConfig;
//! use stope_core::inputs::DesignInputs;
//! use stope_core::methods::StopeType;
//!
//! let designer = StopeDesigner::new(DesignConfig::default());
//! let result = designer.design_checked(&DesignInputs::new(55.0, 2.0, 80.0, 400.0)).unwrap();
//!
//! assert_eq!(result.stope_type, StopeType::SublevelStoping);
//! assert_eq!(result.dimensions.width, 6.12);
//! assert_eq!(result.stability.safety_factor, 1.08);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::calculations::cost::{CostBreakdown, CostEstimator};
use crate::calculations::geometry::{GeometryDeriver, StopeDimensions};
use crate::calculations::stability::{StabilityAssessment, StressStrengthAnalyzer};
use crate::config::DesignConfig;
use crate::errors::CalcResult;
use crate::inputs::DesignInputs;
use crate::methods::{MethodClassifier, StopeType};
use crate::units::round2;

/// Pipeline stage, strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DesignStage {
    Received,
    Classified,
    Sized,
    Assessed,
    Costed,
    Complete,
}

impl DesignStage {
    /// The stage after this one; `Complete` is terminal.
    pub fn next(self) -> Option<DesignStage> {
        match self {
            DesignStage::Received => Some(DesignStage::Classified),
            DesignStage::Classified => Some(DesignStage::Sized),
            DesignStage::Sized => Some(DesignStage::Assessed),
            DesignStage::Assessed => Some(DesignStage::Costed),
            DesignStage::Costed => Some(DesignStage::Complete),
            DesignStage::Complete => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == DesignStage::Complete
    }
}

impl fmt::Display for DesignStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Complete design record.
///
/// ## JSON Shape
///
/// ```json
/// {
///   "stope_type": "SublevelStoping",
///   "dimensions": { "length": 61.24, "width": 6.12, "height": 4.9, "volume": 1836.47, ... },
///   "stability": { "safety_factor": 1.08, "stability_class": "Unstable", ... },
///   "costs": { "labor": 1836470.0, "equipment": 113861.14, ..., "total": 2457196.86 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopeDesignResult {
    pub stope_type: StopeType,
    pub dimensions: StopeDimensions,
    pub stability: StabilityAssessment,
    pub costs: CostBreakdown,
}

impl StopeDesignResult {
    /// Ore tonnage in the stope for a given density (t/m³).
    pub fn tonnage(&self, ore_density: f64) -> f64 {
        round2(self.dimensions.volume * ore_density)
    }

    /// Total cost per tonne of ore (INR/t).
    pub fn cost_per_ton(&self, ore_density: f64) -> f64 {
        self.costs.cost_per_ton(self.dimensions.volume, ore_density)
    }

    /// Whether the design meets the DGMS safety factor.
    pub fn is_compliant(&self) -> bool {
        self.stability.dgms_compliant
    }
}

/// Design orchestrator.
#[derive(Debug, Clone)]
pub struct StopeDesigner {
    config: DesignConfig,
    geometry: GeometryDeriver,
    analyzer: StressStrengthAnalyzer,
    costs: CostEstimator,
}

impl Default for StopeDesigner {
    fn default() -> Self {
        StopeDesigner::new(DesignConfig::default())
    }
}

impl StopeDesigner {
    pub fn new(config: DesignConfig) -> Self {
        StopeDesigner {
            geometry: GeometryDeriver::new(&config),
            analyzer: StressStrengthAnalyzer::new(&config),
            costs: CostEstimator::new(&config),
            config,
        }
    }

    /// Validate the configuration before building the designer.
    pub fn with_config(config: DesignConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(StopeDesigner::new(config))
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    /// Validate `inputs`, then design.
    pub fn design_checked(&self, inputs: &DesignInputs) -> CalcResult<StopeDesignResult> {
        inputs.validate()?;
        Ok(self.design(inputs))
    }

    /// Run the pipeline. Total over validated inputs; out-of-range values are
    /// clamped rather than rejected.
    pub fn design(&self, inputs: &DesignInputs) -> StopeDesignResult {
        let mut stage = DesignStage::Received;
        debug!(
            %stage,
            dip = inputs.dip_angle,
            thickness = inputs.ore_thickness,
            rqd = inputs.rqd,
            depth = inputs.mining_depth,
            "design requested"
        );

        let stope_type = MethodClassifier::classify(inputs.dip_angle, inputs.rqd, inputs.mining_depth);
        stage = self.advance(stage);
        debug!(%stage, %stope_type, "method selected");

        let dimensions = self.geometry.derive(inputs, stope_type);
        stage = self.advance(stage);
        debug!(
            %stage,
            width = dimensions.width,
            length = dimensions.length,
            height = dimensions.height,
            volume = dimensions.volume,
            "geometry derived"
        );

        let stability = self.analyzer.assess(inputs);
        stage = self.advance(stage);
        debug!(%stage, safety_factor = stability.safety_factor, compliant = stability.dgms_compliant, "stability assessed");

        let costs = self
            .costs
            .estimate(stope_type, dimensions.volume, inputs.rqd, inputs.mining_depth);
        stage = self.advance(stage);
        debug!(%stage, total = costs.total, "costs estimated");

        stage = self.advance(stage);
        debug!(%stage, "design complete");

        StopeDesignResult {
            stope_type,
            dimensions,
            stability,
            costs,
        }
    }

    fn advance(&self, stage: DesignStage) -> DesignStage {
        stage.next().unwrap_or(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::stability::StabilityClass;

    fn reference() -> DesignInputs {
        DesignInputs::new(55.0, 2.0, 80.0, 400.0)
    }

    #[test]
    fn test_stage_sequence() {
        let mut stages = vec![DesignStage::Received];
        while let Some(next) = stages[stages.len() - 1].next() {
            stages.push(next);
        }
        assert_eq!(
            stages,
            vec![
                DesignStage::Received,
                DesignStage::Classified,
                DesignStage::Sized,
                DesignStage::Assessed,
                DesignStage::Costed,
                DesignStage::Complete,
            ]
        );
        assert!(DesignStage::Complete.is_terminal());
        assert!(!DesignStage::Costed.is_terminal());
    }

    #[test]
    fn test_reference_design() {
        let r = StopeDesigner::default().design(&reference());

        assert_eq!(r.stope_type, StopeType::SublevelStoping);
        assert_eq!(r.dimensions.stope_type, r.stope_type);
        assert_eq!(r.dimensions.rmr, 78.6);
        assert_eq!(r.dimensions.q_value, 7.11);
        assert_eq!(r.dimensions.width, 6.12);
        assert_eq!(r.dimensions.length, 61.24);
        assert_eq!(r.dimensions.height, 4.9);
        assert!((r.dimensions.volume - 1836.47).abs() < 0.011);
        assert_eq!(r.stability.safety_factor, 1.08);
        assert_eq!(r.stability.stability_class, StabilityClass::Unstable);
        assert!(!r.is_compliant());
        assert_eq!(r.costs.equipment, round2(r.dimensions.volume * 62.0));
    }

    #[test]
    fn test_room_and_pillar_scenario() {
        let r = StopeDesigner::default().design(&DesignInputs::new(20.0, 4.0, 55.0, 200.0));
        assert_eq!(r.stope_type, StopeType::RoomAndPillar);
        assert!(r.dimensions.width >= 3.0);
    }

    #[test]
    fn test_design_checked_rejects_out_of_range() {
        let err = StopeDesigner::default()
            .design_checked(&DesignInputs::new(55.0, 2.0, 20.0, 400.0))
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("rqd"));
    }

    #[test]
    fn test_with_config_rejects_bad_config() {
        let mut cfg = DesignConfig::default();
        cfg.joints.srf = 0.0;
        assert!(StopeDesigner::with_config(cfg).is_err());
    }

    #[test]
    fn test_tonnage_and_cost_per_ton() {
        let r = StopeDesigner::default().design(&reference());
        assert_eq!(r.tonnage(2.7), round2(r.dimensions.volume * 2.7));
        assert_eq!(r.cost_per_ton(2.7), round2(r.costs.total / (r.dimensions.volume * 2.7)));
    }

    #[test]
    fn test_result_json_shape() {
        let r = StopeDesigner::default().design(&reference());
        let v = serde_json::to_value(r).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for key in ["stope_type", "dimensions", "stability", "costs"] {
            assert!(keys.contains(&key));
        }
        assert_eq!(v["stope_type"], "SublevelStoping");
        assert_eq!(v["dimensions"].as_object().unwrap().len(), 10);
        assert_eq!(v["costs"].as_object().unwrap().len(), 5);

        let back: StopeDesignResult = serde_json::from_value(v).unwrap();
        assert_eq!(back.stope_type, r.stope_type);
        assert_eq!(back.stability.stability_class, r.stability.stability_class);
    }

    #[test]
    fn test_config_flows_through() {
        let mut cfg = DesignConfig::default();
        cfg.regulatory.safety_factor_min = 1.0;
        let r = StopeDesigner::new(cfg).design(&reference());
        // Lower SF minimum relaxes compliance and tightens the width adjustment to 0.85
        assert!(r.is_compliant());
        assert!(r.dimensions.width < 6.12);
    }
}
