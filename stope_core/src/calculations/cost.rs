//! # Cost Estimate
//!
//! Direct mining cost for one stope in INR, split into labour, equipment,
//! ground support and ventilation.
//!
//! ```text
//! labour      = volume / productivity(method) × labour rate
//! equipment   = volume × equipment rate
//! support     = volume × base rate(RQD) × method factor
//! ventilation = volume × ventilation rate × (1 + depth / 1000)
//! ```
//!
//! Each component is rounded to 2 dp and `total` is the rounded sum of the
//! rounded components, so the breakdown always adds up as displayed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CostRates, DesignConfig};
use crate::methods::StopeType;
use crate::units::round2;

/// Person-days of labour per cubic metre mined, by method.
pub fn productivity(stope_type: StopeType) -> f64 {
    match stope_type {
        StopeType::RoomAndPillar => 0.8,
        StopeType::SublevelStoping => 1.2,
        StopeType::CutAndFill => 0.6,
        StopeType::ShrinkageStoping => 0.7,
        StopeType::VerticalCraterRetreat => 1.4,
    }
}

/// Ground support intensity multiplier by method.
pub fn support_factor(stope_type: StopeType) -> f64 {
    match stope_type {
        StopeType::RoomAndPillar => 1.5,
        StopeType::CutAndFill => 0.8,
        _ => 0.6,
    }
}

/// Cost breakdown in INR, each field rounded to 2 dp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub labor: f64,
    pub equipment: f64,
    pub support: f64,
    pub ventilation: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Cost per tonne of ore; zero when the tonnage is not positive.
    pub fn cost_per_ton(&self, volume: f64, ore_density: f64) -> f64 {
        let tonnes = volume * ore_density;
        if tonnes > 0.0 {
            round2(self.total / tonnes)
        } else {
            0.0
        }
    }
}

/// Cost estimation component.
#[derive(Debug, Clone, Copy)]
pub struct CostEstimator {
    rates: CostRates,
}

impl CostEstimator {
    pub fn new(config: &DesignConfig) -> Self {
        CostEstimator { rates: config.costs }
    }

    /// Support base rate (INR/m³) for an RQD value.
    pub fn support_base_rate(&self, rqd: f64) -> f64 {
        if rqd < 50.0 {
            self.rates.support_rate_poor_inr_per_m3
        } else if rqd < 75.0 {
            self.rates.support_rate_fair_inr_per_m3
        } else {
            self.rates.support_rate_good_inr_per_m3
        }
    }

    pub fn estimate(&self, stope_type: StopeType, volume: f64, rqd: f64, depth: f64) -> CostBreakdown {
        let labor = round2(volume / productivity(stope_type) * self.rates.labor_rate_inr_per_person_day);
        let equipment = round2(volume * self.rates.equipment_rate_inr_per_m3);
        let support = round2(volume * self.support_base_rate(rqd) * support_factor(stope_type));
        let ventilation = round2(volume * self.rates.ventilation_rate_inr_per_m3 * (1.0 + depth / 1000.0));
        let total = round2(labor + equipment + support + ventilation);

        debug!(%stope_type, volume, total, "costs estimated");

        CostBreakdown {
            labor,
            equipment,
            support,
            ventilation,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> CostEstimator {
        CostEstimator::new(&DesignConfig::default())
    }

    #[test]
    fn test_reference_costs() {
        let c = estimator().estimate(StopeType::SublevelStoping, 1836.47, 80.0, 400.0);
        assert_eq!(c.labor, 1_836_470.0);
        assert_eq!(c.equipment, 113_861.14);
        assert_eq!(c.support, 198_338.76);
        assert_eq!(c.ventilation, 308_526.96);
        assert!((c.total - 2_457_196.86).abs() < 0.011);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let e = estimator();
        for stope_type in StopeType::ALL {
            for (volume, rqd, depth) in [(150.0, 30.0, 100.0), (1836.47, 80.0, 400.0), (9876.54, 60.0, 1500.0)] {
                let c = e.estimate(stope_type, volume, rqd, depth);
                let sum = c.labor + c.equipment + c.support + c.ventilation;
                assert!((c.total - sum).abs() <= 0.01);
            }
        }
    }

    #[test]
    fn test_support_rate_bands() {
        let e = estimator();
        assert_eq!(e.support_base_rate(49.9), 480.0);
        assert_eq!(e.support_base_rate(50.0), 320.0);
        assert_eq!(e.support_base_rate(74.9), 320.0);
        assert_eq!(e.support_base_rate(75.0), 180.0);
    }

    #[test]
    fn test_room_and_pillar_support_is_heaviest() {
        let e = estimator();
        let rp = e.estimate(StopeType::RoomAndPillar, 1000.0, 60.0, 200.0);
        let cf = e.estimate(StopeType::CutAndFill, 1000.0, 60.0, 200.0);
        let vcr = e.estimate(StopeType::VerticalCraterRetreat, 1000.0, 60.0, 200.0);
        assert_eq!(rp.support, 480_000.0);
        assert_eq!(cf.support, 256_000.0);
        assert_eq!(vcr.support, 192_000.0);
    }

    #[test]
    fn test_ventilation_scales_with_depth() {
        let e = estimator();
        let shallow = e.estimate(StopeType::CutAndFill, 1000.0, 60.0, 0.0);
        let deep = e.estimate(StopeType::CutAndFill, 1000.0, 60.0, 1000.0);
        assert_eq!(shallow.ventilation, 120_000.0);
        assert_eq!(deep.ventilation, 240_000.0);
    }

    #[test]
    fn test_custom_labor_rate() {
        let mut cfg = DesignConfig::default();
        cfg.costs.labor_rate_inr_per_person_day = 600.0;
        let c = CostEstimator::new(&cfg).estimate(StopeType::RoomAndPillar, 800.0, 60.0, 100.0);
        assert_eq!(c.labor, 600_000.0);
    }

    #[test]
    fn test_cost_per_ton() {
        let c = estimator().estimate(StopeType::SublevelStoping, 1000.0, 80.0, 0.0);
        assert_eq!(c.cost_per_ton(1000.0, 2.5), round2(c.total / 2500.0));
        assert_eq!(c.cost_per_ton(0.0, 2.7), 0.0);
    }
}
