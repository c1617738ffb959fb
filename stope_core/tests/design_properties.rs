//! Whole-pipeline properties checked over a grid of valid inputs.

use std::thread;

use stope_core::calculations::{StabilityClass, StopeDesigner};
use stope_core::methods::StopeType;
use stope_core::rock_mass::RockMassClassifier;
use stope_core::units::round2;
use stope_core::{DesignConfig, DesignInputs};

fn input_grid() -> Vec<DesignInputs> {
    let mut grid = Vec::new();
    for dip in [0.0, 15.0, 30.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0] {
        for thickness in [0.3, 2.0, 15.0, 100.0] {
            for rqd in [25.0, 40.0, 55.0, 75.0, 90.0, 100.0] {
                for depth in [5.0, 250.0, 499.0, 501.0, 799.0, 2000.0] {
                    grid.push(DesignInputs::new(dip, thickness, rqd, depth));
                }
            }
        }
    }
    grid
}

#[test]
fn grid_inputs_are_valid() {
    for inputs in input_grid() {
        assert!(inputs.validate().is_ok(), "{:?}", inputs);
    }
}

#[test]
fn design_is_deterministic() {
    let designer = StopeDesigner::default();
    for inputs in input_grid() {
        let a = designer.design(&inputs);
        let b = designer.design(&inputs);
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }
}

#[test]
fn rock_mass_indices_monotonic_in_rqd() {
    let classifier = RockMassClassifier::new(&DesignConfig::default());
    let mut previous = classifier.classify(25.0);
    let mut rqd = 25.0;
    while rqd <= 100.0 {
        let current = classifier.classify(rqd);
        assert!(current.rmr >= previous.rmr);
        assert!(current.q_value >= previous.q_value);
        previous = current;
        rqd += 0.5;
    }
}

#[test]
fn width_never_below_dgms_minimum() {
    let designer = StopeDesigner::default();
    for inputs in input_grid() {
        let r = designer.design(&inputs);
        assert!(r.dimensions.width >= 3.0, "{:?} -> {}", inputs, r.dimensions.width);
        assert!(r.dimensions.length > 0.0);
        assert!(r.dimensions.height > 0.0);
    }
}

#[test]
fn volume_equals_product_of_reported_dimensions() {
    let designer = StopeDesigner::default();
    for inputs in input_grid() {
        let d = designer.design(&inputs).dimensions;
        assert_eq!(d.volume, round2(d.width * d.length * d.height));
    }
}

#[test]
fn compliance_matches_safety_factor() {
    let designer = StopeDesigner::default();
    for inputs in input_grid() {
        let s = designer.design(&inputs).stability;
        assert_eq!(s.dgms_compliant, s.safety_factor >= 1.5);
        assert_eq!(s.stability_class, StabilityClass::from_safety_factor(s.safety_factor));
    }
}

#[test]
fn stope_type_is_consistent_across_result() {
    let designer = StopeDesigner::default();
    for inputs in input_grid() {
        let r = designer.design(&inputs);
        assert!(StopeType::ALL.contains(&r.stope_type));
        assert_eq!(r.dimensions.stope_type, r.stope_type);
    }
}

#[test]
fn cost_total_is_sum_of_components() {
    let designer = StopeDesigner::default();
    for inputs in input_grid() {
        let c = designer.design(&inputs).costs;
        let sum = c.labor + c.equipment + c.support + c.ventilation;
        assert!((c.total - sum).abs() <= 0.01, "total {} vs sum {}", c.total, sum);
    }
}

#[test]
fn rounded_and_unrounded_totals_agree_within_a_few_paise() {
    // Summing rounded components vs rounding the exact sum differ by at most 4 × 0.005
    let designer = StopeDesigner::default();
    for inputs in input_grid() {
        let r = designer.design(&inputs);
        let v = r.dimensions.volume;
        let c = &r.costs;
        let productivity = match r.stope_type {
            StopeType::RoomAndPillar => 0.8,
            StopeType::SublevelStoping => 1.2,
            StopeType::CutAndFill => 0.6,
            StopeType::ShrinkageStoping => 0.7,
            StopeType::VerticalCraterRetreat => 1.4,
        };
        let base = if inputs.rqd < 50.0 {
            480.0
        } else if inputs.rqd < 75.0 {
            320.0
        } else {
            180.0
        };
        let factor = match r.stope_type {
            StopeType::RoomAndPillar => 1.5,
            StopeType::CutAndFill => 0.8,
            _ => 0.6,
        };
        let exact = v / productivity * 1200.0 + v * 62.0 + v * base * factor + v * 120.0 * (1.0 + inputs.mining_depth / 1000.0);
        assert!((c.total - round2(exact)).abs() <= 0.03, "{} vs {}", c.total, exact);
    }
}

#[test]
fn concurrent_designs_match_sequential() {
    let designer = StopeDesigner::default();
    let grid = input_grid();
    let sequential: Vec<_> = grid.iter().map(|i| designer.design(i)).collect();

    let chunks: Vec<&[DesignInputs]> = grid.chunks(64).collect();
    let concurrent: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .rev()
            .map(|chunk| {
                let designer = &designer;
                scope.spawn(move || chunk.iter().map(|i| designer.design(i)).collect::<Vec<_>>())
            })
            .collect();
        let mut parts: Vec<Vec<_>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        parts.reverse();
        parts.into_iter().flatten().collect()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn reference_scenario_matches_independent_recomputation() {
    let r = StopeDesigner::default().design(&DesignInputs::new(55.0, 2.0, 80.0, 400.0));

    // Rock mass
    let rmr = 0.77 * 80.0 + 12.0 + 5.0;
    let q = (80.0 / 9.0) * (2.0 / 1.0) * (1.0 / 2.5);
    assert_eq!(r.stope_type, StopeType::SublevelStoping);
    assert_eq!(r.dimensions.rmr, round2(rmr));
    assert_eq!(r.dimensions.q_value, round2(q));

    // Stability graph and geometry
    let dip = 55.0_f64.to_radians();
    let b = (0.3_f64 + (55.0 - 20.0) / 70.0).min(0.7);
    let n = q * 0.85 * b * (1.0 - dip.cos());
    let hr = 2.5 + 0.5 * n;
    let width = (2.0 * hr).max(3.0) * 0.9;
    assert_eq!(r.dimensions.stability_number, round2(n));
    assert_eq!(r.dimensions.width, round2(width));
    assert_eq!(r.dimensions.length, round2(10.0 * width));
    assert_eq!(r.dimensions.height, round2(0.8 * width));

    // Stress and strength
    let sigma_v = 400.0 * 0.028;
    let gsi: f64 = 80.0 - 15.0;
    let s = ((gsi - 100.0) / 9.0).exp();
    let a = 0.5 + ((-gsi / 15.0).exp() - (-20.0_f64 / 3.0).exp()) / 6.0;
    let strength = (20.0 + 0.8 * 80.0) * s.powf(a) * (1.0 + 0.015 * 3.0_f64.ln());
    assert_eq!(r.stability.safety_factor, round2(strength / sigma_v));
    assert_eq!(r.stability.safety_factor, 1.08);
    assert!(!r.stability.dgms_compliant);
}

#[test]
fn room_and_pillar_scenario() {
    let r = StopeDesigner::default().design(&DesignInputs::new(20.0, 3.0, 55.0, 200.0));
    assert_eq!(r.stope_type, StopeType::RoomAndPillar);
}
