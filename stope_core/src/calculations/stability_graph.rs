//! # Stability Graph Engine
//!
//! Evaluates the Mathews-Potvin stability graph for one stope: the three
//! adjustment factors, the modified stability number N' and the design
//! hydraulic radius used to size the stope width.
//!
//! ## Example
//!
//! ```rust
//! use stope_core::calculations::stability_graph::StabilityGraph;
//!
//! let point = StabilityGraph.evaluate(64.0 / 9.0, 55.0, 400.0);
//! assert_eq!(point.stress_factor_a, 0.85);
//! assert_eq!(point.orientation_factor_b, 0.7);
//! assert!(point.stability_number < 3.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{
    design_hydraulic_radius, gravity_factor_c, modified_stability_number, orientation_factor_b, stress_factor_a,
};
use crate::units::Degrees;

/// One point on the stability graph, full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityGraphPoint {
    /// Rock stress factor A
    pub stress_factor_a: f64,
    /// Joint orientation factor B
    pub orientation_factor_b: f64,
    /// Gravity adjustment factor C
    pub gravity_factor_c: f64,
    /// Modified stability number N'
    pub stability_number: f64,
    /// Hydraulic radius read off the design curve (m)
    pub design_hydraulic_radius: f64,
}

/// Mathews-Potvin stability graph. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct StabilityGraph;

impl StabilityGraph {
    /// Evaluate the graph for Q, dip (degrees) and depth (m).
    pub fn evaluate(&self, q_value: f64, dip: f64, depth: f64) -> StabilityGraphPoint {
        let dip = Degrees(dip);
        let a = stress_factor_a(depth);
        let b = orientation_factor_b(dip);
        let c = gravity_factor_c(dip);
        let n_prime = modified_stability_number(q_value, a, b, c);

        StabilityGraphPoint {
            stress_factor_a: a,
            orientation_factor_b: b,
            gravity_factor_c: c,
            stability_number: n_prime,
            design_hydraulic_radius: design_hydraulic_radius(n_prime),
        }
    }
}
