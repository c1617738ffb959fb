//! # Stope Geometry
//!
//! Sizes the stope from the stability-graph design hydraulic radius.
//!
//! ```text
//! width_raw  = max(min_pillar_width, 2 × HR_design)
//! adjustment = clamp(SF_min / 1.5 × 0.9, 0.85, 1.0)
//! width      = width_raw × adjustment
//! length     = 10 × width
//! height     = 0.8 × width
//! ```
//!
//! The adjustment is applied to width only; length and height are derived
//! from the adjusted width. Dimensions are rounded to 2 dp and volume and
//! geometric hydraulic radius are computed from the rounded dimensions, so
//! `volume == round(width × length × height, 2)` holds for every result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::stability_graph::{StabilityGraph, StabilityGraphPoint};
use crate::config::{DesignConfig, RegulatoryLimits};
use crate::equations::{geometric_hydraulic_radius, prism_volume};
use crate::inputs::DesignInputs;
use crate::methods::StopeType;
use crate::rock_mass::{RockMassClassifier, RockMassIndices};
use crate::units::{clamp, round2};

/// Stope length as a multiple of width
pub const LENGTH_TO_WIDTH: f64 = 10.0;

/// Stope height as a multiple of width
pub const HEIGHT_TO_WIDTH: f64 = 0.8;

/// Derived stope dimensions and the indices that produced them.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 61.24,
///   "width": 6.12,
///   "height": 4.9,
///   "volume": 1836.47,
///   "hydraulic_radius": 1.36,
///   "design_hydraulic_radius": 3.4,
///   "stability_number": 1.8,
///   "rmr": 78.6,
///   "q_value": 7.11,
///   "stope_type": "SublevelStoping"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopeDimensions {
    /// Strike length (m)
    pub length: f64,
    /// Span across the orebody (m), never below the DGMS minimum
    pub width: f64,
    /// Stope height (m)
    pub height: f64,
    /// width × length × height (m³)
    pub volume: f64,
    /// Geometric hydraulic radius of the width × height section (m)
    pub hydraulic_radius: f64,
    /// Stability-graph hydraulic radius used to size the width (m)
    pub design_hydraulic_radius: f64,
    /// Modified stability number N'
    pub stability_number: f64,
    /// Rock Mass Rating
    pub rmr: f64,
    /// Barton Q-index
    pub q_value: f64,
    pub stope_type: StopeType,
}

impl StopeDimensions {
    /// Volume recomputed from the three reported dimensions.
    pub fn recomputed_volume(&self) -> f64 {
        round2(prism_volume(self.width, self.length, self.height))
    }
}

/// Geometry derivation component.
#[derive(Debug, Clone, Copy)]
pub struct GeometryDeriver {
    rock_mass: RockMassClassifier,
    graph: StabilityGraph,
    limits: RegulatoryLimits,
}

impl GeometryDeriver {
    pub fn new(config: &DesignConfig) -> Self {
        GeometryDeriver {
            rock_mass: RockMassClassifier::new(config),
            graph: StabilityGraph,
            limits: config.regulatory,
        }
    }

    /// Width multiplier applied after stability-graph sizing.
    pub fn safety_adjustment(&self) -> f64 {
        clamp(self.limits.safety_factor_min / 1.5 * 0.9, 0.85, 1.0)
    }

    /// Size a stope of the given type.
    ///
    /// The adjusted width is floored at the DGMS minimum a second time, which
    /// the published sizing formula does not do, so width never drops below it.
    pub fn derive(&self, inputs: &DesignInputs, stope_type: StopeType) -> StopeDimensions {
        let indices = self.rock_mass.classify(inputs.rqd);
        let point = self.graph.evaluate(indices.q_value, inputs.dip_angle, inputs.mining_depth);
        self.size(indices, point, stope_type)
    }

    fn size(&self, indices: RockMassIndices, point: StabilityGraphPoint, stope_type: StopeType) -> StopeDimensions {
        let min_width = self.limits.min_pillar_width_m;
        let width_raw = (2.0 * point.design_hydraulic_radius).max(min_width);

        // Adjusted width may not drop below the regulatory minimum either
        let width = (width_raw * self.safety_adjustment()).max(min_width);
        let length = LENGTH_TO_WIDTH * width;
        let height = HEIGHT_TO_WIDTH * width;

        debug!(
            n_prime = point.stability_number,
            design_hr = point.design_hydraulic_radius,
            width_raw,
            width,
            "stope sized"
        );

        let (width, length, height) = (round2(width), round2(length), round2(height));

        StopeDimensions {
            length,
            width,
            height,
            volume: round2(prism_volume(width, length, height)),
            hydraulic_radius: round2(geometric_hydraulic_radius(width, height)),
            design_hydraulic_radius: round2(point.design_hydraulic_radius),
            stability_number: round2(point.stability_number),
            rmr: round2(indices.rmr),
            q_value: round2(indices.q_value),
            stope_type,
        }
    }
}
