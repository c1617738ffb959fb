//! # Stope Design Calculations
//!
//! The design pipeline components. Each component is built once from a
//! [`DesignConfig`](crate::config::DesignConfig) and then used through
//! `&self` methods that never mutate:
//!
//! - [`stability_graph`] - Mathews-Potvin N' and design hydraulic radius
//! - [`geometry`] - Stope width, length, height and volume
//! - [`stability`] - In-situ stress, Hoek-Brown strength and safety factor
//! - [`cost`] - Labour, equipment, support and ventilation cost
//! - [`design`] - The orchestrator that chains the above
//!
//! All result types serialize to JSON with every numeric leaf rounded to
//! 2 decimal places.

pub mod cost;
pub mod design;
pub mod geometry;
pub mod stability;
pub mod stability_graph;

pub use cost::{CostBreakdown, CostEstimator};
pub use design::{DesignStage, StopeDesignResult, StopeDesigner};
pub use geometry::{GeometryDeriver, StopeDimensions};
pub use stability::{HoekBrownParameters, RockStrength, StabilityAssessment, StabilityClass, StressStrengthAnalyzer};
pub use stability_graph::{StabilityGraph, StabilityGraphPoint};
