//! # stope_core - Underground Stope Design Engine
//!
//! `stope_core` sizes an underground stope from four orebody parameters
//! (dip, thickness, RQD and depth), checks its stability against Indian
//! DGMS limits and estimates its direct mining cost. All inputs and outputs
//! are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Pure**: Every design is a fresh computation; no caches, no globals
//! - **Configured once**: Constants live in [`config::DesignConfig`] and are
//!   injected into each component at construction
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types at the validation and file boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use stope_core::{DesignInputs, StopeDesigner, StopeType};
//!
//! let designer = StopeDesigner::default();
//! let result = designer.design_checked(&DesignInputs::new(55.0, 2.0, 80.0, 400.0)).unwrap();
//!
//! assert_eq!(result.stope_type, StopeType::SublevelStoping);
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Stability graph, geometry, stress/strength, cost and the orchestrator
//! - [`equations`] - Closed-form geomechanical correlations
//! - [`rock_mass`] - RMR and Q-index classification
//! - [`methods`] - Stope types and the method decision table
//! - [`inputs`] - Design inputs, range validation and DGMS advisories
//! - [`config`] - Geomechanical, regulatory and cost constants
//! - [`report`] - Plain-text summaries
//! - [`references`] - DGMS/MMR citations
//! - [`project`] - Project container for labelled designs
//! - [`file_io`] - Atomic saves and config loading
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod inputs;
pub mod methods;
pub mod project;
pub mod references;
pub mod report;
pub mod rock_mass;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{StabilityClass, StopeDesignResult, StopeDesigner};
pub use config::DesignConfig;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_config, load_project, save_project};
pub use inputs::{Advisory, DesignInputs, OreType};
pub use methods::StopeType;
pub use project::{DesignItem, Project, ProjectMetadata};
