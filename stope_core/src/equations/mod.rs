//! # Geomechanical Equations
//!
//! Closed-form empirical correlations used by the design components. Keeping
//! them in one place makes each formula easy to check against its source and
//! keeps the component structs free of arithmetic noise.
//!
//! ## Modules
//!
//! - [`rock_mass`] - RMR and Barton Q from RQD
//! - [`stability_graph`] - Mathews-Potvin factors, N' and design hydraulic radius
//! - [`stress`] - In-situ vertical/horizontal stress
//! - [`hoek_brown`] - Hoek-Brown rock mass strength
//! - [`geometry`] - Stope shape factors (volume, geometric hydraulic radius)
//!
//! ## Conventions
//!
//! - Lengths in metres, stresses in MPa, angles in degrees unless noted
//! - All functions are pure; none of them round (rounding happens once, at
//!   result assembly)
//!
//! ## References
//!
//! - Bieniawski, Engineering Rock Mass Classifications (1989)
//! - Barton, Lien & Lunde, Q-system (1974)
//! - Potvin, Empirical open stope design in Canada (1988)
//! - Hoek, Carranza-Torres & Corkum, Hoek-Brown failure criterion (2002)

pub mod geometry;
pub mod hoek_brown;
pub mod rock_mass;
pub mod stability_graph;
pub mod stress;

pub use geometry::{geometric_hydraulic_radius, prism_volume};
pub use hoek_brown::{
    gsi_from_rqd, hoek_brown_a, hoek_brown_mb, hoek_brown_s, rock_mass_strength, thickness_adjustment,
    ucs_from_rqd,
};
pub use rock_mass::{q_value, rmr_from_rqd};
pub use stability_graph::{
    design_hydraulic_radius, gravity_factor_c, modified_stability_number, orientation_factor_b,
    stress_factor_a,
};
pub use stress::{horizontal_stress, k_ratio, vertical_stress};
