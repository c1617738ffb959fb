//! # Rock Mass Classifier
//!
//! Derives RMR and the Barton Q-index from RQD using the configured joint
//! parameters. Both indices are recomputed on every call.
//!
//! ## Example
//!
//! ```rust
//! use stope_core::config::DesignConfig;
//! use stope_core::rock_mass::RockMassClassifier;
//!
//! let classifier = RockMassClassifier::new(&DesignConfig::default());
//! let indices = classifier.classify(80.0);
//! assert!((indices.rmr - 78.6).abs() < 1e-9);
//! assert!((indices.q_value - 7.111).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{DesignConfig, JointParameters};
use crate::equations::{q_value, rmr_from_rqd};

/// RMR and Q for one RQD value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RockMassIndices {
    /// Rock Mass Rating (0-100)
    pub rmr: f64,
    /// Barton Q-index
    pub q_value: f64,
}

/// Rock mass rating component.
#[derive(Debug, Clone, Copy)]
pub struct RockMassClassifier {
    joints: JointParameters,
    rmr_adjustment: f64,
}

impl RockMassClassifier {
    pub fn new(config: &DesignConfig) -> Self {
        RockMassClassifier {
            joints: config.joints,
            rmr_adjustment: config.geomechanics.rmr_adjustment,
        }
    }

    /// Rock Mass Rating for `rqd` (%).
    pub fn rmr(&self, rqd: f64) -> f64 {
        rmr_from_rqd(rqd, self.rmr_adjustment)
    }

    /// Q-index for `rqd` (%).
    pub fn q_value(&self, rqd: f64) -> f64 {
        q_value(rqd, &self.joints)
    }

    /// Both indices at once.
    pub fn classify(&self, rqd: f64) -> RockMassIndices {
        if !(0.0..=100.0).contains(&rqd) {
            warn!(rqd, "RQD outside [0, 100], clamping");
        }
        RockMassIndices {
            rmr: self.rmr(rqd),
            q_value: self.q_value(rqd),
        }
    }

    /// Descriptive Bieniawski class for an RMR value.
    pub fn rmr_class(rmr: f64) -> &'static str {
        if rmr > 80.0 {
            "I - Very good rock"
        } else if rmr > 60.0 {
            "II - Good rock"
        } else if rmr > 40.0 {
            "III - Fair rock"
        } else if rmr > 20.0 {
            "IV - Poor rock"
        } else {
            "V - Very poor rock"
        }
    }
}
