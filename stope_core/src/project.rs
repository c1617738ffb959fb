//! # Design Projects
//!
//! A `Project` groups the stope designs for one mine together with the
//! configuration they are evaluated under. Projects serialize to `.stope`
//! files as human-readable JSON. Only inputs are stored; results are
//! recomputed on demand so a project never holds stale numbers.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, mine, timestamps)
//! ├── config: DesignConfig (joint parameters, DGMS limits, cost rates)
//! └── designs: HashMap<Uuid, DesignItem> (labelled design inputs)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stope_core::inputs::DesignInputs;
//! use stope_core::project::Project;
//!
//! let mut project = Project::new("A. Sharma", "Rampura Agucha");
//! let id = project.add_design("Stope 12N", DesignInputs::new(55.0, 2.0, 80.0, 400.0));
//!
//! let runs = project.run_all();
//! assert_eq!(runs[0].id, id);
//! assert!(runs[0].result.is_ok());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{StopeDesignResult, StopeDesigner};
use crate::config::DesignConfig;
use crate::errors::CalcResult;
use crate::inputs::DesignInputs;

/// Current schema version for .stope files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    /// Constants every design in this project is evaluated with
    #[serde(default)]
    pub config: DesignConfig,

    /// Design inputs keyed by UUID
    pub designs: HashMap<Uuid, DesignItem>,
}

/// One labelled set of design inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignItem {
    /// User label, e.g. "Stope 12N"
    pub label: String,
    pub inputs: DesignInputs,
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,
    /// Name of the responsible mining engineer
    pub engineer: String,
    /// Mine name
    pub mine: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Outcome of evaluating one design in a project.
#[derive(Debug, Clone)]
pub struct DesignRun {
    pub id: Uuid,
    pub label: String,
    pub result: CalcResult<StopeDesignResult>,
}

impl Project {
    pub fn new(engineer: impl Into<String>, mine: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                mine: mine.into(),
                created: now,
                modified: now,
            },
            config: DesignConfig::default(),
            designs: HashMap::new(),
        }
    }

    /// Add a design, returning the UUID assigned to it.
    pub fn add_design(&mut self, label: impl Into<String>, inputs: DesignInputs) -> Uuid {
        let id = Uuid::new_v4();
        self.designs.insert(
            id,
            DesignItem {
                label: label.into(),
                inputs,
            },
        );
        self.touch();
        id
    }

    pub fn remove_design(&mut self, id: &Uuid) -> Option<DesignItem> {
        let item = self.designs.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    pub fn get_design(&self, id: &Uuid) -> Option<&DesignItem> {
        self.designs.get(id)
    }

    /// Find a design by its label (first match in label order).
    pub fn find_by_label(&self, label: &str) -> Option<(Uuid, &DesignItem)> {
        self.sorted_designs().into_iter().find(|(_, item)| item.label == label)
    }

    /// Replace the project configuration.
    pub fn set_config(&mut self, config: DesignConfig) -> CalcResult<()> {
        config.validate()?;
        self.config = config;
        self.touch();
        Ok(())
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn design_count(&self) -> usize {
        self.designs.len()
    }

    /// Designs ordered by label, then id, for stable listings.
    pub fn sorted_designs(&self) -> Vec<(Uuid, &DesignItem)> {
        let mut items: Vec<(Uuid, &DesignItem)> = self.designs.iter().map(|(id, item)| (*id, item)).collect();
        items.sort_by(|a, b| a.1.label.cmp(&b.1.label).then(a.0.cmp(&b.0)));
        items
    }

    /// Validate and design every entry under the project configuration.
    pub fn run_all(&self) -> Vec<DesignRun> {
        let designer = StopeDesigner::new(self.config);
        self.sorted_designs()
            .into_iter()
            .map(|(id, item)| DesignRun {
                id,
                label: item.label.clone(),
                result: designer.design_checked(&item.inputs),
            })
            .collect()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "")
    }
}
