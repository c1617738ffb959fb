//! # File I/O
//!
//! Project and configuration files on disk:
//! - **Atomic saves**: write to `.tmp`, sync, rename over the target
//! - **Version validation**: reject project files from an incompatible schema
//! - **Config loading**: TOML files with defaults for every missing key
//!
//! Projects are saved as `.stope` files containing JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use stope_core::file_io::{load_project, save_project};
//! use stope_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "Mine");
//! let path = Path::new("level3.stope");
//!
//! save_project(&project, path).unwrap();
//! let loaded = load_project(path).unwrap();
//! assert_eq!(loaded.meta.mine, "Mine");
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::DesignConfig;
use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Project file extension
pub const PROJECT_EXTENSION: &str = "stope";

/// `path` with the `.stope` extension appended when it has none.
pub fn project_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(PROJECT_EXTENSION)
    }
}

/// Write `contents` to `path` atomically.
///
/// Data goes to a sibling `.tmp` file that is synced and then renamed over
/// `path`, so readers see either the old file or the complete new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .write_all(contents)
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Save a project with an atomic write.
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| CalcError::serialization(e.to_string()))?;
    write_atomic(path, json.as_bytes())?;
    info!(path = %path.display(), designs = project.design_count(), "project saved");
    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::InvalidConfig)` - Stored configuration is degenerate
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&project.meta.version)?;
    project.config.validate()?;

    debug!(path = %path.display(), designs = project.design_count(), "project loaded");
    Ok(project)
}

/// Load a design configuration from a TOML file.
pub fn load_config(path: &Path) -> CalcResult<DesignConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    DesignConfig::from_toml_str(&text)
}

/// Write a plain-text report.
pub fn save_report(text: &str, path: &Path) -> CalcResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CalcError::file_error("create directory", parent.display().to_string(), e.to_string()))?;
    }
    write_atomic(path, text.as_bytes())
}

/// Check that a file's schema version can be read by this build.
///
/// Major versions must match. While the schema is 0.x, a file with a newer
/// minor version is rejected.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<Vec<u32>> { v.split('.').map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version).filter(|p| !p.is_empty()).ok_or_else(mismatch)?;
    let current_parts = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0 {
        let file_minor = file_parts.get(1).copied().unwrap_or(0);
        let current_minor = current_parts.get(1).copied().unwrap_or(0);
        if file_minor > current_minor {
            return Err(mismatch());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::DesignInputs;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.stope");

        let mut project = Project::new("Test Engineer", "Test Mine");
        project.add_design("S1", DesignInputs::new(55.0, 2.0, 80.0, 400.0));
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.meta.mine, "Test Mine");
        assert_eq!(loaded.design_count(), 1);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atomic.stope");

        save_project(&Project::new("T", "M"), &path).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("atomic.stope.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overwrite.stope");

        save_project(&Project::new("First", "M"), &path).unwrap();
        save_project(&Project::new("Second", "M"), &path).unwrap();
        assert_eq!(load_project(&path).unwrap().meta.engineer, "Second");
    }

    #[test]
    fn test_project_path_extension() {
        assert_eq!(project_path(Path::new("mines/level3")), PathBuf::from("mines/level3.stope"));
        assert_eq!(project_path(Path::new("level3.stope")), PathBuf::from("level3.stope"));
        assert_eq!(project_path(Path::new("level3.json")), PathBuf::from("level3.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_project(&dir.path().join("nope.stope")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.stope");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_project(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_rejects_future_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.stope");

        let mut project = Project::new("T", "M");
        project.meta.version = "0.9.0".to_string();
        save_project(&project, &path).unwrap();

        assert_eq!(load_project(&path).unwrap_err().error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("").is_err());
        assert!(validate_version("zero.one").is_err());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[regulatory]\nsafety_factor_min = 2.0\n").unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.regulatory.safety_factor_min, 2.0);
        assert_eq!(cfg.regulatory.min_pillar_width_m, 3.0);
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("stope_summary.txt");
        save_report("hello", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }
}
