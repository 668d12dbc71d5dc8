use crate::catalog::Group;
use crate::record::SpecRecord;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File name constants
// ---------------------------------------------------------------------------

pub const GROUP_README: &str = "README.md";
pub const COMPLETION_SUMMARY: &str = "COMPLETION-SUMMARY.md";
pub const DEFAULT_CATALOG: &str = "specs.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn group_dir(base: &Path, group: &Group) -> PathBuf {
    base.join(&group.key)
}

/// `<base>/<group>/SPEC-<id>-<slug>.md`
pub fn spec_path(base: &Path, group: &Group, record: &SpecRecord) -> PathBuf {
    group_dir(base, group).join(record.file_name())
}

pub fn group_readme_path(base: &Path, group: &Group) -> PathBuf {
    group_dir(base, group).join(GROUP_README)
}

pub fn completion_summary_path(base: &Path) -> PathBuf {
    base.join(COMPLETION_SUMMARY)
}

/// Resolve the catalog's `base_dir` against the directory holding the
/// catalog file. Absent `base_dir` means "next to the catalog".
pub fn resolve_base_dir(catalog_path: &Path, base_dir: Option<&Path>) -> PathBuf {
    let catalog_dir = catalog_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    match base_dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => catalog_dir.join(dir),
        None => catalog_dir.to_path_buf(),
    }
}

/// Path shown in console output: relative to `base` when possible.
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
