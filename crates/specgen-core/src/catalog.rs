use crate::error::{Result, SpecgenError};
use crate::naming;
use crate::record::SpecRecord;
use crate::types::{RowScope, TemplateKind, WriteMode};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

pub const CURRENT_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// CatalogWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

impl CatalogWarning {
    fn warning(message: String) -> Self {
        Self {
            level: WarnLevel::Warning,
            message,
        }
    }

    fn error(message: String) -> Self {
        Self {
            level: WarnLevel::Error,
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// PhaseInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhaseInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default)]
    pub name: String,
}

impl PhaseInfo {
    /// `Phase 6 - Academic Staff Portals`, or just the name when unnumbered.
    pub fn label(&self) -> String {
        match self.number {
            Some(n) if self.name.is_empty() => format!("Phase {n}"),
            Some(n) => format!("Phase {n} - {}", self.name),
            None => self.name.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// IndexConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default)]
    pub group_readmes: bool,
    #[serde(default)]
    pub completion_summary: bool,
    /// Heading of the completion summary; derived from the phase when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_title: Option<String>,
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// A portal or category. The key is also the output subdirectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub specs: Vec<SpecRecord>,
}

impl Group {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            specs: Vec::new(),
        }
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => naming::group_display_name(&self.key),
        }
    }

    pub fn total_hours(&self) -> u32 {
        self.specs.iter().filter_map(SpecRecord::hours).sum()
    }

    /// First dashboard record in the group, used as the dependency anchor
    /// for the group's other specs.
    pub fn dashboard(&self) -> Option<&SpecRecord> {
        self.specs.iter().find(|r| r.is_dashboard())
    }
}

// ---------------------------------------------------------------------------
// Catalog (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub phase: PhaseInfo,
    #[serde(default)]
    pub template: TemplateKind,
    #[serde(default)]
    pub write_mode: WriteMode,
    #[serde(default)]
    pub row_scope: RowScope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    /// Category label for records that do not set their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub link_group_dashboard: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub groups: Vec<Group>,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

impl Catalog {
    pub fn new(phase_name: impl Into<String>) -> Self {
        Self {
            version: CURRENT_VERSION,
            phase: PhaseInfo {
                number: None,
                name: phase_name.into(),
            },
            template: TemplateKind::default(),
            write_mode: WriteMode::default(),
            row_scope: RowScope::default(),
            base_dir: None,
            category: None,
            dependencies: Vec::new(),
            link_group_dashboard: false,
            last_updated: None,
            index: IndexConfig::default(),
            groups: Vec::new(),
        }
    }

    /// Load a catalog. `.json` files go through serde_json, everything else
    /// is read as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SpecgenError::CatalogNotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let catalog: Catalog = if is_json(path) {
            serde_json::from_str(&data)?
        } else {
            serde_yaml::from_str(&data)?
        };
        Ok(catalog)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        crate::io::atomic_write(path, data.as_bytes())
    }

    /// Every record with its group, in file order.
    pub fn records(&self) -> impl Iterator<Item = (&Group, &SpecRecord)> {
        self.groups
            .iter()
            .flat_map(|g| g.specs.iter().map(move |r| (g, r)))
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.specs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: &str) -> Option<(&Group, &SpecRecord)> {
        self.records().find(|(_, r)| r.id == id)
    }

    pub fn get(&self, id: &str) -> Result<(&Group, &SpecRecord)> {
        self.find(id)
            .ok_or_else(|| SpecgenError::RecordNotFound(id.to_string()))
    }

    pub fn total_hours(&self) -> u32 {
        self.groups.iter().map(Group::total_hours).sum()
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Advisory checks. Generation never refuses to run on these; `check`
    /// surfaces them and fails on errors.
    pub fn validate(&self) -> Vec<CatalogWarning> {
        let mut warnings = Vec::new();

        if self.version != CURRENT_VERSION {
            warnings.push(CatalogWarning::warning(format!(
                "unknown catalog version {} (expected {CURRENT_VERSION})",
                self.version
            )));
        }

        let mut seen_ids: HashMap<&str, &str> = HashMap::new();
        let mut seen_paths: HashSet<(String, String)> = HashSet::new();

        for group in &self.groups {
            if group.key.trim().is_empty() {
                warnings.push(CatalogWarning::error(
                    "group with an empty key has no output directory".to_string(),
                ));
            }
            if group.specs.is_empty() {
                warnings.push(CatalogWarning::warning(format!(
                    "group '{}' has no specs",
                    group.key
                )));
            }

            for record in &group.specs {
                if record.id.trim().is_empty() {
                    warnings.push(CatalogWarning::error(format!(
                        "record '{}' in group '{}' has an empty id",
                        record.title, group.key
                    )));
                }
                if record.title.trim().is_empty() {
                    warnings.push(CatalogWarning::error(format!(
                        "SPEC-{} in group '{}' has an empty title",
                        record.id, group.key
                    )));
                }

                if let Some(first_group) = seen_ids.insert(&record.id, &group.key) {
                    warnings.push(CatalogWarning::warning(format!(
                        "SPEC-{} appears more than once (groups '{}' and '{}')",
                        record.id, first_group, group.key
                    )));
                }

                let target = (group.key.clone(), record.file_name());
                if !seen_paths.insert(target) {
                    warnings.push(CatalogWarning::error(format!(
                        "SPEC-{} '{}' maps to {}/{} which another record already writes",
                        record.id,
                        record.title,
                        group.key,
                        record.file_name()
                    )));
                }

                if record.next_id().is_none() && !record.id.trim().is_empty() {
                    warnings.push(CatalogWarning::warning(format!(
                        "SPEC-{} has a non-numeric id; no next-spec hint will be rendered",
                        record.id
                    )));
                }

                if record.hours().is_none() {
                    warnings.push(CatalogWarning::warning(format!(
                        "SPEC-{} time '{}' has no leading hour count; excluded from totals",
                        record.id, record.time
                    )));
                }

                if !record.title.trim().is_empty() && record.slug().is_empty() {
                    warnings.push(CatalogWarning::warning(format!(
                        "SPEC-{} title '{}' has no ASCII letters or digits; file name has an empty slug",
                        record.id, record.title
                    )));
                }
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
phase:
  number: 9
  name: End User Portals
template: portal
write_mode: skip_existing
dependencies: [SPEC-011 (Multi-tenant), SPEC-013 (Auth)]
link_group_dashboard: true
groups:
  - key: 01-STUDENT-PORTAL
    specs:
      - id: "401"
        title: Student Dashboard & Overview
        priority: CRITICAL
        time: 6 hours
        description: Student landing page.
        features: [Today's schedule, Pending assignments]
        tables: [student_dashboard_preferences]
      - id: "402"
        title: Assignment Submission
        priority: HIGH
        time: 5 hours
        description: Submit work.
  - key: 02-PARENT-PORTAL
    name: Parent Portal
    specs:
      - id: "413"
        title: Parent Dashboard
        time: 4 hours
"#;

    fn sample() -> Catalog {
        serde_yaml::from_str(SAMPLE).unwrap()
    }

    fn record(id: &str, title: &str) -> SpecRecord {
        let mut r = SpecRecord::new(id, title);
        r.time = "4 hours".into();
        r
    }

    #[test]
    fn sample_parses_with_defaults() {
        let cat = sample();
        assert_eq!(cat.version, 1);
        assert_eq!(cat.template, TemplateKind::Portal);
        assert_eq!(cat.write_mode, WriteMode::SkipExisting);
        assert_eq!(cat.row_scope, RowScope::TenantBranch);
        assert_eq!(cat.index, IndexConfig::default());
        assert_eq!(cat.len(), 3);
        assert_eq!(cat.phase.label(), "Phase 9 - End User Portals");
    }

    #[test]
    fn records_preserve_file_order() {
        let cat = sample();
        let ids: Vec<&str> = cat.records().map(|(_, r)| r.id.as_str()).collect();
        assert_eq!(ids, ["401", "402", "413"]);
    }

    #[test]
    fn group_display_names() {
        let cat = sample();
        assert_eq!(cat.groups[0].display_name(), "Student Portal");
        assert_eq!(cat.groups[1].display_name(), "Parent Portal");
    }

    #[test]
    fn totals_and_lookup() {
        let cat = sample();
        assert_eq!(cat.total_hours(), 15);
        assert_eq!(cat.groups[0].dashboard().unwrap().id, "401");
        assert!(cat.find("402").is_some());
        assert!(matches!(
            cat.get("999"),
            Err(SpecgenError::RecordNotFound(id)) if id == "999"
        ));
    }

    #[test]
    fn load_missing_catalog() {
        let dir = TempDir::new().unwrap();
        let err = Catalog::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, SpecgenError::CatalogNotFound(_)));
    }

    #[test]
    fn save_and_load_yaml_and_json() {
        let dir = TempDir::new().unwrap();
        let cat = sample();
        for name in ["catalog.yaml", "catalog.json"] {
            let path = dir.path().join(name);
            cat.save(&path).unwrap();
            let loaded = Catalog::load(&path).unwrap();
            assert_eq!(loaded.len(), 3);
            assert_eq!(loaded.groups[1].name.as_deref(), Some("Parent Portal"));
        }
        let json = std::fs::read_to_string(dir.path().join("catalog.json")).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "groups: [unterminated").unwrap();
        assert!(matches!(Catalog::load(&path), Err(SpecgenError::Yaml(_))));
    }

    #[test]
    fn validate_sample_has_no_errors() {
        let warnings = sample().validate();
        assert!(warnings.iter().all(|w| w.level != WarnLevel::Error), "{warnings:?}");
    }

    #[test]
    fn validate_duplicate_output_path_is_error() {
        let mut cat = Catalog::new("Test");
        let mut g = Group::new("01-A");
        g.specs.push(record("1", "Same Title"));
        g.specs.push(record("1", "Same Title"));
        cat.groups.push(g);

        let warnings = cat.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Error && w.message.contains("another record")));
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Warning && w.message.contains("more than once")));
    }

    #[test]
    fn validate_same_id_in_different_groups_is_only_a_warning() {
        let mut cat = Catalog::new("Test");
        for key in ["01-A", "02-B"] {
            let mut g = Group::new(key);
            g.specs.push(record("7", "Overview"));
            cat.groups.push(g);
        }
        let warnings = cat.validate();
        assert!(warnings.iter().all(|w| w.level == WarnLevel::Warning));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn validate_flags_empty_fields_and_groups() {
        let mut cat = Catalog::new("Test");
        let mut g = Group::new("01-A");
        let mut r = record("", "");
        r.time = "soon".into();
        g.specs.push(r);
        cat.groups.push(g);
        cat.groups.push(Group::new("02-EMPTY"));

        let warnings = cat.validate();
        let errors = warnings.iter().filter(|w| w.level == WarnLevel::Error).count();
        assert_eq!(errors, 2);
        assert!(warnings.iter().any(|w| w.message.contains("has no specs")));
        assert!(warnings.iter().any(|w| w.message.contains("no leading hour count")));
    }

    #[test]
    fn validate_flags_empty_slug() {
        let mut cat = Catalog::new("Test");
        let mut g = Group::new("01-A");
        g.specs.push(record("5", "Q&A: FAQ"));
        g.specs.push(record("6", "???"));
        cat.groups.push(g);
        let warnings = cat.validate();
        let slug_warnings: Vec<_> = warnings
            .iter()
            .filter(|w| w.message.contains("empty slug"))
            .collect();
        assert_eq!(slug_warnings.len(), 1);
        assert!(slug_warnings[0].message.starts_with("SPEC-6 "));
    }
}
