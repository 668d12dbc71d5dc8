use crate::output::print_json;
use anyhow::Context;
use specgen_core::catalog::Catalog;
use specgen_core::io;
use std::path::Path;

/// Starter catalog: one group, one fully populated record, one minimal one.
const STARTER_CATALOG: &str = r#"version: 1
phase:
  number: 1
  name: My Phase
# classic | portal | stakeholder | deployment
template: portal
# overwrite | skip_existing
write_mode: overwrite
# Relative to this file. Omit to write next to it.
base_dir: specs
category: User Experience & Engagement
dependencies:
  - SPEC-011 (Multi-tenant)
  - SPEC-013 (Auth)
link_group_dashboard: true
last_updated: "2025-10-05"
index:
  group_readmes: true
  completion_summary: false
groups:
  - key: 01-STUDENT-PORTAL
    name: Student Portal
    specs:
      - id: "401"
        title: Student Dashboard & Overview
        priority: CRITICAL
        time: 6 hours
        description: >-
          Comprehensive student dashboard showing schedule, assignments,
          grades and announcements.
        features:
          - Today's schedule
          - Pending assignments
          - Recent grades
        tables:
          - student_dashboard_preferences
      - id: "402"
        title: Assignment Submission
        priority: HIGH
        time: 5 hours
        description: Submit assignments and track their review status.
"#;

pub fn run(path: &Path, json: bool) -> anyhow::Result<()> {
    // The starter must stay loadable by the current schema
    debug_assert!(serde_yaml::from_str::<Catalog>(STARTER_CATALOG).is_ok());

    let created = io::write_if_missing(path, STARTER_CATALOG.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;

    if json {
        print_json(&serde_json::json!({
            "path": path,
            "created": created,
        }))?;
    } else if created {
        println!("  created: {}", path.display());
        println!("\nNext: edit the catalog, then run `specgen generate {}`", path.display());
    } else {
        println!("  exists:  {}", path.display());
    }
    Ok(())
}
