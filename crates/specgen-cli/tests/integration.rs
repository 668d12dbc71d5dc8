#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn specgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("specgen").unwrap();
    cmd.current_dir(dir.path()).env_remove("SPECGEN_OUT");
    cmd
}

const DASHBOARD: &str = "specs/01-STUDENT-PORTAL/SPEC-401-student-dashboard-and-overview.md";
const SUBMISSION: &str = "specs/01-STUDENT-PORTAL/SPEC-402-assignment-submission.md";

fn init_catalog(dir: &TempDir) {
    specgen(dir).arg("init").assert().success();
}

fn write(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

const DEPLOYMENT_CATALOG: &str = r#"
phase:
  number: 11
  name: Deployment & DevOps
template: deployment
dependencies:
  - All Previous Phases (1-10)
index:
  group_readmes: true
  completion_summary: true
groups:
  - key: 01-CICD-PIPELINE
    specs:
      - id: 501
        title: GitHub Actions Pipeline
        priority: CRITICAL
        time: 8 hours
        description: Automated build and test pipeline.
        components: [workflow_config, test_runner]
        features: [Lint on push, Test on PR, Deploy on merge]
"#;

// ---------------------------------------------------------------------------
// specgen init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_starter_catalog() {
    let dir = TempDir::new().unwrap();
    specgen(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));
    assert!(dir.path().join("specs.yaml").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    write(&dir, "specs.yaml", "phase:\n  name: Edited\ngroups: []\n");

    specgen(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));
    assert!(read(&dir.path().join("specs.yaml")).contains("Edited"));
}

// ---------------------------------------------------------------------------
// specgen generate
// ---------------------------------------------------------------------------

#[test]
fn generate_writes_documents_and_readme() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    specgen(&dir)
        .args(["generate", "specs.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[1/2] SPEC-401: Student Dashboard & Overview ... created",
        ))
        .stdout(predicate::str::contains("Total estimated time: 11 hours"));

    let doc = read(&dir.path().join(DASHBOARD));
    assert!(doc.starts_with("# SPEC-401: Student Dashboard & Overview\n"));
    assert!(dir.path().join(SUBMISSION).exists());
    assert!(dir.path().join("specs/01-STUDENT-PORTAL/README.md").exists());
    assert!(!dir.path().join("specs/COMPLETION-SUMMARY.md").exists());
}

#[test]
fn generate_twice_overwrites_with_identical_content() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    specgen(&dir).args(["generate", "specs.yaml"]).assert().success();
    let first = read(&dir.path().join(DASHBOARD));

    specgen(&dir)
        .args(["generate", "specs.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("... updated"));
    assert_eq!(read(&dir.path().join(DASHBOARD)), first);
}

#[test]
fn generate_out_flag_overrides_base_dir() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    specgen(&dir)
        .args(["generate", "specs.yaml", "--out", "elsewhere"])
        .assert()
        .success();

    assert!(dir
        .path()
        .join("elsewhere/01-STUDENT-PORTAL/SPEC-402-assignment-submission.md")
        .exists());
    assert!(!dir.path().join("specs").exists());
}

#[test]
fn generate_out_from_env() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    specgen(&dir)
        .env("SPECGEN_OUT", dir.path().join("from-env"))
        .args(["generate", "specs.yaml"])
        .assert()
        .success();

    assert!(dir.path().join("from-env/01-STUDENT-PORTAL/README.md").exists());
}

#[test]
fn skip_existing_preserves_edited_files() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    specgen(&dir).args(["generate", "specs.yaml"]).assert().success();

    let path = dir.path().join(DASHBOARD);
    std::fs::write(&path, "hand edited\n").unwrap();

    specgen(&dir)
        .args(["generate", "specs.yaml", "--mode", "skip-existing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped (already exists)"));

    assert_eq!(read(&path), "hand edited\n");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    specgen(&dir)
        .args(["generate", "specs.yaml", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert!(!dir.path().join("specs").exists());
}

#[test]
fn no_index_skips_readmes() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    specgen(&dir)
        .args(["generate", "specs.yaml", "--no-index"])
        .assert()
        .success();

    assert!(dir.path().join(DASHBOARD).exists());
    assert!(!dir.path().join("specs/01-STUDENT-PORTAL/README.md").exists());
}

#[test]
fn generate_several_catalogs_in_one_run() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    write(&dir, "deploy.yaml", DEPLOYMENT_CATALOG);

    specgen(&dir)
        .args(["generate", "specs.yaml", "deploy.yaml"])
        .assert()
        .success();

    assert!(dir.path().join(DASHBOARD).exists());
    let summary = read(&dir.path().join("COMPLETION-SUMMARY.md"));
    assert!(summary.contains("PHASE 11 DEPLOYMENT & DEVOPS - COMPLETION SUMMARY"));
    let doc = read(
        &dir.path()
            .join("01-CICD-PIPELINE/SPEC-501-github-actions-pipeline.md"),
    );
    assert!(doc.contains("${{ secrets.VERCEL_TOKEN }}"));
}

#[test]
fn generate_json_report() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    let output = specgen(&dir)
        .args(["--json", "generate", "specs.yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &reports[0];
    assert_eq!(report["documents"].as_array().unwrap().len(), 2);
    assert_eq!(report["documents"][0]["action"], "created");
    assert_eq!(report["total_hours"], 11);
}

#[test]
fn generate_missing_catalog_fails() {
    let dir = TempDir::new().unwrap();
    specgen(&dir)
        .args(["generate", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.yaml"));
}

#[test]
fn generate_accepts_json_catalog() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "phase.json",
        r#"{"template": "classic", "groups": [{"key": "01-CORE", "specs": [{"id": "7", "title": "Core Thing", "time": "2 hours"}]}]}"#,
    );

    specgen(&dir).args(["generate", "phase.json"]).assert().success();
    let doc = read(&dir.path().join("01-CORE/SPEC-7-core-thing.md"));
    assert!(doc.contains("**Next Spec**: SPEC-8"));
}

// ---------------------------------------------------------------------------
// specgen list / check / render
// ---------------------------------------------------------------------------

#[test]
fn list_shows_every_record() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    specgen(&dir)
        .args(["list", "specs.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SPEC-401"))
        .stdout(predicate::str::contains("SPEC-402"))
        .stdout(predicate::str::contains("2 specs, 11 hours"));
}

#[test]
fn list_json_parses() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    let output = specgen(&dir)
        .args(["--json", "list", "specs.yaml"])
        .output()
        .unwrap();
    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items.as_array().unwrap().len(), 2);
    assert_eq!(items[1]["id"], "402");
}

#[test]
fn check_passes_on_starter() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    specgen(&dir)
        .args(["check", "specs.yaml"])
        .assert()
        .success();
}

#[test]
fn check_fails_on_colliding_output_paths() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "dup.yaml",
        r#"
groups:
  - key: 01-A
    specs:
      - { id: "1", title: Same, time: 1 hour }
      - { id: "1", title: Same, time: 1 hour }
"#,
    );

    specgen(&dir)
        .args(["check", "dup.yaml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error]"))
        .stderr(predicate::str::contains("validation found errors"));
}

#[test]
fn render_prints_one_document() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    specgen(&dir)
        .args(["render", "specs.yaml", "SPEC-402"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# SPEC-402: Assignment Submission"));

    assert!(!dir.path().join("specs").exists());
}

#[test]
fn render_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    specgen(&dir)
        .args(["render", "specs.yaml", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("999"));
}
