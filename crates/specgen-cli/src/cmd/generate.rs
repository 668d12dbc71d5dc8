use crate::output::print_json;
use crate::root;
use anyhow::Context;
use specgen_core::generate::{generate, GenerateOptions, GenerationReport, Progress};
use specgen_core::paths;
use specgen_core::types::{WriteAction, WriteMode};
use std::path::{Path, PathBuf};

pub struct Flags {
    pub out: Option<PathBuf>,
    pub mode: Option<WriteMode>,
    pub dry_run: bool,
    pub no_index: bool,
}

pub fn run(catalogs: &[PathBuf], flags: Flags, json: bool) -> anyhow::Result<()> {
    let mut reports = Vec::with_capacity(catalogs.len());
    for catalog_path in catalogs {
        let report = run_one(catalog_path, &flags, json)?;
        reports.push(report);
    }

    if json {
        print_json(&reports)?;
    }
    Ok(())
}

fn progress_line(p: &Progress<'_>) -> String {
    let o = p.outcome;
    let action = match o.action {
        WriteAction::Skipped => "skipped (already exists)".to_string(),
        other => other.to_string(),
    };
    format!("[{}/{}] SPEC-{}: {} ... {action}", p.position, p.total, o.id, o.title)
}

fn run_one(catalog_path: &Path, flags: &Flags, json: bool) -> anyhow::Result<GenerationReport> {
    let catalog = super::load_catalog(catalog_path)?;
    let base_dir = root::resolve_base_dir(flags.out.as_deref(), catalog_path, &catalog);

    let mut opts = GenerateOptions::new(&base_dir);
    opts.mode = flags.mode;
    opts.dry_run = flags.dry_run;
    opts.include_index = !flags.no_index;

    if !json {
        println!("{}", catalog.phase.label());
        println!("Output: {}", base_dir.display());
        if flags.dry_run {
            println!("(dry run: nothing will be written)");
        }
        println!();
    }

    let report = generate(&catalog, &opts, |p| {
        if !json {
            println!("{}", progress_line(p));
        }
    })
    .with_context(|| format!("failed to generate {}", catalog_path.display()))?;

    if !json {
        print_summary(&report);
    }
    Ok(report)
}

fn print_summary(report: &GenerationReport) {
    let base = report.base_dir.as_path();
    for f in &report.index_files {
        println!("  {} {}", f.action, paths::display_relative(&f.path, base));
    }

    println!();
    println!(
        "{} specifications: {} created, {} updated, {} skipped",
        report.total(),
        report.count(WriteAction::Created),
        report.count(WriteAction::Overwritten),
        report.count(WriteAction::Skipped),
    );
    for g in &report.groups {
        println!("  {}: {} specs, {} hours", g.name, g.specs, g.hours);
    }
    println!("Total estimated time: {} hours", report.total_hours);
    println!("Location: {}", base.display());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use specgen_core::generate::DocumentOutcome;

    fn outcome(action: WriteAction) -> DocumentOutcome {
        DocumentOutcome {
            id: "401".into(),
            title: "Student Dashboard & Overview".into(),
            group: "01-STUDENT-PORTAL".into(),
            path: PathBuf::from("out/01-STUDENT-PORTAL/SPEC-401-student-dashboard-and-overview.md"),
            action,
        }
    }

    #[test]
    fn progress_line_format() {
        let o = outcome(WriteAction::Created);
        let line = progress_line(&Progress {
            position: 1,
            total: 30,
            outcome: &o,
        });
        assert_eq!(line, "[1/30] SPEC-401: Student Dashboard & Overview ... created");
    }

    #[test]
    fn skipped_line_explains_why() {
        let o = outcome(WriteAction::Skipped);
        let line = progress_line(&Progress {
            position: 2,
            total: 2,
            outcome: &o,
        });
        assert!(line.ends_with("... skipped (already exists)"));
    }
}
