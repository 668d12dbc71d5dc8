//! Driver: render every record of a catalog and write it under the base
//! directory, then the optional index documents.

use crate::catalog::{Catalog, WarnLevel};
use crate::error::Result;
use crate::io;
use crate::paths;
use crate::render::{self, index};
use crate::types::{WriteAction, WriteMode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub base_dir: PathBuf,
    /// Overrides the catalog's `write_mode` when set.
    pub mode: Option<WriteMode>,
    pub dry_run: bool,
    /// Write group READMEs and the completion summary when the catalog
    /// enables them.
    pub include_index: bool,
    /// Stamped into the completion summary.
    pub generated_at: DateTime<Utc>,
}

impl GenerateOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            mode: None,
            dry_run: false,
            include_index: true,
            generated_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    pub id: String,
    pub title: String,
    pub group: String,
    pub path: PathBuf,
    pub action: WriteAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexOutcome {
    pub path: PathBuf,
    pub action: WriteAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupTotals {
    pub key: String,
    pub name: String,
    pub specs: usize,
    pub hours: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub base_dir: PathBuf,
    pub mode: WriteMode,
    pub dry_run: bool,
    pub documents: Vec<DocumentOutcome>,
    pub index_files: Vec<IndexOutcome>,
    pub groups: Vec<GroupTotals>,
    pub total_hours: u32,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.documents.len()
    }

    pub fn count(&self, action: WriteAction) -> usize {
        self.documents.iter().filter(|d| d.action == action).count()
    }
}

/// Emitted once per document, in catalog order, after it is handled.
#[derive(Debug)]
pub struct Progress<'a> {
    /// 1-based position.
    pub position: usize,
    pub total: usize,
    pub outcome: &'a DocumentOutcome,
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Decide what writing `path` would do under `mode`, and do it unless this
/// is a dry run. `content` is only called when the file will be written.
fn emit(
    path: &Path,
    mode: WriteMode,
    dry_run: bool,
    content: impl FnOnce() -> Result<String>,
) -> Result<WriteAction> {
    let exists = path.exists();
    if exists && mode == WriteMode::SkipExisting {
        debug!(path = %path.display(), "skipping existing file");
        return Ok(WriteAction::Skipped);
    }

    let data = content()?;
    if !dry_run {
        io::atomic_write(path, data.as_bytes())?;
        debug!(path = %path.display(), bytes = data.len(), "wrote file");
    }
    Ok(if exists {
        WriteAction::Overwritten
    } else {
        WriteAction::Created
    })
}

/// Generate every document in `catalog`. Records are handled in file order;
/// the first filesystem error aborts the run.
pub fn generate(
    catalog: &Catalog,
    opts: &GenerateOptions,
    mut on_progress: impl FnMut(&Progress<'_>),
) -> Result<GenerationReport> {
    let mode = opts.mode.unwrap_or(catalog.write_mode);
    let base = opts.base_dir.as_path();
    info!(
        phase = %catalog.phase.label(),
        base = %base.display(),
        mode = %mode,
        dry_run = opts.dry_run,
        records = catalog.len(),
        "generating specifications"
    );

    for w in catalog.validate() {
        match w.level {
            WarnLevel::Error => warn!("catalog error: {}", w.message),
            WarnLevel::Warning => warn!("catalog warning: {}", w.message),
        }
    }

    if !opts.dry_run {
        io::ensure_dir(base)?;
    }

    let total = catalog.len();
    let mut documents = Vec::with_capacity(total);
    for (position, (group, record)) in catalog.records().enumerate() {
        let path = paths::spec_path(base, group, record);
        let action = emit(&path, mode, opts.dry_run, || {
            render::render_spec(catalog, group, record)
        })?;

        documents.push(DocumentOutcome {
            id: record.id.clone(),
            title: record.title.clone(),
            group: group.key.clone(),
            path,
            action,
        });
        on_progress(&Progress {
            position: position + 1,
            total,
            outcome: &documents[position],
        });
    }

    let mut index_files = Vec::new();
    if opts.include_index {
        if catalog.index.group_readmes {
            for group in &catalog.groups {
                let path = paths::group_readme_path(base, group);
                let action = emit(&path, mode, opts.dry_run, || Ok(index::group_readme(group)))?;
                index_files.push(IndexOutcome { path, action });
            }
        }
        if catalog.index.completion_summary {
            let path = paths::completion_summary_path(base);
            let root_label = base
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| ".".to_string());
            let action = emit(&path, mode, opts.dry_run, || {
                Ok(index::completion_summary(catalog, opts.generated_at, &root_label))
            })?;
            index_files.push(IndexOutcome { path, action });
        }
    }

    let groups = catalog
        .groups
        .iter()
        .map(|g| GroupTotals {
            key: g.key.clone(),
            name: g.display_name(),
            specs: g.specs.len(),
            hours: g.total_hours(),
        })
        .collect();

    let report = GenerationReport {
        base_dir: base.to_path_buf(),
        mode,
        dry_run: opts.dry_run,
        documents,
        index_files,
        groups,
        total_hours: catalog.total_hours(),
    };
    info!(
        created = report.count(WriteAction::Created),
        updated = report.count(WriteAction::Overwritten),
        skipped = report.count(WriteAction::Skipped),
        "generation complete"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
