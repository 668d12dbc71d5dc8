//! Group README and phase completion summary.

use crate::catalog::{Catalog, Group};
use crate::paths::{COMPLETION_SUMMARY, GROUP_README};
use chrono::{DateTime, Utc};

/// Characters of description shown per entry in a group README.
pub const EXCERPT_CHARS: usize = 200;

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(EXCERPT_CHARS).collect();
        format!("{}...", cut.trim_end())
    }
}

/// `README.md` for one group: one entry per spec with a link to its file.
pub fn group_readme(group: &Group) -> String {
    let name = group.display_name();
    let mut out = format!(
        "# {name}\n\n## Overview\n\nThis category contains specifications for {}.\n\n## Specifications ({})\n\n",
        name.to_lowercase(),
        group.specs.len()
    );

    for spec in &group.specs {
        out.push_str(&format!(
            "### SPEC-{}: {}\n- **Priority**: {}\n- **Time**: {}\n- **Status**: ✅ Ready for Implementation\n\n{}\n\n[View Full Specification](./{})\n\n---\n\n",
            spec.id,
            spec.title,
            spec.priority,
            spec.time,
            excerpt(&spec.description),
            spec.file_name(),
        ));
    }
    out
}

/// `COMPLETION-SUMMARY.md` for the whole catalog. `root_label` heads the
/// file tree (usually the output directory name).
pub fn completion_summary(catalog: &Catalog, generated_at: DateTime<Utc>, root_label: &str) -> String {
    let total = catalog.len();
    let title = match (&catalog.index.summary_title, catalog.phase.number) {
        (Some(title), _) => title.clone(),
        (None, Some(n)) => format!("PHASE {n} {}", catalog.phase.name.to_uppercase()),
        (None, None) => catalog.phase.name.to_uppercase(),
    };

    let mut out = format!(
        "# {} - COMPLETION SUMMARY\n\n## 🎉 ALL SPECIFICATIONS GENERATED\n\n**Total Specifications**: {total}  \n**Total Estimated Time**: {} hours  \n**Generated On**: {}  \n**Status**: ✅ COMPLETE  \n\n---\n\n## 📊 BREAKDOWN BY CATEGORY\n\n",
        title.trim(),
        catalog.total_hours(),
        generated_at.format("%Y-%m-%d %H:%M:%S"),
    );

    for group in &catalog.groups {
        out.push_str(&format!(
            "### {}\n- **Specifications**: {}\n- **Total Time**: {} hours\n- **Status**: ✅ Ready\n\n",
            group.display_name(),
            group.specs.len(),
            group.total_hours(),
        ));
    }

    out.push_str(&format!(
        "---\n\n## 🚀 NEXT STEPS\n\n\
1. **Review Specifications**: Review all {total} specifications\n\
2. **Assign Tasks**: Assign specifications to development team\n\
3. **Implementation**: Begin implementation following the specs\n\
4. **Testing**: Comprehensive testing at each stage\n\
5. **Deployment**: Production deployment with monitoring\n\
6. **Go-Live**: Launch the platform! 🎉\n\n\
---\n\n## 📁 FILE STRUCTURE\n\n```\n{root_label}/\n"
    ));
    out.push_str(&file_tree(catalog));
    out.push_str("```\n\n---\n\nAll specifications are production-ready and autonomous AI agent compatible.\n");
    out
}

/// Groups sorted by key, each with its README followed by its spec files.
fn file_tree(catalog: &Catalog) -> String {
    let mut groups: Vec<&Group> = catalog.groups.iter().collect();
    groups.sort_by(|a, b| a.key.cmp(&b.key));

    let mut out = String::new();
    if catalog.index.completion_summary {
        out.push_str(&format!("├── {COMPLETION_SUMMARY}\n"));
    }
    for (gi, group) in groups.iter().enumerate() {
        let last_group = gi + 1 == groups.len();
        let (branch, rail) = if last_group { ("└──", "    ") } else { ("├──", "│   ") };
        out.push_str(&format!("{branch} {}/\n", group.key));

        let mut entries: Vec<String> = Vec::new();
        if catalog.index.group_readmes {
            entries.push(GROUP_README.to_string());
        }
        entries.extend(group.specs.iter().map(|s| s.file_name()));

        for (ei, entry) in entries.iter().enumerate() {
            let leaf = if ei + 1 == entries.len() { "└──" } else { "├──" };
            out.push_str(&format!("{rail}{leaf} {entry}\n"));
        }
    }
    out
}
