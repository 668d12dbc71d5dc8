use crate::output::{print_json, print_table};
use crate::root;
use specgen_core::paths;
use std::path::Path;

pub fn run(catalog_path: &Path, json: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(catalog_path)?;
    let base = root::resolve_base_dir(None, catalog_path, &catalog);

    if json {
        let items: Vec<serde_json::Value> = catalog
            .records()
            .map(|(group, record)| {
                serde_json::json!({
                    "id": record.id,
                    "title": record.title,
                    "group": group.key,
                    "priority": record.priority,
                    "time": record.time,
                    "path": paths::spec_path(&base, group, record),
                })
            })
            .collect();
        print_json(&items)?;
        return Ok(());
    }

    if catalog.is_empty() {
        println!("No specs in {}.", catalog_path.display());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = catalog
        .records()
        .map(|(group, record)| {
            vec![
                format!("SPEC-{}", record.id),
                group.key.clone(),
                record.priority.clone(),
                record.time.clone(),
                paths::display_relative(&paths::spec_path(&base, group, record), &base),
            ]
        })
        .collect();
    print_table(&["ID", "GROUP", "PRIORITY", "TIME", "PATH"], rows);
    println!();
    println!(
        "{} specs, {} hours ({})",
        catalog.len(),
        catalog.total_hours(),
        catalog.phase.label()
    );
    Ok(())
}
