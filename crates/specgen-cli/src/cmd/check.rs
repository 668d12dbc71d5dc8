use crate::output::print_json;
use specgen_core::catalog::WarnLevel;
use std::path::Path;

pub fn run(catalog_path: &Path, json: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(catalog_path)?;
    let warnings = catalog.validate();

    if json {
        let value = serde_json::json!({
            "catalog": catalog_path,
            "records": catalog.len(),
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Catalog is valid. {} specs, no warnings.", catalog.len());
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);
    if has_errors {
        anyhow::bail!("catalog validation found errors");
    }

    Ok(())
}
