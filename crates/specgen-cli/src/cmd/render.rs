use anyhow::Context;
use specgen_core::render::render_spec;
use std::path::Path;

pub fn run(catalog_path: &Path, id: &str) -> anyhow::Result<()> {
    let catalog = super::load_catalog(catalog_path)?;
    let id = id.trim_start_matches("SPEC-");
    let (group, record) = catalog
        .get(id)
        .with_context(|| format!("in {}", catalog_path.display()))?;
    let doc = render_spec(&catalog, group, record)
        .with_context(|| format!("failed to render SPEC-{id}"))?;
    print!("{doc}");
    Ok(())
}
