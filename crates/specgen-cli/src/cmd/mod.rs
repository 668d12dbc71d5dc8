pub mod check;
pub mod generate;
pub mod init;
pub mod list;
pub mod render;

use anyhow::Context;
use specgen_core::catalog::Catalog;
use std::path::Path;

pub(crate) fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    Catalog::load(path).with_context(|| format!("failed to load catalog {}", path.display()))
}
