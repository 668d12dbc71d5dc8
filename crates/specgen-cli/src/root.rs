use specgen_core::catalog::Catalog;
use specgen_core::paths;
use std::path::{Path, PathBuf};

/// Resolve the directory a catalog's documents are written under.
///
/// Priority:
/// 1. `--out` flag / `SPECGEN_OUT` env var (passed in as `explicit`)
/// 2. The catalog's `base_dir`, relative to the catalog file
/// 3. The directory holding the catalog file
pub fn resolve_base_dir(explicit: Option<&Path>, catalog_path: &Path, catalog: &Catalog) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    paths::resolve_base_dir(catalog_path, catalog.base_dir.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_out_wins() {
        let dir = TempDir::new().unwrap();
        let mut cat = Catalog::new("Test");
        cat.base_dir = Some(PathBuf::from("elsewhere"));
        let result = resolve_base_dir(Some(dir.path()), Path::new("/c/specs.yaml"), &cat);
        assert_eq!(result, dir.path());
    }

    #[test]
    fn catalog_base_dir_is_relative_to_catalog_file() {
        let mut cat = Catalog::new("Test");
        cat.base_dir = Some(PathBuf::from("../specs/PHASE-09"));
        let result = resolve_base_dir(None, Path::new("/work/catalogs/phase-09.yaml"), &cat);
        assert_eq!(result, PathBuf::from("/work/catalogs/../specs/PHASE-09"));
    }

    #[test]
    fn falls_back_to_catalog_directory() {
        let cat = Catalog::new("Test");
        let result = resolve_base_dir(None, Path::new("/work/catalogs/phase-09.yaml"), &cat);
        assert_eq!(result, PathBuf::from("/work/catalogs"));
    }
}
