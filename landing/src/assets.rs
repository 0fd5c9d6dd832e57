//! Static asset resolution.
//!
//! The content tables reference images by relative path. Before a page is
//! written, every reference must resolve to a file under the static dir;
//! a dangling reference fails the build instead of shipping a broken `<img>`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::content::FEATURES;
use crate::error::{Result, SiteError};

/// A referenced asset resolved to a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Path as written in the content table, e.g. `img/foo.svg`
    pub relative: &'static str,
    /// Location inside the static dir
    pub source: PathBuf,
}

/// Every asset the homepage references, in table order, without duplicates.
pub fn referenced_assets() -> Vec<&'static str> {
    let mut assets: Vec<&'static str> = Vec::new();
    for feature in FEATURES {
        if !assets.contains(&feature.graphic.path) {
            assets.push(feature.graphic.path);
        }
    }
    assets
}

/// Resolve every referenced asset under `static_dir`.
///
/// Fails on the first reference that is not a regular file.
pub fn verify(static_dir: &Path) -> Result<Vec<ResolvedAsset>> {
    referenced_assets()
        .into_iter()
        .map(|relative| {
            let source = static_dir.join(relative);
            if !source.is_file() {
                return Err(SiteError::MissingAsset {
                    asset: relative,
                    static_dir: static_dir.to_path_buf(),
                });
            }
            debug!(asset = relative, path = %source.display(), "resolved static asset");
            Ok(ResolvedAsset { relative, source })
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Static dir with every referenced asset present.
    pub(crate) fn static_fixture() -> TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        for asset in referenced_assets() {
            let path = dir.path().join(asset);
            std::fs::create_dir_all(path.parent().expect("asset has a parent"))
                .expect("create asset dir");
            std::fs::write(&path, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>")
                .expect("write asset");
        }
        dir
    }

    #[test]
    fn referenced_assets_follow_feature_order() {
        assert_eq!(
            referenced_assets(),
            vec![
                "img/undraw_docusaurus_mountain.svg",
                "img/undraw_docusaurus_tree.svg",
                "img/undraw_docusaurus_react.svg",
            ]
        );
    }

    #[test]
    fn verify_resolves_all_assets() {
        let dir = static_fixture();
        let resolved = verify(dir.path()).expect("all assets present");
        assert_eq!(resolved.len(), 3);
        assert!(resolved.iter().all(|a| a.source.starts_with(dir.path())));
    }

    #[test]
    fn verify_names_missing_asset() {
        let dir = static_fixture();
        std::fs::remove_file(dir.path().join("img/undraw_docusaurus_tree.svg")).expect("remove");

        let err = verify(dir.path()).expect_err("tree.svg is gone");
        match err {
            SiteError::MissingAsset { asset, .. } => {
                assert_eq!(asset, "img/undraw_docusaurus_tree.svg")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
