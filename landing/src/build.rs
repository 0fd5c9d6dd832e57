//! Site build: config + static dir in, `index.html` + assets out.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::assets;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::render_home_page;

/// Inputs of a build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// `site.toml`
    pub config_path: PathBuf,
    /// Directory the content tables' asset paths are relative to
    pub static_dir: PathBuf,
    /// Output directory, created if missing
    pub out_dir: PathBuf,
}

/// What a build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Path of the rendered homepage
    pub index_path: PathBuf,
    /// Copied asset files, in table order
    pub assets: Vec<PathBuf>,
    /// Size of `index.html` in bytes
    pub html_bytes: usize,
}

/// Load the config and build the site.
pub fn build_site(options: &BuildOptions) -> Result<BuildReport> {
    let config = SiteConfig::load(&options.config_path)?;
    info!(
        config = %options.config_path.display(),
        title = %config.title,
        "loaded site config"
    );
    build_with_config(&config, &options.static_dir, &options.out_dir)
}

/// Build the site from an already loaded config.
///
/// Assets are verified before anything is written, so a missing image leaves
/// the output dir untouched.
pub fn build_with_config(
    config: &SiteConfig,
    static_dir: &Path,
    out_dir: &Path,
) -> Result<BuildReport> {
    let resolved = assets::verify(static_dir)?;
    let html = render_home_page(config);

    create_dir(out_dir)?;
    let index_path = out_dir.join("index.html");
    write_file(&index_path, html.as_bytes())?;
    info!(path = %index_path.display(), bytes = html.len(), "wrote homepage");

    let mut copied = Vec::with_capacity(resolved.len());
    for asset in resolved {
        let target = out_dir.join(asset.relative);
        if let Some(parent) = target.parent() {
            create_dir(parent)?;
        }
        std::fs::copy(&asset.source, &target).map_err(|source| SiteError::Output {
            path: target.clone(),
            source,
        })?;
        debug!(asset = asset.relative, "copied static asset");
        copied.push(target);
    }
    info!(count = copied.len(), "copied static assets");

    Ok(BuildReport {
        index_path,
        assets: copied,
        html_bytes: html.len(),
    })
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| SiteError::Output {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| SiteError::Output {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::tests::static_fixture;

    fn write_config(dir: &Path) -> PathBuf {
        let path = dir.join("site.toml");
        std::fs::write(
            &path,
            "title = \"Bits2Bytes Labs\"\ntagline = \"Learn by building\"\nurl = \"https://example.org\"\n",
        )
        .expect("write config");
        path
    }

    #[test]
    fn build_writes_index_and_assets() {
        let static_dir = static_fixture();
        let work = tempfile::tempdir().expect("temp dir");
        let options = BuildOptions {
            config_path: write_config(work.path()),
            static_dir: static_dir.path().to_path_buf(),
            out_dir: work.path().join("build"),
        };

        let report = build_site(&options).expect("build succeeds");

        let html = std::fs::read_to_string(&report.index_path).expect("index.html");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Learn by building"));
        assert_eq!(report.html_bytes, html.len());
        assert_eq!(report.assets.len(), 3);
        assert!(
            work.path()
                .join("build/img/undraw_docusaurus_mountain.svg")
                .is_file()
        );
    }

    #[test]
    fn missing_asset_writes_nothing() {
        let static_dir = tempfile::tempdir().expect("empty static dir");
        let work = tempfile::tempdir().expect("temp dir");
        let out_dir = work.path().join("build");
        let options = BuildOptions {
            config_path: write_config(work.path()),
            static_dir: static_dir.path().to_path_buf(),
            out_dir: out_dir.clone(),
        };

        let err = build_site(&options).expect_err("no assets");
        assert!(matches!(err, SiteError::MissingAsset { .. }));
        assert!(!out_dir.exists());
    }

    #[test]
    fn missing_config_fails_fast() {
        let work = tempfile::tempdir().expect("temp dir");
        let options = BuildOptions {
            config_path: work.path().join("site.toml"),
            static_dir: work.path().to_path_buf(),
            out_dir: work.path().join("build"),
        };
        let err = build_site(&options).expect_err("no config");
        assert!(matches!(err, SiteError::ConfigRead { .. }));
    }
}
