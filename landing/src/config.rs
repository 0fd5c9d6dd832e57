//! Site configuration.
//!
//! Loaded from a `site.toml` at build time and passed explicitly to the
//! components that need it. Unlike optional tool configs, a broken site config
//! is a hard error: the build stops instead of rendering with defaults.
//!
//! ```toml
//! title = "Bits2Bytes Labs"
//! tagline = "From bits to bytes, one lab at a time"
//! url = "https://bits2bytes.example.org"
//! base_url = "/"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SiteError};

/// Repository linked from the hero and the navbar when none is configured.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/Mathi27/bits2bytes";

/// Footer text when none is configured.
pub const DEFAULT_COPYRIGHT: &str = "Copyright © Bits2Bytes Labs. Built with Rust.";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// Site name, shown in the navbar
    pub title: String,
    /// One-line tagline, shown verbatim as the hero subtitle
    pub tagline: String,
    /// Public origin of the deployed site
    pub url: String,
    /// Path prefix the site is served under, `/` at the root
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Source repository
    #[serde(default = "default_repository_url")]
    pub repository_url: String,
    /// Footer copyright line
    #[serde(default)]
    pub copyright: Option<String>,
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_repository_url() -> String {
    DEFAULT_REPOSITORY_URL.to_string()
}

impl SiteConfig {
    /// Load and validate config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but would produce a broken page.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("title", &self.title),
            ("tagline", &self.tagline),
            ("url", &self.url),
        ] {
            if value.trim().is_empty() {
                return Err(SiteError::ConfigInvalid {
                    field,
                    reason: "must not be empty".into(),
                });
            }
        }

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(SiteError::ConfigInvalid {
                field: "base_url",
                reason: format!("must start and end with '/', got {:?}", self.base_url),
            });
        }

        Ok(())
    }

    /// Resolve a link target for use in `href`/`src`.
    ///
    /// Absolute URLs pass through untouched; site paths get the base url
    /// prepended with exactly one slash between the two.
    pub fn href(&self, target: &str) -> String {
        if is_external(target) {
            return target.to_string();
        }
        join_base(&self.base_url, target)
    }

    /// Footer line, configured or default.
    pub fn copyright(&self) -> &str {
        self.copyright.as_deref().unwrap_or(DEFAULT_COPYRIGHT)
    }
}

/// True for `http://` and `https://` targets.
pub fn is_external(target: &str) -> bool {
    target.starts_with("https://") || target.starts_with("http://")
}

pub(crate) fn join_base(base_url: &str, target: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        target.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
title = "Bits2Bytes Labs"
tagline = "From bits to bytes"
url = "https://example.org"
"#;

    #[test]
    fn minimal_config_gets_defaults() {
        let config = SiteConfig::from_toml_str(MINIMAL).expect("valid config");
        assert_eq!(config.base_url, "/");
        assert_eq!(config.repository_url, DEFAULT_REPOSITORY_URL);
        assert_eq!(config.copyright(), DEFAULT_COPYRIGHT);
    }

    #[test]
    fn missing_tagline_is_an_error() {
        let err = SiteConfig::from_toml_str("title = \"x\"\nurl = \"https://x\"\n")
            .expect_err("tagline is required");
        assert!(matches!(err, SiteError::ConfigParse(_)));
        assert!(err.to_string().contains("tagline"));
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = SiteConfig::from_toml_str(
            "title = \" \"\ntagline = \"t\"\nurl = \"https://x\"\n",
        )
        .expect_err("blank title");
        assert!(matches!(
            err,
            SiteError::ConfigInvalid { field: "title", .. }
        ));
    }

    #[test]
    fn base_url_must_be_slash_delimited() {
        let toml = format!("{MINIMAL}base_url = \"/labs\"\n");
        let err = SiteConfig::from_toml_str(&toml).expect_err("no trailing slash");
        assert!(matches!(
            err,
            SiteError::ConfigInvalid {
                field: "base_url",
                ..
            }
        ));
    }

    #[test]
    fn href_joins_base_url() {
        let mut config = SiteConfig::from_toml_str(MINIMAL).expect("valid config");
        assert_eq!(config.href("/docs/intro"), "/docs/intro");
        assert_eq!(config.href("img/a.svg"), "/img/a.svg");

        config.base_url = "/bits2bytes/".into();
        assert_eq!(config.href("/docs/intro"), "/bits2bytes/docs/intro");
        assert_eq!(config.href("/"), "/bits2bytes/");
        assert_eq!(
            config.href("https://github.com/Mathi27/bits2bytes"),
            "https://github.com/Mathi27/bits2bytes"
        );
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(MINIMAL.as_bytes()).expect("write");
        let config = SiteConfig::load(file.path()).expect("load");
        assert_eq!(config.title, "Bits2Bytes Labs");
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nope.toml");
        let err = SiteConfig::load(&path).expect_err("missing file");
        assert!(matches!(err, SiteError::ConfigRead { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }
}
