//! # bits2bytes-landing
//!
//! Static homepage for Bits2Bytes Labs, rendered with Leptos on the server.
//!
//! The page is five stateless sections: hero, feature grid, learning paths,
//! philosophy and call to action. Each one maps a table from [`content`] to
//! markup in table order, and the whole tree is turned into one HTML string
//! by [`render_home_page`]. Nothing is hydrated in the browser.
//!
//! ```rust
//! use bits2bytes_landing::{render_home_page, SiteConfig};
//!
//! let config = SiteConfig::from_toml_str(r#"
//! title = "Bits2Bytes Labs"
//! tagline = "From bits to bytes, one lab at a time"
//! url = "https://bits2bytes.example.org"
//! "#).unwrap();
//!
//! let html = render_home_page(&config);
//! assert!(html.contains("From bits to bytes, one lab at a time"));
//! ```
//!
//! Writing the page to disk, together with the illustrations it references,
//! is [`build_site`]'s job; the `b2b-landing` binary wraps it.

#![warn(missing_docs)]

pub mod assets;
pub mod build;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod styles;
pub mod types;

pub use build::{BuildOptions, BuildReport, build_site};
pub use config::SiteConfig;
pub use error::SiteError;

use components::{HomePage, HomepageFeatures};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete homepage document.
///
/// # Example
///
/// ```rust
/// use bits2bytes_landing::{render_home_page, SiteConfig};
///
/// let config = SiteConfig::from_toml_str(
///     "title = \"B2B\"\ntagline = \"Build things\"\nurl = \"https://example.org\"\n",
/// ).unwrap();
/// let html = render_home_page(&config);
/// assert!(html.contains("Build things"));
/// ```
pub fn render_home_page(config: &SiteConfig) -> String {
    let doc = view! { <HomePage config=config.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the feature grid section, with assets served from `/`.
pub fn render_features_section() -> String {
    view! { <HomepageFeatures /> }.to_html()
}
