//! Record types for the homepage content tables.
//!
//! Every record is a plain `'static` value: the tables in [`crate::content`]
//! are defined once and only ever read. Components map a table to markup in
//! slice order, so the order of a table is the order on the page.
//!
//! # Example
//!
//! ```rust
//! use bits2bytes_landing::types::{FeatureRecord, Graphic};
//!
//! const CARD: FeatureRecord = FeatureRecord {
//!     title: "Hands-On First",
//!     description: "Every concept is backed by practical labs.",
//!     graphic: Graphic::new("img/undraw_docusaurus_react.svg"),
//! };
//! assert_eq!(CARD.graphic.path, "img/undraw_docusaurus_react.svg");
//! ```

use std::fmt;

/// Opaque reference to an image under the static asset directory.
///
/// The path is relative (`img/foo.svg`) and is resolved twice: against the
/// static dir when the site is built, and against the site base url when the
/// `<img>` tag is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Graphic {
    /// Path relative to the static asset directory
    pub path: &'static str,
}

impl Graphic {
    /// Reference a static asset by relative path.
    pub const fn new(path: &'static str) -> Self {
        Self { path }
    }
}

/// One card of the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureRecord {
    /// Card heading
    pub title: &'static str,
    /// Card body text
    pub description: &'static str,
    /// Illustration shown above the text
    pub graphic: Graphic,
}

/// One card of the learning paths section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathRecord {
    /// Emoji glyph shown as the card icon
    pub icon: &'static str,
    /// Path name
    pub title: &'static str,
    /// Topics covered
    pub description: &'static str,
    /// Free-text status label ("Fundamentals → Advanced", "Coming Soon")
    pub level: &'static str,
}

/// Small badge under the hero actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    /// Emoji shown before the label
    pub icon: &'static str,
    /// Badge text
    pub label: &'static str,
}

/// Style of one line in the hero terminal mock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalLine {
    /// `$ command`
    Command(&'static str),
    /// Dimmed program output
    Output(&'static str),
    /// Green success output
    Success(&'static str),
}

/// Page-level metadata handed to the layout shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    /// Content of `<title>`
    pub title: &'static str,
    /// Content of `<meta name="description">`
    pub description: &'static str,
}

/// HTML heading level, `<h1>` through `<h6>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    /// `<h1>`, page headline
    H1,
    /// `<h2>`, section titles
    H2,
    /// `<h3>`, card titles
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
}

/// Returned when a number outside `1..=6` is used as a heading level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidHeadingLevel(pub u8);

impl fmt::Display for InvalidHeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "heading level must be 1-6, got {}", self.0)
    }
}

impl std::error::Error for InvalidHeadingLevel {}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            4 => Ok(Self::H4),
            5 => Ok(Self::H5),
            6 => Ok(Self::H6),
            other => Err(InvalidHeadingLevel(other)),
        }
    }
}

impl HeadingLevel {
    /// Numeric level, 1-6.
    pub fn as_u8(self) -> u8 {
        self as u8 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_accepts_one_through_six() {
        for n in 1..=6u8 {
            let level = HeadingLevel::try_from(n).expect("valid level");
            assert_eq!(level.as_u8(), n);
        }
    }

    #[test]
    fn heading_level_rejects_out_of_range() {
        assert_eq!(HeadingLevel::try_from(0), Err(InvalidHeadingLevel(0)));
        assert_eq!(HeadingLevel::try_from(7), Err(InvalidHeadingLevel(7)));
        assert_eq!(
            InvalidHeadingLevel(9).to_string(),
            "heading level must be 1-6, got 9"
        );
    }
}
