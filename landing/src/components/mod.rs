//! Leptos components for the homepage.
//!
//! Every component is a pure function of its props, rendered once to static
//! HTML. Nothing here is reactive.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomePage
//! └── Layout (head metadata, navbar, footer)
//!     ├── Hero
//!     │   └── Terminal
//!     └── <main>
//!         ├── HomepageFeatures
//!         │   └── FeatureCard (per FEATURES entry)
//!         ├── LearningPaths
//!         │   └── PathCard (per LEARNING_PATHS entry)
//!         ├── Philosophy
//!         │   └── CodeListing
//!         └── CallToAction
//! ```
//!
//! # Usage
//!
//! Components are usually rendered through [`crate::render_home_page`], but
//! single sections can be rendered directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use bits2bytes_landing::components::LearningPaths;
//!
//! let html = view! { <LearningPaths /> }.to_html();
//! ```

mod cta;
mod features;
mod hero;
mod learning_paths;
mod page;
mod philosophy;
mod shell;

pub use cta::CallToAction;
pub use features::HomepageFeatures;
pub use hero::Hero;
pub use learning_paths::LearningPaths;
pub use page::HomePage;
pub use philosophy::Philosophy;
pub use shell::{GraphicImage, Heading, Layout, Link};
