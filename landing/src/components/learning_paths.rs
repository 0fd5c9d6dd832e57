//! Learning paths - one card per [`PathRecord`].

use leptos::prelude::*;

use super::Heading;
use crate::content::LEARNING_PATHS;
use crate::types::{HeadingLevel, PathRecord};

/// "Learning Paths" section over the [`LEARNING_PATHS`] table.
#[component]
pub fn LearningPaths() -> impl IntoView {
    view! {
        <section class="path-section">
            <div class="container">
                <div class="section-header">
                    <span class="section-label">"Learning Paths"</span>
                    <Heading level=HeadingLevel::H2 class="section-title">
                        "Structured Journey from Bits to Bytes"
                    </Heading>
                    <p class="section-subtitle">
                        "Each path is designed with incremental complexity, ensuring you build strong foundations before advancing."
                    </p>
                </div>
                <div class="path-grid">
                    {LEARNING_PATHS
                        .iter()
                        .enumerate()
                        .map(|(idx, path)| view! { <PathCard idx=idx path=*path /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

// `level` is a label only; "Coming Soon" cards render like any other.
#[component]
fn PathCard(idx: usize, path: PathRecord) -> impl IntoView {
    view! {
        <div class="path-card" data-index=idx.to_string()>
            <div class="path-icon">{path.icon}</div>
            <h3 class="path-title">{path.title}</h3>
            <p class="path-description">{path.description}</p>
            <span class="path-level">{path.level}</span>
        </div>
    }
}
