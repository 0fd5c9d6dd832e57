//! Philosophy section - claims on the left, a code listing on the right.

use leptos::prelude::*;

use super::Heading;
use crate::content::{BLINK_LISTING, LISTING_FILE_NAME, PHILOSOPHY_POINTS};
use crate::types::HeadingLevel;

/// Two-column "Our Philosophy" section.
#[component]
pub fn Philosophy() -> impl IntoView {
    view! {
        <section class="philosophy-section">
            <div class="container">
                <div class="philosophy-grid">
                    <div class="philosophy-content">
                        <span class="section-label">"Our Philosophy"</span>
                        <Heading level=HeadingLevel::H2 class="section-title">
                            "Learn by Building, Not Just Reading"
                        </Heading>
                        <p class="philosophy-text">
                            "We believe in learning through experimentation. Every concept is paired with practical labs "
                            "and real hardware projects. Theory meets practice in every lesson."
                        </p>
                        <ul class="philosophy-list">
                            {PHILOSOPHY_POINTS
                                .iter()
                                .map(|point| {
                                    view! {
                                        <li>
                                            <span class="check-icon">"✓"</span>
                                            {*point}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div class="philosophy-visual">
                        <CodeListing file_name=LISTING_FILE_NAME source=BLINK_LISTING />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Read-only code block. `source` is emitted as escaped text.
#[component]
fn CodeListing(file_name: &'static str, source: &'static str) -> impl IntoView {
    view! {
        <div class="code-block">
            <div class="code-header">
                <span>{file_name}</span>
            </div>
            <pre class="code-content"><code>{source}</code></pre>
        </div>
    }
}
