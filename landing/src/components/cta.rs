use leptos::prelude::*;

use super::{Heading, Link};
use crate::config::SiteConfig;
use crate::content::{BLOG_INDEX, DOCS_ENTRY};
use crate::types::HeadingLevel;

/// Closing call to action: docs entry point and the blog.
#[component]
pub fn CallToAction(
    /// Used to resolve the two link targets
    config: SiteConfig,
) -> impl IntoView {
    let docs = config.href(DOCS_ENTRY);
    let blog = config.href(BLOG_INDEX);

    view! {
        <section class="cta-section">
            <div class="container">
                <div class="cta-content">
                    <Heading level=HeadingLevel::H2 class="cta-title">
                        "Ready to Start Building?"
                    </Heading>
                    <p class="cta-text">
                        "Join the community of learners exploring embedded systems, robotics, and IoT. "
                        "All content is open-source and free to use."
                    </p>
                    <div class="cta-buttons">
                        <Link href=docs class="button button-primary">
                            "Get Started"
                            <span class="button-arrow">"→"</span>
                        </Link>
                        <Link href=blog class="button button-outline">
                            "Read the Blog"
                        </Link>
                    </div>
                </div>
            </div>
        </section>
    }
}
