//! Feature grid - one card per [`FeatureRecord`].

use leptos::prelude::*;

use super::{GraphicImage, Heading};
use crate::content::FEATURES;
use crate::types::{FeatureRecord, HeadingLevel};

/// "Why Bits2Bytes?" section over the [`FEATURES`] table.
///
/// `base_url` only affects where the card illustrations are loaded from; it
/// defaults to the site root so the section can be rendered on its own.
#[component]
pub fn HomepageFeatures(
    /// Site base url the illustrations are served under
    #[prop(into, default = String::from("/"))]
    base_url: String,
) -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="section-header">
                    <span class="section-label">"Why Bits2Bytes?"</span>
                    <Heading level=HeadingLevel::H2 class="section-title">
                        "Built for Practical Learning"
                    </Heading>
                </div>
                <div class="features-grid">
                    // Position is the identity: FEATURES is 'static and never reordered.
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(idx, feature)| {
                            view! { <FeatureCard idx=idx feature=*feature base_url=base_url.clone() /> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(idx: usize, feature: FeatureRecord, base_url: String) -> impl IntoView {
    view! {
        <div class="feature-card" data-index=idx.to_string()>
            <div class="feature-icon">
                <GraphicImage
                    graphic=feature.graphic
                    base_url=base_url
                    class="feature-svg"
                    alt=feature.title
                />
            </div>
            <div class="feature-content">
                <Heading level=HeadingLevel::H3 class="feature-title">
                    {feature.title}
                </Heading>
                <p class="feature-description">{feature.description}</p>
            </div>
        </div>
    }
}
