//! Homepage composition.

use leptos::prelude::*;

use super::{CallToAction, Hero, HomepageFeatures, Layout, LearningPaths, Philosophy};
use crate::config::SiteConfig;
use crate::content::HOME_META;

/// The whole homepage: hero, then the four content sections inside `<main>`.
#[component]
pub fn HomePage(
    /// Site settings, threaded to every section that needs them
    config: SiteConfig,
) -> impl IntoView {
    let base_url = config.base_url.clone();
    let shell_config = config.clone();
    let hero_config = config.clone();

    view! {
        <Layout meta=HOME_META config=shell_config>
            <Hero config=hero_config />
            <main>
                <HomepageFeatures base_url=base_url />
                <LearningPaths />
                <Philosophy />
                <CallToAction config=config />
            </main>
        </Layout>
    }
}
