//! Site shell primitives: layout, link, heading and image.
//!
//! These are the small building blocks every section leans on. They carry no
//! content of their own; page text lives in the section components and in
//! [`crate::content`].

use leptos::prelude::*;

use crate::config::{SiteConfig, is_external};
use crate::content::{BLOG_INDEX, DOCS_ENTRY};
use crate::styles::SITE_CSS;
use crate::types::{Graphic, HeadingLevel, PageMeta};

/// The complete HTML document around a page body.
///
/// Renders the `<head>` metadata from `meta`, then navbar, `children` and
/// footer.
#[component]
pub fn Layout(
    /// `<title>` and description for this page
    meta: PageMeta,
    /// Site-wide settings for the navbar, footer and link resolution
    config: SiteConfig,
    /// Page body between navbar and footer
    children: Children,
) -> impl IntoView {
    let home = config.href("/");
    let canonical = format!("{}{}", config.url.trim_end_matches('/'), home);
    let docs = config.href(DOCS_ENTRY);
    let blog = config.href(BLOG_INDEX);
    let copyright = config.copyright().to_string();
    let brand = config.title.clone();
    let repository = config.repository_url.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:title")} content=meta.title />
                <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:description")} content=meta.description />
                <link rel="canonical" href=canonical />
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <nav class="navbar">
                    <Link href=home class="navbar-brand">{brand}</Link>
                    <div class="navbar-links">
                        <Link href=docs>"Docs"</Link>
                        <Link href=blog>"Blog"</Link>
                        <Link href=repository>"GitHub"</Link>
                    </div>
                </nav>
                {children()}
                <footer class="footer">
                    <p>{copyright}</p>
                </footer>
            </body>
        </html>
    }
}

/// Navigation link. External targets open in a new tab.
///
/// `href` must already be resolved (see [`SiteConfig::href`]).
#[component]
pub fn Link(
    /// Resolved target
    #[prop(into)]
    href: String,
    /// Left out of the markup when unset
    #[prop(optional)]
    class: Option<&'static str>,
    /// Link content
    children: Children,
) -> impl IntoView {
    let external = is_external(&href);
    view! {
        <a
            href=href
            class=class
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {children()}
        </a>
    }
}

/// `<h1>`..`<h6>` chosen at runtime.
#[component]
pub fn Heading(
    /// Which of `<h1>`..`<h6>` to emit
    level: HeadingLevel,
    /// CSS class names
    #[prop(default = "")]
    class: &'static str,
    /// Heading content
    children: Children,
) -> impl IntoView {
    match level {
        HeadingLevel::H1 => view! { <h1 class=class>{children()}</h1> }.into_any(),
        HeadingLevel::H2 => view! { <h2 class=class>{children()}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3 class=class>{children()}</h3> }.into_any(),
        HeadingLevel::H4 => view! { <h4 class=class>{children()}</h4> }.into_any(),
        HeadingLevel::H5 => view! { <h5 class=class>{children()}</h5> }.into_any(),
        HeadingLevel::H6 => view! { <h6 class=class>{children()}</h6> }.into_any(),
    }
}

/// Static illustration. `base_url` is the site prefix the asset is served under.
#[component]
pub fn GraphicImage(
    /// Asset to show
    graphic: Graphic,
    /// Site base url, `/` at the root
    #[prop(into)]
    base_url: String,
    /// CSS class names, left out when unset
    #[prop(optional)]
    class: Option<&'static str>,
    /// Alternative text
    #[prop(default = "")]
    alt: &'static str,
) -> impl IntoView {
    let src = crate::config::join_base(&base_url, graphic.path);
    view! { <img class=class src=src role="img" alt=alt /> }
}
