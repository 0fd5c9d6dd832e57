//! Hero banner - headline, tagline, actions and the terminal mock.

use leptos::prelude::*;

use super::{Heading, Link};
use crate::config::SiteConfig;
use crate::content::{DOCS_ENTRY, HERO_HIGHLIGHTS, TERMINAL_LINES, TERMINAL_TITLE};
use crate::types::{HeadingLevel, TerminalLine};

/// Top-of-page banner. The subtitle is `config.tagline`, unmodified.
#[component]
pub fn Hero(
    /// Supplies the tagline and the repository link
    config: SiteConfig,
) -> impl IntoView {
    let start = config.href(DOCS_ENTRY);
    let source = config.href(&config.repository_url);

    view! {
        <header class="hero-banner">
            <div class="hero-container">
                <div class="hero-content">
                    <div class="hero-label">
                        <span class="label-icon">"⚡"</span>
                        "Open-Source Learning Initiative"
                    </div>
                    <Heading level=HeadingLevel::H1 class="hero-title">
                        <span class="title-accent">"Bits"</span>
                        "2"
                        <span class="title-accent">"Bytes"</span>
                        <span class="title-sub">"Labs"</span>
                    </Heading>
                    <p class="hero-subtitle">{config.tagline.clone()}</p>
                    <p class="hero-description">
                        "Hands-on, lab-driven learning in "
                        <strong>"Embedded Systems"</strong>
                        ", "
                        <strong>"Robotics"</strong>
                        ", and "
                        <strong>"IoT"</strong>
                        ". Progress from fundamental concepts to real-world applications through structured experiments."
                    </p>
                    <div class="hero-buttons">
                        <Link href=start class="button button-primary">
                            "Start Learning"
                            <span class="button-arrow">"→"</span>
                        </Link>
                        <Link href=source class="button button-secondary">
                            "View on GitHub"
                        </Link>
                    </div>
                    <div class="hero-stats">
                        {HERO_HIGHLIGHTS
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <div class="stat-item">
                                        <span class="stat-icon">{highlight.icon}</span>
                                        <span class="stat-text">{highlight.label}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="hero-visual">
                    <Terminal />
                </div>
            </div>
        </header>
    }
}

/// Decorative terminal window. The lines are fixed strings; the typing
/// effect is pure CSS.
#[component]
fn Terminal() -> impl IntoView {
    view! {
        <div class="terminal-window">
            <div class="terminal-header">
                <span class="terminal-dot red"></span>
                <span class="terminal-dot yellow"></span>
                <span class="terminal-dot green"></span>
                <span class="terminal-title">{TERMINAL_TITLE}</span>
            </div>
            <div class="terminal-body">
                <div class="terminal-code">
                    {TERMINAL_LINES
                        .iter()
                        .map(|line| match *line {
                            TerminalLine::Command(cmd) => view! {
                                <div class="terminal-line">
                                    <span class="terminal-prompt">"$"</span>
                                    <span class="terminal-command">{cmd}</span>
                                </div>
                            }
                            .into_any(),
                            TerminalLine::Output(text) => view! {
                                <div class="terminal-line terminal-output">{text}</div>
                            }
                            .into_any(),
                            TerminalLine::Success(text) => view! {
                                <div class="terminal-line terminal-success">{text}</div>
                            }
                            .into_any(),
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
