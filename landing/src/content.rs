//! Static content tables for the homepage.
//!
//! Order matters: each table is rendered front to back, and the card
//! position is its identity on the page.

use crate::types::{FeatureRecord, Graphic, Highlight, PageMeta, PathRecord, TerminalLine};

/// Head metadata for the homepage.
pub const HOME_META: PageMeta = PageMeta {
    title: "Hands-on Learning in Embedded Systems, Robotics & IoT",
    description: "Bits2Bytes Labs - Open-source educational initiative for hands-on learning in Embedded Systems, Robotics, and IoT",
};

/// Internal entry point of the documentation.
pub const DOCS_ENTRY: &str = "/docs/intro";

/// Blog index route.
pub const BLOG_INDEX: &str = "/blog";

/// Feature grid cards.
pub static FEATURES: &[FeatureRecord] = &[
    FeatureRecord {
        title: "Structured Learning Paths",
        description: "Carefully organized lab-driven content that guides learners from fundamentals to real-world embedded, robotics, and IoT systems.",
        graphic: Graphic::new("img/undraw_docusaurus_mountain.svg"),
    },
    FeatureRecord {
        title: "Open-Source by Design",
        description: "All materials are openly shared for learning, remixing, and collaboration—built as a community-driven educational initiative.",
        graphic: Graphic::new("img/undraw_docusaurus_tree.svg"),
    },
    FeatureRecord {
        title: "Hands-On First",
        description: "Every concept is backed by practical labs and experiments, helping learners build, test, and truly understand hardware systems.",
        graphic: Graphic::new("img/undraw_docusaurus_react.svg"),
    },
];

/// Learning path cards. The last one is not published yet.
pub static LEARNING_PATHS: &[PathRecord] = &[
    PathRecord {
        icon: "🔌",
        title: "Embedded Systems",
        description: "Microcontrollers, GPIO, Timers, Interrupts, Communication Protocols",
        level: "Fundamentals → Advanced",
    },
    PathRecord {
        icon: "🤖",
        title: "Robotics",
        description: "Motor control, Sensors, Kinematics, Autonomous systems",
        level: "Beginner → Intermediate",
    },
    PathRecord {
        icon: "📡",
        title: "IoT & Connectivity",
        description: "WiFi, MQTT, Cloud integration, Edge computing",
        level: "Coming Soon",
    },
];

/// Badges under the hero actions.
pub static HERO_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "📚",
        label: "Structured Labs",
    },
    Highlight {
        icon: "🔧",
        label: "Practical First",
    },
    Highlight {
        icon: "🌍",
        label: "Community Driven",
    },
];

/// Window title of the hero terminal mock.
pub const TERMINAL_TITLE: &str = "bits2bytes.sh";

/// Lines of the hero terminal mock. Display only, nothing is executed.
pub static TERMINAL_LINES: &[TerminalLine] = &[
    TerminalLine::Command("learn --embedded --iot --robotics"),
    TerminalLine::Output("→ Loading hands-on labs..."),
    TerminalLine::Success("✓ Ready to build!"),
];

/// Checked claims in the philosophy column.
pub static PHILOSOPHY_POINTS: &[&str] = &[
    "Lab experiments with clear objectives",
    "Step-by-step hardware setup guides",
    "Code samples you can run immediately",
    "Troubleshooting tips from experience",
];

/// File name shown above the code listing.
pub const LISTING_FILE_NAME: &str = "main.c";

/// AVR blink example shown in the philosophy section. Never compiled.
pub const BLINK_LISTING: &str = r#"// Blink LED - Your first embedded lab
#include <avr/io.h>
#include <util/delay.h>

int main(void) {
    DDRB |= (1 << PB5);  // Set pin as output

    while (1) {
        PORTB ^= (1 << PB5);  // Toggle LED
        _delay_ms(500);
    }
    return 0;
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_have_text() {
        for feature in FEATURES {
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
            assert!(feature.graphic.path.starts_with("img/"));
        }
        for path in LEARNING_PATHS {
            assert!(!path.icon.is_empty());
            assert!(!path.title.is_empty());
            assert!(!path.description.is_empty());
            assert!(!path.level.is_empty());
        }
    }

    #[test]
    fn only_last_path_is_unreleased() {
        let labels: Vec<_> = LEARNING_PATHS.iter().map(|p| p.level).collect();
        assert_eq!(
            labels,
            ["Fundamentals → Advanced", "Beginner → Intermediate", "Coming Soon"]
        );
    }
}
