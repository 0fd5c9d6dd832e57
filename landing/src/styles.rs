//! CSS for the homepage.
//!
//! Inlined into `<head>` so the generated `index.html` is self-contained
//! apart from the feature illustrations.

/// Complete stylesheet - dark hero, light content sections.
pub const SITE_CSS: &str = r#"
:root {
  --b2b-bg: #0b1220;
  --b2b-surface: #111a2e;
  --b2b-text: #e6edf7;
  --b2b-muted: #8ea0bf;
  --b2b-accent: #22d3ee;
  --b2b-accent-strong: #0ea5e9;
  --b2b-success: #27ca40;
  --b2b-radius: 12px;
  --b2b-font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
  --b2b-mono: "JetBrains Mono", ui-monospace, SFMono-Regular, Menlo, monospace;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: var(--b2b-font);
  color: var(--b2b-text);
  background: var(--b2b-bg);
  line-height: 1.6;
}

a { color: inherit; text-decoration: none; }

.container { max-width: 1140px; margin: 0 auto; padding: 0 24px; }

/* Navbar */
.navbar {
  position: sticky; top: 0; z-index: 10;
  display: flex; align-items: center; justify-content: space-between;
  padding: 14px 24px;
  background: rgba(11, 18, 32, 0.85);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid rgba(255, 255, 255, 0.06);
}
.navbar-brand { font-weight: 700; letter-spacing: 0.02em; }
.navbar-links { display: flex; gap: 20px; font-size: 0.95rem; color: var(--b2b-muted); }
.navbar-links a:hover { color: var(--b2b-accent); }

/* Buttons */
.button {
  display: inline-flex; align-items: center; gap: 8px;
  padding: 12px 22px; border-radius: 999px; font-weight: 600;
  transition: transform 0.15s ease, background 0.15s ease;
}
.button:hover { transform: translateY(-1px); }
.button-primary { background: var(--b2b-accent); color: #04111d; }
.button-secondary { border: 1px solid rgba(255, 255, 255, 0.2); }
.button-outline { border: 1px solid var(--b2b-accent); color: var(--b2b-accent); }
.button-arrow { transition: transform 0.15s ease; }
.button:hover .button-arrow { transform: translateX(4px); }

/* Hero */
.hero-banner { padding: 96px 0 80px; }
.hero-container {
  max-width: 1140px; margin: 0 auto; padding: 0 24px;
  display: grid; grid-template-columns: 1.2fr 1fr; gap: 48px; align-items: center;
}
.hero-label {
  display: inline-flex; gap: 8px; align-items: center;
  padding: 6px 14px; border-radius: 999px;
  background: rgba(34, 211, 238, 0.1); color: var(--b2b-accent); font-size: 0.85rem;
}
.hero-title { font-size: 3.6rem; line-height: 1.05; margin: 20px 0 12px; }
.title-accent { color: var(--b2b-accent); }
.title-sub { display: block; font-size: 1.6rem; color: var(--b2b-muted); font-weight: 500; }
.hero-subtitle { font-size: 1.3rem; font-weight: 600; margin: 0 0 12px; }
.hero-description { color: var(--b2b-muted); max-width: 56ch; }
.hero-buttons { display: flex; gap: 14px; margin: 28px 0; flex-wrap: wrap; }
.hero-stats { display: flex; gap: 24px; flex-wrap: wrap; color: var(--b2b-muted); font-size: 0.9rem; }
.stat-item { display: inline-flex; gap: 6px; align-items: center; }

/* Terminal mock */
.terminal-window {
  background: #0d1117; border-radius: var(--b2b-radius);
  border: 1px solid rgba(255, 255, 255, 0.08);
  box-shadow: 0 24px 48px rgba(0, 0, 0, 0.35); overflow: hidden;
}
.terminal-header { display: flex; gap: 8px; align-items: center; padding: 10px 14px; background: #161b22; }
.terminal-dot { width: 12px; height: 12px; border-radius: 50%; display: inline-block; }
.terminal-dot.red { background: #ff5f56; }
.terminal-dot.yellow { background: #ffbd2e; }
.terminal-dot.green { background: #27ca40; }
.terminal-title { margin-left: 8px; font-family: var(--b2b-mono); font-size: 0.8rem; color: var(--b2b-muted); }
.terminal-body { padding: 18px; font-family: var(--b2b-mono); font-size: 0.9rem; }
.terminal-line { white-space: pre; overflow: hidden; animation: b2b-type 1.2s steps(30, end) both; }
.terminal-line:nth-child(2) { animation-delay: 1.2s; }
.terminal-line:nth-child(3) { animation-delay: 2.4s; }
.terminal-prompt { color: var(--b2b-accent); margin-right: 8px; }
.terminal-output { color: var(--b2b-muted); }
.terminal-success { color: var(--b2b-success); }
@keyframes b2b-type { from { max-width: 0; } to { max-width: 100%; } }

/* Sections */
.features, .path-section, .philosophy-section, .cta-section { padding: 88px 0; }
.features, .philosophy-section { background: var(--b2b-surface); }
.section-header { text-align: center; margin-bottom: 48px; }
.section-label {
  text-transform: uppercase; letter-spacing: 0.12em;
  font-size: 0.8rem; font-weight: 700; color: var(--b2b-accent);
}
.section-title { font-size: 2.2rem; margin: 10px 0; }
.section-subtitle { color: var(--b2b-muted); max-width: 60ch; margin: 0 auto; }

/* Feature grid */
.features-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; }
.feature-card {
  background: var(--b2b-bg); border-radius: var(--b2b-radius); padding: 28px;
  border: 1px solid rgba(255, 255, 255, 0.06);
}
.feature-svg { height: 160px; width: 100%; }
.feature-title { font-size: 1.2rem; margin: 18px 0 8px; }
.feature-description { color: var(--b2b-muted); margin: 0; }

/* Learning paths */
.path-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; }
.path-card {
  background: var(--b2b-surface); border-radius: var(--b2b-radius); padding: 28px;
  border: 1px solid rgba(255, 255, 255, 0.06);
}
.path-icon { font-size: 2.2rem; }
.path-title { margin: 14px 0 6px; }
.path-description { color: var(--b2b-muted); }
.path-level {
  display: inline-block; margin-top: 12px; padding: 4px 12px; border-radius: 999px;
  font-size: 0.8rem; background: rgba(34, 211, 238, 0.1); color: var(--b2b-accent);
}

/* Philosophy */
.philosophy-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }
.philosophy-text { color: var(--b2b-muted); }
.philosophy-list { list-style: none; padding: 0; }
.philosophy-list li { display: flex; gap: 10px; margin: 10px 0; }
.check-icon { color: var(--b2b-success); font-weight: 700; }
.code-block { background: #0d1117; border-radius: var(--b2b-radius); overflow: hidden; }
.code-header { padding: 10px 16px; background: #161b22; font-family: var(--b2b-mono); font-size: 0.8rem; color: var(--b2b-muted); }
.code-content { margin: 0; padding: 18px; font-family: var(--b2b-mono); font-size: 0.85rem; overflow-x: auto; }

/* Call to action */
.cta-content { text-align: center; max-width: 720px; margin: 0 auto; }
.cta-title { font-size: 2.2rem; margin: 0 0 12px; }
.cta-text { color: var(--b2b-muted); }
.cta-buttons { display: flex; gap: 14px; justify-content: center; margin-top: 28px; flex-wrap: wrap; }

/* Footer */
.footer { padding: 32px 24px; text-align: center; color: var(--b2b-muted); font-size: 0.85rem; border-top: 1px solid rgba(255, 255, 255, 0.06); }

@media (max-width: 960px) {
  .hero-container, .philosophy-grid { grid-template-columns: 1fr; }
  .features-grid, .path-grid { grid-template-columns: 1fr; }
  .hero-title { font-size: 2.6rem; }
}
"#;
