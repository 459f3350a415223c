//! Deterministic help renderer for command metadata.
//!
//! Rendering is a pure function of (metadata, width): sections assemble in a
//! fixed order, every entry list gets a single layout decision, and the
//! output is byte-stable across repeated calls.
use crate::command::CommandSpec;

mod layout;
mod model;
mod sections;

use model::{Section, SectionBody};

/// Width used when the caller cannot supply a terminal width.
pub const DEFAULT_WIDTH: usize = 80;

/// Render-time configuration. Width comes from the caller; the renderer
/// never inspects the terminal itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    width: usize,
}

impl RenderConfig {
    /// A zero width cannot be laid out; it falls back to the default rather
    /// than erroring.
    pub fn new(width: usize) -> Self {
        if width == 0 {
            tracing::warn!(fallback = DEFAULT_WIDTH, "width out of range");
            return RenderConfig {
                width: DEFAULT_WIDTH,
            };
        }
        RenderConfig { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: DEFAULT_WIDTH,
        }
    }
}

/// Render the full help document for one command.
pub fn render_command(spec: &CommandSpec, bin: &str, config: RenderConfig) -> String {
    let sections = [
        Some(sections::usage_section(spec, bin)),
        sections::arguments_section(spec),
        sections::options_section(spec),
        sections::description_section(spec),
        sections::aliases_section(spec, bin),
        sections::examples_section(spec),
    ];

    sections
        .into_iter()
        .flatten()
        .filter_map(|section| render_section(&section, config.width()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_section(section: &Section, width: usize) -> Option<String> {
    let body = match &section.body {
        SectionBody::Text(text) => indent_text(text),
        SectionBody::Entries(entries) => layout::render_entries(entries, width),
    };
    if body.is_empty() {
        return None;
    }
    Some(format!("{}\n{}", section.heading, body))
}

fn indent_text(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
