//! Data model for assembled help documents.

/// One label/description row within a section. The description may embed
/// newlines; each one forces a line break during layout. `indent_label`
/// shifts the label two extra columns while keeping the description column
/// shared with the rest of the list.
#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub(super) label: String,
    pub(super) description: String,
    pub(super) indent_label: bool,
}

impl Entry {
    pub(super) fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Entry {
            label: label.into(),
            description: description.into(),
            indent_label: false,
        }
    }
}

/// Section body: literal text, or rows for the column renderer.
pub(super) enum SectionBody {
    Text(String),
    Entries(Vec<Entry>),
}

/// A named block of the rendered document.
pub(super) struct Section {
    pub(super) heading: &'static str,
    pub(super) body: SectionBody,
}
