//! Section builders for command help documents.
//!
//! Each builder turns one slice of command metadata into a section, or into
//! nothing when the metadata is absent, so empty sections never reach the
//! document.
use super::model::{Entry, Section, SectionBody};
use crate::command::{ArgSpec, CommandSpec, FlagKind, FlagSpec};

const BIN_TOKEN: &str = "{bin}";
const COMMAND_TOKEN: &str = "{command}";

/// USAGE is always present: declared lines when the metadata has them, a
/// synthesized `<id> [ARG..]` line otherwise.
pub(super) fn usage_section(spec: &CommandSpec, bin: &str) -> Section {
    let lines: Vec<String> = match &spec.usage {
        Some(usage) => usage
            .lines()
            .iter()
            .map(|line| expand_template(line, bin, &spec.id))
            .collect(),
        None => vec![default_usage(spec)],
    };
    let body = lines
        .iter()
        .map(|line| format!("$ {bin} {line}").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    Section {
        heading: "USAGE",
        body: SectionBody::Text(body),
    }
}

fn expand_template(line: &str, bin: &str, id: &str) -> String {
    line.replace(BIN_TOKEN, bin).replace(COMMAND_TOKEN, id)
}

fn default_usage(spec: &CommandSpec) -> String {
    let mut parts = vec![spec.id.clone()];
    for arg in spec.visible_args() {
        let name = arg.name.to_uppercase();
        if arg.required {
            parts.push(name);
        } else {
            parts.push(format!("[{name}]"));
        }
    }
    parts.join(" ")
}

pub(super) fn arguments_section(spec: &CommandSpec) -> Option<Section> {
    let entries: Vec<Entry> = spec.visible_args().map(arg_entry).collect();
    if entries.is_empty() {
        return None;
    }
    Some(Section {
        heading: "ARGUMENTS",
        body: SectionBody::Entries(entries),
    })
}

fn arg_entry(arg: &ArgSpec) -> Entry {
    let mut parts = Vec::new();
    if !arg.options.is_empty() {
        parts.push(format!("({})", arg.options.join("|")));
    }
    if let Some(default) = &arg.default {
        parts.push(format!("[default: {default}]"));
    }
    if let Some(description) = &arg.description {
        if !description.is_empty() {
            parts.push(description.clone());
        }
    }
    Entry::new(arg.name.to_uppercase(), parts.join(" "))
}

pub(super) fn options_section(spec: &CommandSpec) -> Option<Section> {
    let entries: Vec<Entry> = spec.visible_flags().map(flag_entry).collect();
    if entries.is_empty() {
        return None;
    }
    Some(Section {
        heading: "OPTIONS",
        body: SectionBody::Entries(entries),
    })
}

fn flag_entry(flag: &FlagSpec) -> Entry {
    Entry::new(flag_label(flag), flag_description(flag))
}

fn flag_label(flag: &FlagSpec) -> String {
    let mut label = match &flag.help_label {
        Some(custom) => custom.clone(),
        None => {
            let mut parts = Vec::new();
            if let Some(short) = flag.short {
                parts.push(format!("-{short}"));
            }
            let long = match &flag.kind {
                FlagKind::Boolean { allow_no: true } => format!("--[no-]{}", flag.name),
                _ => format!("--{}", flag.name),
            };
            parts.push(long);
            parts.join(", ")
        }
    };
    if let FlagKind::Value { options, .. } = &flag.kind {
        let placeholder = if options.is_empty() {
            flag.name.to_uppercase()
        } else {
            options.join("|")
        };
        label.push('=');
        label.push_str(&placeholder);
    }
    label
}

fn flag_description(flag: &FlagSpec) -> String {
    let mut parts = Vec::new();
    if flag.required {
        parts.push("(required)".to_string());
    }
    if let FlagKind::Value {
        default: Some(default),
        ..
    } = &flag.kind
    {
        parts.push(format!("[default: {default}]"));
    }
    if let Some(description) = &flag.description {
        if !description.is_empty() {
            parts.push(description.clone());
        }
    }
    parts.join(" ")
}

/// The first description line is the synopsis shown by listings; only the
/// remainder belongs here.
pub(super) fn description_section(spec: &CommandSpec) -> Option<Section> {
    let description = spec.description.as_deref()?;
    let body = description
        .lines()
        .skip(1)
        .collect::<Vec<_>>()
        .join("\n");
    if body.trim().is_empty() {
        return None;
    }
    Some(Section {
        heading: "DESCRIPTION",
        body: SectionBody::Text(body),
    })
}

pub(super) fn aliases_section(spec: &CommandSpec, bin: &str) -> Option<Section> {
    if spec.aliases.is_empty() {
        return None;
    }
    let body = spec
        .aliases
        .iter()
        .map(|alias| format!("$ {bin} {alias}"))
        .collect::<Vec<_>>()
        .join("\n");
    Some(Section {
        heading: "ALIASES",
        body: SectionBody::Text(body),
    })
}

pub(super) fn examples_section(spec: &CommandSpec) -> Option<Section> {
    if spec.examples.is_empty() {
        return None;
    }
    Some(Section {
        heading: "EXAMPLES",
        body: SectionBody::Text(spec.examples.join("\n")),
    })
}
