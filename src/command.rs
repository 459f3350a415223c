//! Declarative command metadata consumed by the renderer.
//!
//! The manifest is trusted structural data: optional fields default to
//! absent so a sparse declaration never fails to load.
use serde::{Deserialize, Serialize};

/// One command's metadata as declared in the manifest.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommandSpec {
    pub id: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<ArgSpec>,
    #[serde(default)]
    pub flags: Vec<FlagSpec>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl CommandSpec {
    /// Positional arguments that appear in help output, declaration order.
    pub fn visible_args(&self) -> impl Iterator<Item = &ArgSpec> {
        self.args.iter().filter(|arg| !arg.hidden)
    }

    /// Flags that appear in help output, declaration order.
    pub fn visible_flags(&self) -> impl Iterator<Item = &FlagSpec> {
        self.flags.iter().filter(|flag| !flag.hidden)
    }

    /// First line of the description. Listings show it; the DESCRIPTION
    /// section strips it so the line is never rendered twice.
    pub fn synopsis(&self) -> Option<&str> {
        self.description
            .as_deref()
            .and_then(|description| description.lines().next())
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
    }
}

/// Usage declaration: a single line or several, each expanded independently.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Usage {
    One(String),
    Many(Vec<String>),
}

impl Usage {
    pub fn lines(&self) -> &[String] {
        match self {
            Usage::One(line) => std::slice::from_ref(line),
            Usage::Many(lines) => lines,
        }
    }
}

/// Positional argument descriptor.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ArgSpec {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub hidden: bool,
}

/// Flag descriptor. `help_label` overrides the generated dash section of the
/// label verbatim; value flags still get their `=VALUE` tail.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FlagSpec {
    pub name: String,
    #[serde(default)]
    pub short: Option<char>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub help_label: Option<String>,
    #[serde(flatten)]
    pub kind: FlagKind,
}

/// Boolean/value split as a tagged variant rather than a class hierarchy.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlagKind {
    Boolean {
        #[serde(default)]
        allow_no: bool,
    },
    Value {
        #[serde(default)]
        default: Option<String>,
        #[serde(default)]
        options: Vec<String>,
    },
}
