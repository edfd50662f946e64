use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Invalid scan pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Placeholder table inserted by the `table` style
pub const TABLE_TEMPLATE: &str = "| Column 1 | Column 2 | Column 3 |\n| -------- | -------- | -------- |\n| Text     | Text     | Text     |";

/// Structural description of one markdown construct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub prefix: String,
    pub suffix: String,
    /// Prefix used instead of `prefix` when the selection spans several lines
    pub block_prefix: String,
    /// Suffix used instead of `suffix` when the selection spans several lines
    pub block_suffix: String,
    /// Apply per line when the selection spans several lines
    pub multiline: bool,
    pub ordered_list: bool,
    pub unordered_list: bool,
    /// Move surrounding whitespace of the selection outside the markers
    pub trim_first: bool,
    /// Separate the construct from neighbouring text by a blank line
    pub surround_with_newlines: bool,
    /// Insert a space before the prefix when it would touch a word
    pub prefix_space: bool,
    /// Regex recognising text that should fill the placeholder directly
    pub scan_for: Option<String>,
    /// Placeholder token inside `suffix` that gets selected after wrapping
    pub replace_next: Option<String>,
}

impl StyleSpec {
    /// Inline construct wrapped in `prefix` and `suffix`
    pub fn wrap(prefix: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            ..Self::default()
        }
    }

    /// Construct that only has a prefix
    pub fn prefixed(prefix: &str) -> Self {
        Self::wrap(prefix, "")
    }

    pub fn is_list(&self) -> bool {
        self.ordered_list || self.unordered_list
    }

    /// Compile `scan_for`, if set
    pub fn scan_pattern(&self) -> Result<Option<Regex>, StyleError> {
        self.scan_for
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| StyleError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .transpose()
    }

    fn trimmed(mut self) -> Self {
        self.trim_first = true;
        self
    }

    fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    fn surrounded(mut self) -> Self {
        self.surround_with_newlines = true;
        self
    }

    fn spaced(mut self) -> Self {
        self.prefix_space = true;
        self
    }

    fn with_placeholder(mut self, token: &str, scan_for: &str) -> Self {
        self.replace_next = Some(token.to_string());
        self.scan_for = Some(scan_for.to_string());
        self
    }
}

/// Named style specs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: BTreeMap<String, StyleSpec>,
}

/// Names of the styles every registry starts with
pub const BUILTIN_STYLE_NAMES: [&str; 19] = [
    "header-1",
    "header-2",
    "header-3",
    "header-4",
    "header-5",
    "header-6",
    "bold",
    "italic",
    "quote",
    "code",
    "link",
    "image",
    "unordered-list",
    "ordered-list",
    "task-list",
    "mention",
    "ref",
    "strikethrough",
    "table",
];

fn build_builtin() -> StyleRegistry {
    let mut styles = BTreeMap::new();
    let mut add = |name: &str, spec: StyleSpec| {
        styles.insert(name.to_string(), spec);
    };

    for level in 1..=6 {
        add(
            &format!("header-{level}"),
            StyleSpec::prefixed(&format!("{} ", "#".repeat(level))),
        );
    }
    add("bold", StyleSpec::wrap("**", "**").trimmed());
    add("italic", StyleSpec::wrap("*", "*").trimmed());
    add("strikethrough", StyleSpec::wrap("~~", "~~").trimmed());
    add("quote", StyleSpec::prefixed("> ").multiline().surrounded());
    add(
        "code",
        StyleSpec {
            block_prefix: "```".to_string(),
            block_suffix: "```".to_string(),
            ..StyleSpec::wrap("`", "`")
        },
    );
    add(
        "link",
        StyleSpec::wrap("[", "](url)").with_placeholder("url", "https?://"),
    );
    add(
        "image",
        StyleSpec::wrap("![", "](url)").with_placeholder("url", "https?://"),
    );
    add(
        "unordered-list",
        StyleSpec {
            unordered_list: true,
            ..StyleSpec::prefixed("- ").multiline()
        },
    );
    add(
        "ordered-list",
        StyleSpec {
            ordered_list: true,
            ..StyleSpec::prefixed("1. ").multiline()
        },
    );
    add("task-list", StyleSpec::prefixed("- [ ] ").multiline().surrounded());
    add("mention", StyleSpec::prefixed("@").spaced());
    add("ref", StyleSpec::prefixed("#").spaced());
    add(
        "table",
        StyleSpec::prefixed(TABLE_TEMPLATE)
            .surrounded()
            .trimmed()
            .spaced(),
    );

    StyleRegistry { styles }
}

impl StyleRegistry {
    /// The built-in registry, created on first use and shared afterwards
    pub fn builtin_ref() -> &'static StyleRegistry {
        static BUILTIN: OnceLock<StyleRegistry> = OnceLock::new();
        BUILTIN.get_or_init(build_builtin)
    }

    /// An owned copy of the built-in registry, ready for overrides
    pub fn builtin() -> Self {
        Self::builtin_ref().clone()
    }

    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Result<&StyleSpec, StyleError> {
        self.styles
            .get(name)
            .ok_or_else(|| StyleError::UnknownStyle(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Add or replace a style, rejecting specs whose scan pattern does not compile
    pub fn register(&mut self, name: impl Into<String>, spec: StyleSpec) -> Result<(), StyleError> {
        spec.scan_pattern()?;
        self.styles.insert(name.into(), spec);
        Ok(())
    }

    /// Register every entry of `overrides`, stopping at the first invalid one
    pub fn extend<I>(&mut self, overrides: I) -> Result<(), StyleError>
    where
        I: IntoIterator<Item = (String, StyleSpec)>,
    {
        for (name, spec) in overrides {
            log::debug!("Registering style override {name}");
            self.register(name, spec)?;
        }
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
