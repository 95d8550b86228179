//! Language tags and their separator tables.

use crate::separator::Separator;
use chunkwise_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Language tag used to pick a separator table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Plain text; size-only splitting without separators
    #[default]
    Default,
    Python,
    Go,
    Html,
    #[serde(rename = "js")]
    JavaScript,
    #[serde(rename = "ts")]
    TypeScript,
    Markdown,
    Json,
}

/// One entry of a separator table: pattern and whether it is a regex.
type TableEntry = (&'static str, bool);

const PYTHON_SEPARATORS: &[TableEntry] = &[
    ("\nclass ", false),
    ("\ndef ", false),
    ("\n\n", false),
    ("\n", false),
    (" ", false),
    ("", false),
];

const GO_SEPARATORS: &[TableEntry] = &[
    ("\nfunc ", false),
    ("\nvar ", false),
    ("\nif ", false),
    ("\n\n", false),
    ("\n", false),
    (" ", false),
    ("", false),
];

const HTML_SEPARATORS: &[TableEntry] = &[
    ("<div", false),
    ("<p", false),
    ("<h1", false),
    ("<br", false),
    ("<table", false),
    ("\n", false),
    ("", false),
];

const JS_SEPARATORS: &[TableEntry] = &[
    ("\nfunction ", false),
    ("\nconst ", false),
    ("\nlet ", false),
    ("\nclass ", false),
    ("\n\n", false),
    ("\n", false),
    (" ", false),
    ("", false),
];

const MARKDOWN_SEPARATORS: &[TableEntry] = &[
    (r"\n#{1,6} ", true),
    (r"\n---+\n", true),
    ("\n", false),
    (" ", false),
    ("", false),
];

const JSON_SEPARATORS: &[TableEntry] = &[("}\n", false), ("", false)];

impl Language {
    /// All supported tags, `Default` first.
    pub fn all() -> &'static [Language] {
        &[
            Language::Default,
            Language::Python,
            Language::Go,
            Language::Html,
            Language::JavaScript,
            Language::TypeScript,
            Language::Markdown,
            Language::Json,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Default => "default",
            Language::Python => "python",
            Language::Go => "go",
            Language::Html => "html",
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Markdown => "markdown",
            Language::Json => "json",
        }
    }

    fn separator_table(&self) -> Option<&'static [TableEntry]> {
        match self {
            Language::Default => None,
            Language::Python => Some(PYTHON_SEPARATORS),
            Language::Go => Some(GO_SEPARATORS),
            Language::Html => Some(HTML_SEPARATORS),
            Language::JavaScript | Language::TypeScript => Some(JS_SEPARATORS),
            Language::Markdown => Some(MARKDOWN_SEPARATORS),
            Language::Json => Some(JSON_SEPARATORS),
        }
    }

    /// Detect the language from a file extension, `Default` when unknown.
    pub fn from_path(path: &Path) -> Language {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Language::Default;
        };

        match ext.to_lowercase().as_str() {
            "py" | "pyi" => Language::Python,
            "go" => Language::Go,
            "html" | "htm" => Language::Html,
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" | "mts" | "cts" => Language::TypeScript,
            "md" | "markdown" => Language::Markdown,
            "json" => Language::Json,
            _ => Language::Default,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "default" | "text" | "plain" => Ok(Language::Default),
            "python" | "py" => Ok(Language::Python),
            "go" | "golang" => Ok(Language::Go),
            "html" => Ok(Language::Html),
            "js" | "javascript" => Ok(Language::JavaScript),
            "ts" | "typescript" => Ok(Language::TypeScript),
            "markdown" | "md" => Ok(Language::Markdown),
            "json" => Ok(Language::Json),
            _ => Err(AppError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Return the coarse-to-fine separators for a language.
///
/// Every table ends with the empty pattern, which matches everywhere.
/// `Language::Default` has no table and fails like an unknown tag; callers
/// wanting plain size-based splitting use `SplitterConfig::for_language`.
pub fn separators_for_language(language: Language) -> AppResult<Vec<Separator>> {
    let table = language
        .separator_table()
        .ok_or_else(|| AppError::UnsupportedLanguage(language.to_string()))?;

    table
        .iter()
        .map(|&(pattern, is_regex)| Separator::new(pattern, is_regex))
        .collect()
}
