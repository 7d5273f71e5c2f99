//! Parsing options and configuration.

use std::fmt;
use std::str::FromStr;

/// Options for parsing a problem page.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Which localized statement variant to extract
    pub language: Language,

    /// How to treat missing structural anchors
    pub anchor_mode: AnchorMode,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the statement language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the anchor mode.
    pub fn with_anchor_mode(mut self, mode: AnchorMode) -> Self {
        self.anchor_mode = mode;
        self
    }

    /// Enable lenient mode (tolerate statements without sample blocks).
    pub fn lenient(mut self) -> Self {
        self.anchor_mode = AnchorMode::Lenient;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            language: Language::Ja,
            anchor_mode: AnchorMode::Strict,
        }
    }
}

/// Localized statement variant to extract.
///
/// AtCoder wraps each variant in a `span.lang-<code>` element inside the
/// task statement container. Exactly one subtree matches per page; a page
/// missing the requested variant fails extraction rather than falling back
/// to whatever language is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Japanese (`span.lang-ja`)
    #[default]
    Ja,
    /// English (`span.lang-en`)
    En,
}

impl Language {
    /// The selector code used on the page, e.g. "ja".
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    /// CSS class of the language wrapper, e.g. "lang-ja".
    pub fn class_name(&self) -> String {
        format!("lang-{}", self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(Language::Ja),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language selector: {other}")),
        }
    }
}

/// How to treat missing structural anchors during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorMode {
    /// Require the statement container and at least one sample block
    #[default]
    Strict,
    /// Tolerate statements without sample blocks (e.g. interactive tasks)
    Lenient,
}
