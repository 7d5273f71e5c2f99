//! # atdown
//!
//! AtCoder problem statement extraction library for Rust.
//!
//! This library converts one AtCoder problem page (HTML) into clean
//! Markdown, selecting a language variant (Japanese/English) when the
//! page embeds both.
//!
//! ## Quick Start
//!
//! ```no_run
//! use atdown::{convert, Language};
//!
//! fn main() -> atdown::Result<()> {
//!     let html = std::fs::read_to_string("problem.html").unwrap();
//!
//!     // Convert the English statement to Markdown
//!     let markdown = convert(&html, Language::En)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Language selection**: extracts exactly the requested variant, never
//!   a silent fallback
//! - **Structure preservation**: headings, constraints, sample pairs in
//!   document order
//! - **Math pass-through**: `<var>` notation preserved as inline LaTeX
//! - **Labeled samples**: fences tagged `sample-input-N` / `sample-output-N`
//! - **JSON output**: the parsed statement model serializes as-is
//!
//! The library never performs I/O; callers supply the HTML text and decide
//! what to do with the returned Markdown.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, CodeKind, Inline, Limits, ListItem, Problem, SamplePair};
pub use parser::{AnchorMode, Language, ParseOptions, StatementParser};
pub use render::{JsonFormat, MarkdownRenderer, RenderOptions};

/// Parse a problem page into a structured statement.
///
/// # Example
///
/// ```no_run
/// use atdown::{parse, Language};
///
/// let html = std::fs::read_to_string("problem.html").unwrap();
/// let problem = parse(&html, Language::Ja).unwrap();
/// println!("samples: {}", problem.sample_count());
/// ```
pub fn parse(html: &str, language: Language) -> Result<Problem> {
    let options = ParseOptions::new().with_language(language);
    StatementParser::with_options(options).parse(html)
}

/// Parse a problem page with custom options.
///
/// # Example
///
/// ```no_run
/// use atdown::{parse_with_options, Language, ParseOptions};
///
/// let html = std::fs::read_to_string("problem.html").unwrap();
/// let options = ParseOptions::new()
///     .with_language(Language::En)
///     .lenient();
/// let problem = parse_with_options(&html, options).unwrap();
/// ```
pub fn parse_with_options(html: &str, options: ParseOptions) -> Result<Problem> {
    StatementParser::with_options(options).parse(html)
}

/// Convert a problem page to Markdown with default rendering.
pub fn convert(html: &str, language: Language) -> Result<String> {
    let problem = parse(html, language)?;
    render::to_markdown(&problem, &RenderOptions::default())
}

/// Convert a problem page with custom parse and render options.
pub fn convert_with_options(
    html: &str,
    parse_options: ParseOptions,
    render_options: &RenderOptions,
) -> Result<String> {
    let problem = parse_with_options(html, parse_options)?;
    render::to_markdown(&problem, render_options)
}

/// Builder for parsing and converting problem pages.
///
/// # Example
///
/// ```no_run
/// use atdown::{Converter, Language};
///
/// let html = std::fs::read_to_string("problem.html").unwrap();
/// let markdown = Converter::new()
///     .language(Language::En)
///     .lenient()
///     .parse(&html)?
///     .to_markdown()?;
/// # Ok::<(), atdown::Error>(())
/// ```
pub struct Converter {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Converter {
    /// Create a new converter builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the statement language.
    pub fn language(mut self, language: Language) -> Self {
        self.parse_options = self.parse_options.with_language(language);
        self
    }

    /// Tolerate statements without sample blocks.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Omit the title heading from the output.
    pub fn without_title(mut self) -> Self {
        self.render_options = self.render_options.with_title(false);
        self
    }

    /// Omit the limits line from the output.
    pub fn without_limits(mut self) -> Self {
        self.render_options = self.render_options.with_limits(false);
        self
    }

    /// Set the unordered list marker character.
    pub fn list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Parse a problem page and return a result wrapper.
    pub fn parse(self, html: &str) -> Result<Extracted> {
        let problem = StatementParser::with_options(self.parse_options).parse(html)?;
        Ok(Extracted {
            problem,
            render_options: self.render_options,
        })
    }

    /// Parse and render Markdown in one step.
    pub fn convert(self, html: &str) -> Result<String> {
        self.parse(html)?.to_markdown()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a problem page.
pub struct Extracted {
    /// The parsed statement
    pub problem: Problem,
    /// Render options to use
    render_options: RenderOptions,
}

impl Extracted {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.problem, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.problem, format)
    }

    /// Get the sample input/output pairs.
    pub fn sample_pairs(&self) -> Vec<SamplePair> {
        self.problem.sample_pairs()
    }

    /// Get the parsed statement.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }
}
