//! Error types for the atdown library.

use thiserror::Error;

/// Result type alias for atdown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting a problem statement.
///
/// Extraction either fully succeeds or fails with one of these; there is
/// no partial output.
#[derive(Error, Debug)]
pub enum Error {
    /// The page has no task statement container.
    #[error("statement container not found in document")]
    MissingStatement,

    /// The requested language variant is not present on the page.
    #[error("no statement variant for language \"{0}\"")]
    LanguageNotFound(String),

    /// The statement contains no sample blocks (strict mode only).
    #[error("no sample input/output blocks found in statement")]
    MissingSamples,

    /// Error during rendering (Markdown, JSON).
    #[error("rendering error: {0}")]
    Render(String),
}
