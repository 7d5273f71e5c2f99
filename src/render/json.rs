//! JSON rendering for parsed statements.

use crate::error::{Error, Result};
use crate::model::Problem;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a parsed statement to JSON.
pub fn to_json(problem: &Problem, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(problem),
        JsonFormat::Compact => serde_json::to_string(problem),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
