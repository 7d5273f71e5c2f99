//! HTML statement parsing module.

mod options;
mod statement;

pub use options::{AnchorMode, Language, ParseOptions};
pub use statement::StatementParser;
