//! Statement model types.
//!
//! This module defines the intermediate representation that bridges HTML
//! parsing and Markdown rendering: one [`Problem`] holding an ordered
//! sequence of classified [`Block`]s.

mod block;
mod problem;

pub use block::{Block, CodeKind, Inline, ListItem};
pub use problem::{Limits, Problem, SamplePair};
