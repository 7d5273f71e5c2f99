//! Problem-level types.

use super::{Block, CodeKind};
use serde::{Deserialize, Serialize};

/// A parsed problem statement.
///
/// Owned by one conversion call; nothing here persists across invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Problem title (from `<title>`, or the `h2` header as fallback)
    pub title: Option<String>,

    /// Execution limits as printed on the page
    pub limits: Option<Limits>,

    /// Statement blocks in document order
    pub blocks: Vec<Block>,
}

impl Problem {
    /// Create a new empty problem.
    pub fn new() -> Self {
        Self {
            title: None,
            limits: None,
            blocks: Vec::new(),
        }
    }

    /// Add a block to the statement.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the statement has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of sample pairs in the statement.
    pub fn sample_count(&self) -> u32 {
        self.blocks
            .iter()
            .filter(|b| {
                matches!(
                    b,
                    Block::Code {
                        kind: CodeKind::SampleInput { .. },
                        ..
                    }
                )
            })
            .count() as u32
    }

    /// Collect sample input/output pairs, matched by pair number.
    ///
    /// An input without a matching output (or vice versa) yields a pair
    /// with the missing side empty.
    pub fn sample_pairs(&self) -> Vec<SamplePair> {
        fn entry(pairs: &mut Vec<SamplePair>, number: u32) -> &mut SamplePair {
            let idx = number as usize - 1;
            while pairs.len() <= idx {
                pairs.push(SamplePair {
                    number: pairs.len() as u32 + 1,
                    input: String::new(),
                    output: String::new(),
                });
            }
            &mut pairs[idx]
        }

        let mut pairs: Vec<SamplePair> = Vec::new();
        for block in &self.blocks {
            if let Block::Code { text, kind } = block {
                match kind {
                    CodeKind::SampleInput { number } => {
                        entry(&mut pairs, *number).input = text.clone();
                    }
                    CodeKind::SampleOutput { number } => {
                        entry(&mut pairs, *number).output = text.clone();
                    }
                    CodeKind::Plain => {}
                }
            }
        }

        pairs
    }

    /// Get plain text content of the whole statement.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Problem {
    fn default() -> Self {
        Self::new()
    }
}

/// Execution limits as printed on the problem page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Time limit string, e.g. "2 sec"
    pub time: String,

    /// Memory limit string, e.g. "1024 MB"
    pub memory: String,
}

/// One sample input/output pair, numbered in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePair {
    /// 1-based pair number
    pub number: u32,

    /// Sample input text
    pub input: String,

    /// Expected output text
    pub output: String,
}
