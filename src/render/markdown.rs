//! Markdown rendering for parsed statements.

use crate::error::Result;
use crate::model::{Block, CodeKind, Inline, ListItem, Problem};

use super::RenderOptions;

/// Convert a parsed statement to Markdown.
pub fn to_markdown(problem: &Problem, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(problem)
}

/// Markdown renderer.
///
/// Each block type maps to a fixed template; blocks are joined with blank
/// lines, so identical input always yields byte-identical output.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a statement to Markdown.
    pub fn render(&self, problem: &Problem) -> Result<String> {
        let mut parts: Vec<String> = Vec::new();

        if self.options.include_title {
            if let Some(ref title) = problem.title {
                parts.push(format!("# {}", title));
            }
        }

        if self.options.include_limits {
            if let Some(ref limits) = problem.limits {
                parts.push(format!(
                    "**Time Limit:** {}\n**Memory Limit:** {}",
                    limits.time, limits.memory
                ));
            }
        }

        for block in &problem.blocks {
            parts.push(self.render_block(block));
        }

        Ok(parts.join("\n\n").trim().to_string())
    }

    fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Heading { text, level } => {
                format!("{} {}", "#".repeat(*level as usize), text)
            }
            Block::Paragraph { content } => render_inline(content).trim().to_string(),
            Block::Score { text } => format!("**{}**", text),
            Block::Code { text, kind } => {
                format!("```{}\n{}\n```", fence_label(kind), text)
            }
            Block::List { items } => {
                let mut lines = Vec::new();
                self.render_list_items(items, 0, &mut lines);
                lines.join("\n")
            }
        }
    }

    fn render_list_items(&self, items: &[ListItem], level: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(level);
        for item in items {
            if !item.content.is_empty() {
                lines.push(format!(
                    "{}{} {}",
                    indent,
                    self.options.list_marker,
                    render_inline(&item.content).trim()
                ));
            }
            self.render_list_items(&item.children, level + 1, lines);
        }
    }
}

/// Fence info string for a code block: sample blocks are labeled by kind
/// and pair number, other blocks stay unlabeled.
fn fence_label(kind: &CodeKind) -> String {
    match kind {
        CodeKind::Plain => String::new(),
        CodeKind::SampleInput { number } => format!("sample-input-{}", number),
        CodeKind::SampleOutput { number } => format!("sample-output-{}", number),
    }
}

fn render_inline(content: &[Inline]) -> String {
    let mut out = String::new();
    for run in content {
        match run {
            Inline::Text(t) => out.push_str(t),
            Inline::Math(m) => {
                out.push('$');
                out.push_str(m);
                out.push('$');
            }
            Inline::Code(c) => {
                out.push('`');
                out.push_str(c);
                out.push('`');
            }
            Inline::Strong(s) => {
                out.push_str("**");
                out.push_str(s);
                out.push_str("**");
            }
            Inline::Em(e) => {
                out.push('*');
                out.push_str(e);
                out.push('*');
            }
        }
    }
    out
}
