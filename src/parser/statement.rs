//! Statement extraction from an AtCoder problem page.
//!
//! The page embeds every language variant of the statement inside
//! `div#task-statement`, one `span.lang-<code>` wrapper per language.
//! Extraction selects the requested wrapper and walks its `<section>`
//! elements in document order, classifying child blocks by tag.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::model::{Block, CodeKind, Inline, Limits, ListItem, Problem};

use super::{AnchorMode, ParseOptions};

/// Parser for one problem page.
pub struct StatementParser {
    options: ParseOptions,
}

impl StatementParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a problem page into a structured [`Problem`].
    ///
    /// Fails when the statement container is missing, when the requested
    /// language variant is absent, or (in strict mode) when the statement
    /// contains no sample blocks. Pure function of its input; the parsed
    /// tree is discarded on return.
    pub fn parse(&self, html: &str) -> Result<Problem> {
        let doc = Html::parse_document(html);

        let mut problem = Problem::new();
        problem.title = extract_title(&doc);
        problem.limits = extract_limits(&doc);

        let statement_sel = Selector::parse("div#task-statement").unwrap();
        let container = doc
            .select(&statement_sel)
            .next()
            .ok_or(Error::MissingStatement)?;

        // Requested language absent is a hard error; falling back to
        // another variant would silently produce the wrong statement.
        let lang_sel =
            Selector::parse(&format!("span.{}", self.options.language.class_name())).unwrap();
        let subtree = container
            .select(&lang_sel)
            .next()
            .ok_or_else(|| Error::LanguageNotFound(self.options.language.to_string()))?;

        let mut walker = BlockWalker::new();
        let section_sel = Selector::parse("section").unwrap();
        let sections: Vec<_> = subtree.select(&section_sel).collect();
        if sections.is_empty() {
            walker.walk(subtree);
        } else {
            for section in sections {
                walker.walk(section);
            }
        }
        problem.blocks = walker.into_blocks();

        if self.options.anchor_mode == AnchorMode::Strict && problem.sample_count() == 0 {
            return Err(Error::MissingSamples);
        }

        Ok(problem)
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks statement sections, classifying child elements into blocks.
struct BlockWalker {
    blocks: Vec<Block>,
    input_count: u32,
    output_count: u32,
    last_heading: Option<String>,
    sample_input_re: Regex,
    sample_output_re: Regex,
    subscript_re: Regex,
}

impl BlockWalker {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            input_count: 0,
            output_count: 0,
            last_heading: None,
            sample_input_re: Regex::new(r"^(入力例|Sample Input)").unwrap(),
            sample_output_re: Regex::new(r"^(出力例|Sample Output)").unwrap(),
            subscript_re: Regex::new(r"_(\w+)").unwrap(),
        }
    }

    fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    fn walk(&mut self, element: ElementRef) {
        for child in element.children() {
            let Some(el) = ElementRef::wrap(child) else {
                continue;
            };
            match el.value().name() {
                "h2" | "h3" | "h4" | "h5" | "h6" => self.push_heading(el),
                "p" => self.push_paragraph(el),
                "ul" | "ol" => self.push_list(el),
                "pre" => self.push_code(el),
                "div" => self.walk(el),
                _ => {}
            }
        }
    }

    fn push_heading(&mut self, el: ElementRef) {
        let text = normalize_ws(&element_text(el)).trim().to_string();
        if text.is_empty() {
            return;
        }
        // Source depth minus one: the problem title owns level 1.
        let depth = el.value().name().as_bytes()[1] - b'0';
        let level = depth.saturating_sub(1).clamp(1, 6);
        self.last_heading = Some(text.clone());
        self.blocks.push(Block::Heading { text, level });
    }

    fn push_paragraph(&mut self, el: ElementRef) {
        let text = normalize_ws(&element_text(el)).trim().to_string();
        if text.contains("配点") || text.contains("Score") {
            log::debug!("score line: {}", text);
            self.blocks.push(Block::Score { text });
            return;
        }
        let runs = trim_runs(self.inline_runs(el));
        if !runs.is_empty() {
            self.blocks.push(Block::Paragraph { content: runs });
        }
    }

    fn push_list(&mut self, el: ElementRef) {
        let items = self.list_items(el);
        if !items.is_empty() {
            self.blocks.push(Block::List { items });
        }
    }

    fn push_code(&mut self, el: ElementRef) {
        let text = element_text(el).trim().to_string();
        if text.is_empty() {
            return;
        }
        let kind = self.classify_code();
        log::debug!("pre block under {:?} classified as {:?}", self.last_heading, kind);
        self.blocks.push(Block::Code { text, kind });
    }

    /// Classify a `pre` block by the nearest preceding heading and assign
    /// the next pair number for its kind.
    fn classify_code(&mut self) -> CodeKind {
        let heading = self.last_heading.as_deref().unwrap_or("");
        if self.sample_input_re.is_match(heading) {
            self.input_count += 1;
            CodeKind::SampleInput {
                number: self.input_count,
            }
        } else if self.sample_output_re.is_match(heading) {
            self.output_count += 1;
            CodeKind::SampleOutput {
                number: self.output_count,
            }
        } else {
            CodeKind::Plain
        }
    }

    /// Convert an element's children into inline runs.
    ///
    /// Nested lists are skipped here; the list walker picks them up as
    /// child items.
    fn inline_runs(&self, element: ElementRef) -> Vec<Inline> {
        let mut runs = Vec::new();
        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                let t = normalize_ws(text);
                if !t.is_empty() {
                    runs.push(Inline::Text(t));
                }
                continue;
            }
            let Some(el) = ElementRef::wrap(child) else {
                continue;
            };
            match el.value().name() {
                "var" => runs.push(Inline::Math(self.latex_math(&element_text(el)))),
                "code" => runs.push(Inline::Code(element_text(el).trim().to_string())),
                "strong" => runs.push(Inline::Strong(
                    normalize_ws(&element_text(el)).trim().to_string(),
                )),
                "em" => runs.push(Inline::Em(
                    normalize_ws(&element_text(el)).trim().to_string(),
                )),
                "ul" | "ol" => {}
                "br" => runs.push(Inline::Text(" ".to_string())),
                _ => runs.extend(self.inline_runs(el)),
            }
        }
        runs
    }

    /// Normalize `<var>` content to LaTeX: bare subscripts get braces,
    /// the markup convention itself passes through.
    fn latex_math(&self, text: &str) -> String {
        let trimmed = normalize_ws(text).trim().to_string();
        self.subscript_re.replace_all(&trimmed, "_{$1}").into_owned()
    }

    fn list_items(&self, list: ElementRef) -> Vec<ListItem> {
        let mut items = Vec::new();
        for child in list.children() {
            let Some(li) = ElementRef::wrap(child) else {
                continue;
            };
            if li.value().name() != "li" {
                continue;
            }
            let mut item = ListItem::new(trim_runs(self.inline_runs(li)));
            for sub in li.children() {
                let Some(el) = ElementRef::wrap(sub) else {
                    continue;
                };
                if matches!(el.value().name(), "ul" | "ol") {
                    item.children.extend(self.list_items(el));
                }
            }
            if !item.content.is_empty() || !item.children.is_empty() {
                items.push(item);
            }
        }
        items
    }
}

/// Extract the problem title from `<title>`, falling back to the page
/// header `span.h2`.
fn extract_title(doc: &Html) -> Option<String> {
    let title_sel = Selector::parse("title").unwrap();
    if let Some(el) = doc.select(&title_sel).next() {
        let text = normalize_ws(&element_text(el)).trim().to_string();
        if !text.is_empty() {
            return Some(text);
        }
    }

    let h2_sel = Selector::parse("span.h2").unwrap();
    doc.select(&h2_sel)
        .next()
        .map(|el| normalize_ws(&element_text(el)).trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Extract the time/memory limits line, in either page language.
fn extract_limits(doc: &Html) -> Option<Limits> {
    let p_sel = Selector::parse("p").unwrap();
    let ja_re =
        Regex::new(r"実行時間制限[：:]\s*(\d+(?:\.\d+)?\s*sec).*メモリ制限[：:]\s*(\d+\s*\w+)")
            .unwrap();
    let en_re =
        Regex::new(r"Time\s+Limit[：:]\s*(\d+(?:\.\d+)?\s*sec).*Memory\s+Limit[：:]\s*(\d+\s*\w+)")
            .unwrap();

    for el in doc.select(&p_sel) {
        let text = normalize_ws(&element_text(el));
        if !text.contains("実行時間制限") && !text.contains("Time Limit") {
            continue;
        }
        if let Some(caps) = ja_re.captures(&text).or_else(|| en_re.captures(&text)) {
            return Some(Limits {
                time: caps[1].trim().to_string(),
                memory: caps[2].trim().to_string(),
            });
        }
    }
    None
}

fn element_text(el: ElementRef) -> String {
    el.text().collect()
}

/// Collapse whitespace runs to single spaces, keeping word boundaries.
fn normalize_ws(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_ws = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(c);
            in_ws = false;
        }
    }
    out
}

/// Drop leading/trailing whitespace from the run sequence.
fn trim_runs(mut runs: Vec<Inline>) -> Vec<Inline> {
    if let Some(Inline::Text(first)) = runs.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(Inline::Text(last)) = runs.last_mut() {
        *last = last.trim_end().to_string();
    }
    runs.retain(|r| !matches!(r, Inline::Text(t) if t.is_empty()));
    runs
}
