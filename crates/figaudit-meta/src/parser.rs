//! Component tree parser.
//!
//! Walks the export line by line. Top-level frames and symbols become
//! elements; qualifying lines one level below an open frame are counted as
//! that frame's variants.

use std::collections::HashMap;

use crate::element::{Element, ElementKind, TagLine};

/// Tags counted as variants when they sit one level below a frame.
const VARIANT_TAGS: [&str; 3] = ["symbol", "instance", "frame"];

/// Indentation layout of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Whitespace characters per nesting level
    pub indent_width: usize,

    /// Nesting depth of component candidates (the document root is depth 0)
    pub top_level_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            top_level_depth: 1,
        }
    }
}

impl ParseOptions {
    /// Top-level and child indentation, or `None` when either overflows.
    pub fn checked_indents(&self) -> Option<(usize, usize)> {
        let top = self.indent_width.checked_mul(self.top_level_depth)?;
        let child = top.checked_add(self.indent_width)?;
        Some((top, child))
    }

    /// Indentation of component candidate lines.
    ///
    /// Saturates on overflow, which no real line can reach.
    pub fn top_level_indent(&self) -> usize {
        self.indent_width.saturating_mul(self.top_level_depth)
    }

    /// Indentation of lines counted as variants.
    pub fn child_indent(&self) -> usize {
        self.top_level_indent().saturating_add(self.indent_width)
    }
}

/// Result of parsing an export.
#[derive(Debug, Clone, Default)]
pub struct ParsedExport {
    /// Top-level elements in source order
    pub elements: Vec<Element>,

    /// Top-level frame/symbol lines dropped for a missing name or id
    pub skipped: usize,

    /// Number of lines scanned
    pub lines: usize,
}

/// Variant counting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan<'a> {
    /// Not inside a countable frame
    Idle,
    /// Inside an open top-level frame
    Frame { id: &'a str, count: u32 },
}

impl<'a> Scan<'a> {
    /// Record the running count, if any, and return to idle.
    fn flush(self, counts: &mut HashMap<&'a str, u32>) -> Self {
        if let Scan::Frame { id, count } = self {
            counts.insert(id, count);
        }
        Scan::Idle
    }
}

/// Parse the indented export text into top-level elements.
///
/// Parsing is lenient: lines that cannot form an element are skipped and
/// never produce an error.
pub fn parse_elements(text: &str, options: &ParseOptions) -> ParsedExport {
    let top = options.top_level_indent();
    let child = options.child_indent();

    let mut parsed = ParsedExport::default();
    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut scan = Scan::Idle;

    for raw in text.split('\n') {
        parsed.lines += 1;
        let line = TagLine::parse(raw);

        if line.indent == top {
            if let Some(kind) = line.tag.and_then(ElementKind::from_tag) {
                match line.to_element() {
                    Some(element) => parsed.elements.push(element),
                    None => {
                        parsed.skipped += 1;
                        tracing::debug!(
                            "Skipping {} on line {} without name or id: {}",
                            kind,
                            parsed.lines,
                            raw.trim()
                        );
                    }
                }
            }

            // Any top-level line ends the current frame.
            scan = scan.flush(&mut counts);
            if line.opens("frame") && !line.self_closing {
                if let Some(id) = line.id {
                    scan = Scan::Frame { id, count: 0 };
                }
            }
        } else if line.indent == child {
            if let Scan::Frame { ref mut count, .. } = scan {
                if VARIANT_TAGS.iter().any(|tag| line.opens(tag)) {
                    *count += 1;
                }
            }
        }
    }

    scan.flush(&mut counts);

    for element in &mut parsed.elements {
        element.variants = counts.get(element.id.as_str()).copied().unwrap_or(0);
    }

    parsed
}
