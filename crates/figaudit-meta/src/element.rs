//! Elements of a metadata export and the line tokenizer that finds them.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<(\w+)").expect("Invalid tag regex"));

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)name="([^"]+)""#).expect("Invalid name regex"));

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)id="([^"]+)""#).expect("Invalid id regex"));

/// Kind of a top-level element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Container node, usually a component set
    Frame,
    /// Reusable component node
    Symbol,
}

impl ElementKind {
    /// Map a tag word to an element kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "frame" => Some(Self::Frame),
            "symbol" => Some(Self::Symbol),
            _ => None,
        }
    }

    /// Tag word as it appears in the export.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frame => "frame",
            Self::Symbol => "symbol",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level component candidate extracted from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Display name
    pub name: String,

    /// Node identifier (e.g. "40006598:72259")
    pub id: String,

    /// Frame or symbol
    pub kind: ElementKind,

    /// Whether the element line closes itself (no children)
    pub self_closing: bool,

    /// Number of qualifying children directly below a frame
    pub variants: u32,
}

/// One tokenized line of the export.
///
/// Indentation is the number of leading whitespace characters. A whitespace
/// only line has an indentation equal to its length and no tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLine<'a> {
    /// Leading whitespace width
    pub indent: usize,

    /// Tag word of an opening tag (`frame` for `<frame ...>`)
    pub tag: Option<&'a str>,

    /// Value of the `name` attribute
    pub name: Option<&'a str>,

    /// Value of the `id` attribute
    pub id: Option<&'a str>,

    /// Whether the line ends with `/>`
    pub self_closing: bool,
}

impl<'a> TagLine<'a> {
    /// Tokenize a single line.
    pub fn parse(line: &'a str) -> Self {
        let body = line.trim_start();
        let indent = line[..line.len() - body.len()].chars().count();

        let capture = |re: &Regex| re.captures(body).and_then(|c| c.get(1)).map(|m| m.as_str());

        Self {
            indent,
            tag: capture(&*TAG_RE),
            name: capture(&*NAME_RE),
            id: capture(&*ID_RE),
            self_closing: body.trim_end().ends_with("/>"),
        }
    }

    /// Check whether the line opens a tag with the given word.
    pub fn opens(&self, tag: &str) -> bool {
        self.tag == Some(tag)
    }

    /// Build an element if this line is a named frame or symbol.
    pub fn to_element(&self) -> Option<Element> {
        let kind = self.tag.and_then(ElementKind::from_tag)?;
        Some(Element {
            name: self.name?.to_string(),
            id: self.id?.to_string(),
            kind,
            self_closing: self.self_closing,
            variants: 0,
        })
    }
}
