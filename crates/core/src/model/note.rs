//! Annotation notes and their targets.

use std::sync::LazyLock;

use regex::Regex;

use super::document::pages_under;
use super::page::FacsimilePage;
use crate::error::{FacsimileError, Result};
use crate::tei::TeiNode;

static RANGE_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#range\((?<inner>.*)\)$").unwrap());

/// Decomposed note target.
///
/// A text selection is stored as `#range(#start_id, #end_id)`; an image
/// highlight as a single `#id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpan {
    pub start: String,
    pub end: Option<String>,
}

impl TargetSpan {
    /// Parse a note `@target` value.
    pub fn parse(target: &str) -> Result<Self> {
        let invalid = || FacsimileError::InvalidTarget(target.to_string());
        let target = target.trim();
        if target.starts_with("#range") {
            let caps = RANGE_TARGET.captures(target).ok_or_else(invalid)?;
            let (start, end) = caps["inner"].split_once(',').ok_or_else(invalid)?;
            let start = strip_ref(start);
            let end = strip_ref(end);
            if start.is_empty() || end.is_empty() {
                return Err(invalid());
            }
            Ok(Self {
                start: start.to_string(),
                end: Some(end.to_string()),
            })
        } else {
            let start = strip_ref(target);
            if start.is_empty() {
                return Err(invalid());
            }
            Ok(Self {
                start: start.to_string(),
                end: None,
            })
        }
    }

    pub fn is_range(&self) -> bool {
        self.end.is_some()
    }
}

fn strip_ref(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('#').unwrap_or(s)
}

/// A `<note type="annotation">`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note<'a, 'input> {
    node: TeiNode<'a, 'input>,
}

impl<'a, 'input> Note<'a, 'input> {
    pub fn new(node: TeiNode<'a, 'input>) -> Self {
        Self { node }
    }

    pub fn id(&self) -> Option<&'a str> {
        self.node.xml_id()
    }

    /// Annotator (`@resp`).
    pub fn author(&self) -> Option<&'a str> {
        self.node.attr("resp")
    }

    pub fn target(&self) -> Option<&'a str> {
        self.node.attr("target")
    }

    pub fn ana(&self) -> Option<&'a str> {
        self.node.attr("ana")
    }

    /// Note body in markdown.
    pub fn markdown(&self) -> Option<String> {
        self.node
            .descendants_named("code")
            .find(|n| n.attr("lang") == Some("markdown"))
            .map(|n| n.text_content())
    }

    /// Tag ids referenced from `@ana`.
    pub fn tags(&self) -> Vec<&'a str> {
        self.ana()
            .map(|ana| {
                ana.split_whitespace()
                    .map(|s| s.strip_prefix('#').unwrap_or(s))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Annotation id, with the `annotation-` prefix removed.
    pub fn annotation_id(&self) -> Option<&'a str> {
        self.id().map(|id| id.strip_prefix("annotation-").unwrap_or(id))
    }

    pub fn is_range_target(&self) -> bool {
        self.target().is_some_and(|t| t.trim().starts_with("#range"))
    }

    /// Parsed `@target`.
    pub fn target_span(&self) -> Result<TargetSpan> {
        let target = self.target().ok_or_else(|| FacsimileError::MissingAttribute {
            element: self.id().unwrap_or("note").to_string(),
            attribute: "target",
        })?;
        TargetSpan::parse(target)
    }

    /// Page holding the start of this note's target, with its index among
    /// all pages.
    pub fn annotated_page(&self, span: &TargetSpan) -> Option<(usize, FacsimilePage<'a, 'input>)> {
        let root = self.node.with(self.node.node().document().root());
        pages_under(root).into_iter().enumerate().find(|(_, page)| {
            page.node()
                .node()
                .descendants()
                .any(|n| self.node.with(n).xml_id() == Some(span.start.as_str()))
        })
    }
}
