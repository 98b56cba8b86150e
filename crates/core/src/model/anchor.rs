//! Text highlight anchors.
//!
//! An annotation over transcribed text is stored as a pair of empty
//! `<anchor>` elements, one where the highlight starts and one where it ends:
//!
//! ```xml
//! <anchor xml:id="highlight-start-1234" type="text-annotation-highlight-start"/>
//! ...
//! <anchor xml:id="highlight-end-1234" type="text-annotation-highlight-end"/>
//! ```
//!
//! The pair share the annotation id `1234`, recovered by stripping the
//! marker prefix from `xml:id`.

use crate::tei::TeiNode;

/// `@type` of an anchor that opens a text highlight.
pub const HIGHLIGHT_START_TYPE: &str = "text-annotation-highlight-start";

/// `@type` of an anchor that closes a text highlight.
pub const HIGHLIGHT_END_TYPE: &str = "text-annotation-highlight-end";

const START_PREFIX: &str = "highlight-start-";
const END_PREFIX: &str = "highlight-end-";

/// Which side of a highlight span an anchor marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    Start,
    End,
}

impl AnchorKind {
    /// Classify an anchor `@type` value.
    pub fn from_type(type_attr: &str) -> Option<Self> {
        match type_attr {
            HIGHLIGHT_START_TYPE => Some(Self::Start),
            HIGHLIGHT_END_TYPE => Some(Self::End),
            _ => None,
        }
    }
}

/// Extract the annotation id from an anchor `xml:id`.
///
/// Returns `None` when the id carries neither marker prefix or nothing
/// follows the prefix.
pub fn annotation_id_from_anchor_id(id: &str) -> Option<&str> {
    id.strip_prefix(START_PREFIX)
        .or_else(|| id.strip_prefix(END_PREFIX))
        .filter(|rest| !rest.is_empty())
}

/// A point marker in the transcription.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor<'a, 'input> {
    node: TeiNode<'a, 'input>,
}

impl<'a, 'input> Anchor<'a, 'input> {
    pub fn new(node: TeiNode<'a, 'input>) -> Self {
        Self { node }
    }

    pub fn node(&self) -> TeiNode<'a, 'input> {
        self.node
    }

    pub fn id(&self) -> Option<&'a str> {
        self.node.xml_id()
    }

    /// Raw `@type` value.
    pub fn type_name(&self) -> Option<&'a str> {
        self.node.attr("type")
    }

    /// Highlight side, or `None` for anchors that are not highlight markers.
    pub fn kind(&self) -> Option<AnchorKind> {
        self.type_name().and_then(AnchorKind::from_type)
    }

    pub fn is_start(&self) -> bool {
        self.kind() == Some(AnchorKind::Start)
    }

    pub fn is_end(&self) -> bool {
        self.kind() == Some(AnchorKind::End)
    }

    /// Annotation this anchor belongs to.
    ///
    /// Only highlight markers have one; a marker whose id lacks the expected
    /// prefix yields `None` as well.
    pub fn annotation_id(&self) -> Option<&'a str> {
        self.kind()?;
        annotation_id_from_anchor_id(self.id()?)
    }

    /// Closest text sibling before the anchor.
    pub fn preceding_text(&self) -> Option<&'a str> {
        let mut cur = self.node.node().prev_sibling();
        while let Some(n) = cur {
            if n.is_text() {
                return n.text();
            }
            cur = n.prev_sibling();
        }
        None
    }

    /// First text after the anchor: a following text sibling, or the text
    /// inside a following `<line>` sibling, whichever comes first.
    pub fn following_text(&self) -> Option<&'a str> {
        let mut cur = self.node.node().next_sibling();
        while let Some(n) = cur {
            if n.is_text() {
                return n.text();
            }
            if self.node.with(n).is_tei("line") {
                if let Some(text) = n.children().find(|c| c.is_text()) {
                    return text.text();
                }
            }
            cur = n.next_sibling();
        }
        None
    }
}

impl std::fmt::Display for Anchor<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#<Anchor id={}>", self.id().unwrap_or(""))
    }
}
