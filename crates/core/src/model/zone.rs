//! Rectangular facsimile zones: pages, text lines, words and image highlights.

use roxmltree::Node;

use super::anchor::{Anchor, HIGHLIGHT_END_TYPE, HIGHLIGHT_START_TYPE};
use crate::error::{FacsimileError, Result};
use crate::tei::{TeiNode, axis};

/// `@type` values of text line zones.
pub const LINE_TYPES: [&str; 2] = ["textLine", "line"];

/// `@type` of word zones.
pub const WORD_TYPE: &str = "string";

/// `@type` of image annotation highlight zones.
pub const IMAGE_HIGHLIGHT_TYPE: &str = "image-annotation-highlight";

/// Region type tag of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Line,
    Word,
    ImageHighlight,
    Other,
}

impl RegionKind {
    pub fn from_type(type_attr: Option<&str>) -> Self {
        match type_attr {
            Some(t) if LINE_TYPES.contains(&t) => Self::Line,
            Some(WORD_TYPE) => Self::Word,
            Some(IMAGE_HIGHLIGHT_TYPE) => Self::ImageHighlight,
            _ => Self::Other,
        }
    }
}

/// Absolute pixel box, upper-left and lower-right corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub ulx: f64,
    pub uly: f64,
    pub lrx: f64,
    pub lry: f64,
}

impl BBox {
    pub const fn new(ulx: f64, uly: f64, lrx: f64, lry: f64) -> Self {
        Self { ulx, uly, lrx, lry }
    }

    pub fn width(&self) -> f64 {
        self.lrx - self.ulx
    }

    pub fn height(&self) -> f64 {
        self.lry - self.uly
    }

    /// Size of the longer edge.
    pub fn long_edge(&self) -> f64 {
        self.width().max(self.height())
    }

    /// True when either dimension is zero (or inverted).
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// A zone (or page surface) in the facsimile.
///
/// `parent` and `page` are lookups through the tree, never owned links.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone<'a, 'input> {
    node: TeiNode<'a, 'input>,
}

impl<'a, 'input> Zone<'a, 'input> {
    pub fn new(node: TeiNode<'a, 'input>) -> Self {
        Self { node }
    }

    pub fn node(&self) -> TeiNode<'a, 'input> {
        self.node
    }

    pub fn id(&self) -> Option<&'a str> {
        self.node.xml_id()
    }

    pub fn n(&self) -> Option<&'a str> {
        self.node.attr("n")
    }

    /// Raw `@type` value.
    pub fn type_name(&self) -> Option<&'a str> {
        self.node.attr("type")
    }

    pub fn kind(&self) -> RegionKind {
        RegionKind::from_type(self.type_name())
    }

    pub fn href(&self) -> Option<&'a str> {
        self.node.xlink_attr("href")
    }

    /// Human-readable label for diagnostics.
    pub fn label(&self) -> String {
        match self.id() {
            Some(id) => id.to_string(),
            None => format!(
                "<{} type={:?}>",
                self.node.local_name(),
                self.type_name().unwrap_or("")
            ),
        }
    }

    fn coordinate(&self, attribute: &'static str) -> Result<f64> {
        let raw = self
            .node
            .attr(attribute)
            .ok_or_else(|| FacsimileError::MissingAttribute {
                element: self.label(),
                attribute,
            })?;
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(FacsimileError::InvalidNumber {
                attribute,
                value: raw.to_string(),
            }),
        }
    }

    /// Pixel box from `@ulx`, `@uly`, `@lrx` and `@lry`.
    pub fn bbox(&self) -> Result<BBox> {
        Ok(BBox::new(
            self.coordinate("ulx")?,
            self.coordinate("uly")?,
            self.coordinate("lrx")?,
            self.coordinate("lry")?,
        ))
    }

    pub fn width(&self) -> Result<f64> {
        Ok(self.bbox()?.width())
    }

    pub fn height(&self) -> Result<f64> {
        Ok(self.bbox()?.height())
    }

    pub fn long_edge(&self) -> Result<f64> {
        Ok(self.bbox()?.long_edge())
    }

    /// Transcribed text of the zone's `<line>` or `<w>` child.
    pub fn text(&self) -> Option<String> {
        self.node
            .node()
            .children()
            .map(|n| self.node.with(n))
            .find(|n| n.is_tei("line") || n.is_tei("w"))
            .map(|n| n.text_content())
    }

    /// Word zones nested anywhere inside this zone.
    pub fn word_zones(&self) -> Vec<Zone<'a, 'input>> {
        self.node
            .descendants_named("zone")
            .filter(|n| n.attr("type") == Some(WORD_TYPE))
            .map(Zone::new)
            .collect()
    }

    /// Nearest enclosing zone.
    pub fn parent(&self) -> Option<Zone<'a, 'input>> {
        self.node.ancestor_where(|n| n.is_tei("zone")).map(Zone::new)
    }

    /// Enclosing page surface.
    pub fn page(&self) -> Option<Zone<'a, 'input>> {
        self.node
            .ancestor_where(|n| n.is_tei_typed("surface", "page"))
            .map(Zone::new)
    }

    pub(crate) fn require_parent(&self) -> Result<Zone<'a, 'input>> {
        self.parent().ok_or_else(|| FacsimileError::MissingAncestor {
            zone: self.label(),
            ancestor: "zone",
        })
    }

    pub(crate) fn require_page(&self) -> Result<Zone<'a, 'input>> {
        self.page().ok_or_else(|| FacsimileError::MissingAncestor {
            zone: self.label(),
            ancestor: "page surface",
        })
    }

    /// Mean height of the word zones in this zone.
    ///
    /// Words without a usable box are left out; `None` when no word has one.
    pub fn avg_word_height(&self) -> Option<f64> {
        let heights: Vec<f64> = self
            .word_zones()
            .iter()
            .filter_map(|w| w.height().ok())
            .collect();
        if heights.is_empty() {
            return None;
        }
        Some(heights.iter().sum::<f64>() / heights.len() as f64)
    }

    /// Anchors inside this zone, in document order.
    pub fn anchors(&self) -> Vec<Anchor<'a, 'input>> {
        self.node.descendants_named("anchor").map(Anchor::new).collect()
    }

    /// Highlight start anchors anywhere before this zone, in document order.
    ///
    /// When the zone wraps `<w>` elements the search runs from the last of
    /// them, so start anchors sitting inside the zone ahead of its words
    /// are included too.
    pub fn preceding_start_anchors(&self) -> Vec<Anchor<'a, 'input>> {
        let origin = self.word_elements().last().copied().unwrap_or(self.node.node());
        self.anchors_on(axis::preceding(origin, |n| self.is_anchor(n, HIGHLIGHT_START_TYPE)))
    }

    /// Highlight end anchors anywhere after this zone, in document order.
    ///
    /// Mirrors [`Self::preceding_start_anchors`], searching from the first
    /// `<w>` element when there is one.
    pub fn following_end_anchors(&self) -> Vec<Anchor<'a, 'input>> {
        let origin = self.word_elements().first().copied().unwrap_or(self.node.node());
        self.anchors_on(axis::following(origin, |n| self.is_anchor(n, HIGHLIGHT_END_TYPE)))
    }

    fn word_elements(&self) -> Vec<Node<'a, 'input>> {
        self.node.children_named("w").map(|n| n.node()).collect()
    }

    fn is_anchor(&self, node: Node<'a, 'input>, type_attr: &str) -> bool {
        self.node.with(node).is_tei_typed("anchor", type_attr)
    }

    fn anchors_on(&self, nodes: Vec<Node<'a, 'input>>) -> Vec<Anchor<'a, 'input>> {
        nodes
            .into_iter()
            .map(|n| Anchor::new(self.node.with(n)))
            .collect()
    }
}
