//! Facsimile page surfaces.

use indexmap::IndexMap;

use super::anchor::HIGHLIGHT_START_TYPE;
use super::header::Graphic;
use super::zone::{BBox, IMAGE_HIGHLIGHT_TYPE, LINE_TYPES, WORD_TYPE, Zone};
use crate::error::{FacsimileError, Result};
use crate::tei::TeiNode;

/// A `<surface type="page">` with its images, text lines and highlights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacsimilePage<'a, 'input> {
    node: TeiNode<'a, 'input>,
}

impl<'a, 'input> FacsimilePage<'a, 'input> {
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

    /// `@n` as a page number.
    pub fn number(&self) -> Result<u32> {
        let raw = self.n().ok_or_else(|| FacsimileError::MissingAttribute {
            element: self.as_zone().label(),
            attribute: "n",
        })?;
        raw.trim()
            .parse::<u32>()
            .map_err(|_| FacsimileError::InvalidNumber {
                attribute: "n",
                value: raw.to_string(),
            })
    }

    /// The page surface viewed as a zone, for its pixel box.
    pub fn as_zone(&self) -> Zone<'a, 'input> {
        Zone::new(self.node)
    }

    pub fn bbox(&self) -> Result<BBox> {
        self.as_zone().bbox()
    }

    /// Page images, in document order.
    pub fn images(&self) -> Vec<Graphic<'a, 'input>> {
        self.node.children_named("graphic").map(Graphic::new).collect()
    }

    /// Page images keyed on `@rend`; a repeated rend keeps the last image.
    pub fn images_by_type(&self) -> IndexMap<&'a str, Graphic<'a, 'input>> {
        let mut images = IndexMap::new();
        for image in self.images() {
            if let Some(rend) = image.rend() {
                images.insert(rend, image);
            }
        }
        images
    }

    /// Text highlights started on this page plus image highlights.
    pub fn annotation_count(&self) -> usize {
        let text = self
            .node
            .descendants_named("anchor")
            .filter(|n| n.attr("type") == Some(HIGHLIGHT_START_TYPE))
            .count();
        let image = self
            .node
            .descendants_named("zone")
            .filter(|n| n.attr("type") == Some(IMAGE_HIGHLIGHT_TYPE))
            .count();
        text + image
    }

    /// Text line zones, in document order.
    pub fn lines(&self) -> Vec<Zone<'a, 'input>> {
        self.zones_where(|t| LINE_TYPES.contains(&t))
    }

    /// Word zones, in document order.
    pub fn word_zones(&self) -> Vec<Zone<'a, 'input>> {
        self.zones_where(|t| t == WORD_TYPE)
    }

    /// Image annotation highlights placed directly on the page.
    pub fn image_highlight_zones(&self) -> Vec<Zone<'a, 'input>> {
        self.node
            .children_named("zone")
            .filter(|n| n.attr("type") == Some(IMAGE_HIGHLIGHT_TYPE))
            .map(Zone::new)
            .collect()
    }

    fn zones_where<F>(&self, pred: F) -> Vec<Zone<'a, 'input>>
    where
        F: Fn(&str) -> bool,
    {
        self.node
            .descendants_named("zone")
            .filter(|n| n.attr("type").is_some_and(&pred))
            .map(Zone::new)
            .collect()
    }
}
