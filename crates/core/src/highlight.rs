//! Highlight resolution: which annotations cover a zone.
//!
//! A zone is *fully* highlighted by an annotation when the annotation's
//! start anchor comes before the zone and its end anchor comes after it.
//! Annotations may nest or overlap, so a zone can be covered by several at
//! once. A zone is *partially* highlighted when an anchor sits inside it.
//!
//! Coverage ids are reported in the document order of their start anchors.
//! That order is the nesting order of the rendered wrappers: the annotation
//! opened first is the outermost.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;

use crate::model::{Anchor, RegionKind, Zone};

/// Annotation ids covering the whole zone, earliest-opened first.
///
/// Start or end anchors without a partner on the other side of the zone
/// simply contribute nothing.
pub fn covering_annotation_ids<'a>(zone: &Zone<'a, '_>) -> IndexSet<&'a str> {
    let starts = zone.preceding_start_anchors();
    if starts.is_empty() {
        return IndexSet::new();
    }
    let ends: FxHashSet<&str> = zone
        .following_end_anchors()
        .iter()
        .filter_map(Anchor::annotation_id)
        .collect();

    starts
        .iter()
        .filter_map(Anchor::annotation_id)
        .filter(|id| ends.contains(id))
        .collect()
}

/// True if at least one annotation spans the whole zone.
pub fn is_fully_highlighted(zone: &Zone<'_, '_>) -> bool {
    !covering_annotation_ids(zone).is_empty()
}

/// True if the zone contains at least one anchor.
pub fn is_partially_highlighted(zone: &Zone<'_, '_>) -> bool {
    !zone.anchors().is_empty()
}

/// The single annotation an image highlight zone belongs to.
///
/// Image highlights are identified by their own `xml:id`, less any
/// `highlight-` prefix, not by anchors. Other zones have none.
pub fn annotation_id_for<'a>(zone: &Zone<'a, '_>) -> Option<&'a str> {
    if zone.kind() != RegionKind::ImageHighlight {
        return None;
    }
    zone.id()
        .map(|id| id.strip_prefix("highlight-").unwrap_or(id))
}
