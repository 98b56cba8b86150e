//! Span rendering: highlight wrappers around zone text.

use std::borrow::Cow;

use crate::highlight::covering_annotation_ids;
use crate::model::{AnchorKind, Zone};
use crate::params::RenderParams;

const CLOSE: &str = "</span>";

fn esc_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

fn esc_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Emits highlight wrappers and annotated text for zones.
#[derive(Debug, Clone, Copy)]
pub struct SpanRenderer<'p> {
    params: &'p RenderParams,
}

impl<'p> SpanRenderer<'p> {
    pub fn new(params: &'p RenderParams) -> Self {
        Self { params }
    }

    /// Opening wrapper for one annotation.
    pub fn open_highlight(&self, annotation_id: &str) -> String {
        format!(
            "<span class=\"{}\" data-annotation-id=\"{}\">",
            esc_attr(&self.params.highlight_class),
            esc_attr(annotation_id)
        )
    }

    /// Opening wrappers for every annotation covering the zone, outermost
    /// first. A zone with no coverage still gets one plain `<span>`.
    pub fn begin_markup(&self, zone: &Zone<'_, '_>) -> String {
        self.begin_for(&covering_ids(zone))
    }

    /// Closers matching [`Self::begin_markup`], innermost first.
    pub fn end_markup(&self, zone: &Zone<'_, '_>) -> String {
        self.end_for(&covering_ids(zone))
    }

    fn begin_for(&self, ids: &[&str]) -> String {
        if ids.is_empty() {
            return "<span>".to_string();
        }
        ids.iter().map(|id| self.open_highlight(id)).collect()
    }

    fn end_for(&self, ids: &[&str]) -> String {
        CLOSE.repeat(ids.len().max(1))
    }

    /// Zone text with wrappers inserted at each anchor it contains.
    ///
    /// A zone whose first anchor is an end marker is inside a highlight
    /// that opened before it, so a wrapper is opened ahead of its text.
    /// Anchors without a usable annotation id keep their text but get no
    /// wrapper.
    pub fn rendered_text(&self, zone: &Zone<'_, '_>) -> String {
        let anchors = zone.anchors();
        if anchors.is_empty() {
            return zone
                .text()
                .map(|t| esc_text(&t).into_owned())
                .unwrap_or_default();
        }

        let mut out = String::new();
        for (index, anchor) in anchors.iter().enumerate() {
            let annotation_id = anchor.annotation_id();
            if anchor.kind().is_some() && annotation_id.is_none() {
                tracing::warn!(
                    anchor = anchor.id().unwrap_or(""),
                    zone = %zone.label(),
                    "highlight anchor has malformed id; wrapper omitted"
                );
            }

            if index == 0 {
                if let (Some(AnchorKind::End), Some(id)) = (anchor.kind(), annotation_id) {
                    out.push_str(&self.open_highlight(id));
                }
                if let Some(text) = anchor.preceding_text() {
                    out.push_str(&esc_text(text));
                }
            }

            match (anchor.kind(), annotation_id) {
                (Some(AnchorKind::Start), Some(id)) => out.push_str(&self.open_highlight(id)),
                (Some(AnchorKind::End), Some(_)) => out.push_str(CLOSE),
                _ => {}
            }

            if let Some(text) = anchor.following_text() {
                out.push_str(&esc_text(text));
            }
        }
        out
    }

    /// Full markup for a zone: begin wrappers, annotated text, end wrappers.
    ///
    /// Wrappers of annotations covering the whole zone surround the
    /// partial-highlight wrappers from [`Self::rendered_text`].
    pub fn render_zone(&self, zone: &Zone<'_, '_>) -> String {
        let ids = covering_ids(zone);
        let text = self.rendered_text(zone);
        let mut out = self.begin_for(&ids);
        if self.params.liquid_raw {
            out.push_str("{% raw %}");
            out.push_str(&text);
            out.push_str("{% endraw %}");
        } else {
            out.push_str(&text);
        }
        out.push_str(&self.end_for(&ids));
        out
    }
}

fn covering_ids<'a>(zone: &Zone<'a, '_>) -> Vec<&'a str> {
    covering_annotation_ids(zone).into_iter().collect()
}
