//! Layout transform: absolute pixel boxes to relative overlay styles.
//!
//! OCR coordinates are pixels on the scanned page image. The overlay is
//! drawn on a scaled copy of that image, so positions and sizes are emitted
//! as percentages of the enclosing box. Font sizes are the exception: they
//! are pixels at [`RenderParams::reference_size`], plus a page-height
//! percentage (`data-vhfontsize`) for client-side rescaling.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{FacsimileError, Result};
use crate::model::{BBox, RegionKind, Zone};
use crate::params::RenderParams;

/// CSS properties and `data-*` attributes for one zone, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneStyle {
    pub style: IndexMap<&'static str, String>,
    pub data: IndexMap<&'static str, String>,
}

impl ZoneStyle {
    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.data.is_empty()
    }

    /// Render as HTML attributes: `style="k:v;..." data-k="v" ...`.
    pub fn to_attributes(&self) -> String {
        let mut parts = Vec::with_capacity(1 + self.data.len());
        if !self.style.is_empty() {
            let css: Vec<String> = self
                .style
                .iter()
                .map(|(k, v)| format!("{k}:{v}"))
                .collect();
            parts.push(format!("style=\"{}\"", css.join(";")));
        }
        for (k, v) in &self.data {
            parts.push(format!("data-{k}=\"{v}\""));
        }
        parts.join(" ")
    }
}

impl fmt::Display for ZoneStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_attributes())
    }
}

/// `a` as a percentage of `b`.
fn percent(a: f64, b: f64, property: &'static str) -> Result<f64> {
    let value = a / b * 100.0;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FacsimileError::NonFiniteLayout { property })
    }
}

fn fmt_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Box of the page a zone sits on, rejecting zero-area pages.
fn page_box(zone: &Zone<'_, '_>) -> Result<BBox> {
    let page = zone.require_page()?;
    let bbox = page.bbox()?;
    if bbox.is_degenerate() {
        return Err(FacsimileError::ZeroAreaPage { page: page.label() });
    }
    Ok(bbox)
}

/// Position a box as a percentage of its page.
fn page_relative(style: &mut IndexMap<&'static str, String>, bbox: &BBox, page: &BBox) -> Result<()> {
    style.insert("left", fmt_percent(percent(bbox.ulx, page.width(), "left")?));
    style.insert("top", fmt_percent(percent(bbox.uly, page.height(), "top")?));
    style.insert("width", fmt_percent(percent(bbox.width(), page.width(), "width")?));
    style.insert("height", fmt_percent(percent(bbox.height(), page.height(), "height")?));
    Ok(())
}

/// Compute the overlay style of a zone.
///
/// Lines and image highlights are placed relative to their page, words
/// relative to their enclosing zone. Other region types get no style.
pub fn zone_style(zone: &Zone<'_, '_>, params: &RenderParams) -> Result<ZoneStyle> {
    let mut out = ZoneStyle::default();
    match zone.kind() {
        RegionKind::Line => {
            let page = page_box(zone)?;
            let bbox = zone.bbox()?;
            // pixel font sizes target the reference display size of a page
            let scale = params.reference_size / page.long_edge();

            page_relative(&mut out.style, &bbox, &page)?;
            out.style.insert("text-align", "left".to_string());

            // word zones give a better glyph height than the line box when present
            let glyph_height = zone.avg_word_height().unwrap_or(bbox.height());
            let font_size = glyph_height * scale;
            if !font_size.is_finite() {
                return Err(FacsimileError::NonFiniteLayout { property: "font-size" });
            }
            out.style.insert("font-size", format!("{font_size:.2}px"));

            let vh = percent(bbox.height(), page.height(), "vhfontsize")?;
            out.data.insert("vhfontsize", format!("{vh:.2}"));
        }
        RegionKind::Word => {
            let parent = zone.require_parent()?;
            let parent_box = parent.bbox()?;
            if parent_box.is_degenerate() {
                return Err(FacsimileError::DegenerateZone { zone: parent.label() });
            }
            let bbox = zone.bbox()?;
            out.style.insert(
                "width",
                fmt_percent(percent(bbox.width(), parent_box.width(), "width")?),
            );
            out.style.insert(
                "height",
                fmt_percent(percent(bbox.height(), parent_box.height(), "height")?),
            );
            out.style.insert(
                "left",
                fmt_percent(percent(
                    bbox.ulx - parent_box.ulx,
                    parent_box.width(),
                    "left",
                )?),
            );
        }
        RegionKind::ImageHighlight => {
            let page = page_box(zone)?;
            let bbox = zone.bbox()?;
            page_relative(&mut out.style, &bbox, &page)?;
        }
        RegionKind::Other => {}
    }
    Ok(out)
}
