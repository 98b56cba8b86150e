//! Page template: the HTML overlay for one facsimile page.

use std::fmt::Write as _;

use html_escape::encode_double_quoted_attribute as esc_attr;

use super::markup::SpanRenderer;
use crate::error::FacsimileError;
use crate::highlight::annotation_id_for;
use crate::layout::zone_style;
use crate::model::{FacsimilePage, Zone};
use crate::params::RenderParams;

/// A zone that could not be rendered and was left out of the page.
#[derive(Debug)]
pub struct ZoneFailure {
    /// `xml:id` of the zone, or a descriptive label when it has none.
    pub zone: String,
    pub error: FacsimileError,
}

/// Rendered page markup plus the zones that were skipped.
#[derive(Debug, Default)]
pub struct PageMarkup {
    pub html: String,
    pub failures: Vec<ZoneFailure>,
}

impl PageMarkup {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders page overlays: lines (or their words) first, then image
/// highlights, each in document order.
#[derive(Debug, Clone, Copy)]
pub struct PageRenderer<'p> {
    params: &'p RenderParams,
    spans: SpanRenderer<'p>,
}

impl<'p> PageRenderer<'p> {
    pub fn new(params: &'p RenderParams) -> Self {
        Self {
            params,
            spans: SpanRenderer::new(params),
        }
    }

    /// Render every line and image highlight of `page`.
    ///
    /// A zone whose style cannot be computed is skipped and reported in
    /// [`PageMarkup::failures`]; its siblings still render.
    pub fn render_page(&self, page: &FacsimilePage<'_, '_>) -> PageMarkup {
        let mut out = PageMarkup::default();
        let page_label = page.as_zone().label();

        for line in page.lines() {
            if let Err(error) = self.render_line(&line, &page_label, &mut out) {
                self.record(&mut out, &page_label, &line, error);
            }
        }
        for zone in page.image_highlight_zones() {
            if let Err(error) = self.render_image_highlight(&zone, &mut out.html) {
                self.record(&mut out, &page_label, &zone, error);
            }
        }

        tracing::debug!(
            page = %page_label,
            bytes = out.html.len(),
            failures = out.failures.len(),
            "rendered page"
        );
        out
    }

    fn record(&self, out: &mut PageMarkup, page: &str, zone: &Zone<'_, '_>, error: FacsimileError) {
        let label = zone.label();
        tracing::warn!(page = %page, zone = %label, error = %error, "skipping zone");
        out.failures.push(ZoneFailure { zone: label, error });
    }

    fn render_line(
        &self,
        line: &Zone<'_, '_>,
        page_label: &str,
        out: &mut PageMarkup,
    ) -> crate::Result<()> {
        let style = zone_style(line, self.params)?;
        let words = line.word_zones();

        let mut class = esc_attr(&self.params.line_class).into_owned();
        if words.is_empty() {
            class.push(' ');
            class.push_str(&esc_attr(&self.params.plain_text_class));
        }

        let mut html = format!("<div class=\"{class}\"");
        if let Some(id) = line.id() {
            let _ = write!(html, " id=\"{}\"", esc_attr(id));
        }
        push_attributes(&mut html, &style.to_attributes());
        html.push('>');

        if words.is_empty() {
            html.push_str(&self.spans.render_zone(line));
        } else {
            for word in &words {
                match self.render_word(word) {
                    Ok(markup) => html.push_str(&markup),
                    Err(error) => self.record(out, page_label, word, error),
                }
            }
        }
        html.push_str("</div>\n");

        out.html.push_str(&html);
        Ok(())
    }

    fn render_word(&self, word: &Zone<'_, '_>) -> crate::Result<String> {
        let style = zone_style(word, self.params)?;
        let mut html = format!(
            "<div class=\"{} {}\"",
            esc_attr(&self.params.word_class),
            esc_attr(&self.params.plain_text_class)
        );
        push_attributes(&mut html, &style.to_attributes());
        html.push('>');
        html.push_str(&self.spans.render_zone(word));
        html.push_str("</div>");
        Ok(html)
    }

    fn render_image_highlight(&self, zone: &Zone<'_, '_>, html: &mut String) -> crate::Result<()> {
        let style = zone_style(zone, self.params)?;
        let _ = write!(
            html,
            "<span class=\"{} {}\" data-annotation-id=\"{}\"",
            esc_attr(&self.params.highlight_class),
            esc_attr(&self.params.image_highlight_class),
            esc_attr(annotation_id_for(zone).unwrap_or(""))
        );
        push_attributes(html, &style.to_attributes());
        html.push_str("></span>\n");
        Ok(())
    }
}

fn push_attributes(html: &mut String, attributes: &str) {
    if !attributes.is_empty() {
        html.push(' ');
        html.push_str(attributes);
    }
}
