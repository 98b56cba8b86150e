//! Rendering parameters.

use crate::error::{FacsimileError, Result};

/// Canonical display size, in pixels, of the longer edge of a single page.
pub const REFERENCE_SIZE: f64 = 1000.0;

/// Parameters for overlay rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    /// Display size the pixel font sizes are scaled to. The longer edge of
    /// each page maps onto this many pixels.
    pub reference_size: f64,

    /// Class on every text highlight wrapper.
    pub highlight_class: String,

    /// Extra class on image highlight boxes.
    pub image_highlight_class: String,

    /// Class on line containers.
    pub line_class: String,

    /// Class on word containers.
    pub word_class: String,

    /// Class marking an element whose content is the OCR text itself.
    pub plain_text_class: String,

    /// Wrap rendered text in `{% raw %}`/`{% endraw %}` so Liquid templates
    /// pass it through untouched.
    pub liquid_raw: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            reference_size: REFERENCE_SIZE,
            highlight_class: "annotator-hl".to_string(),
            image_highlight_class: "image-annotation-highlight".to_string(),
            line_class: "ocr-line".to_string(),
            word_class: "ocr-zone".to_string(),
            plain_text_class: "ocrtext".to_string(),
            liquid_raw: false,
        }
    }
}

impl RenderParams {
    pub fn with_reference_size(mut self, reference_size: f64) -> Self {
        self.reference_size = reference_size;
        self
    }

    pub fn with_liquid_raw(mut self, liquid_raw: bool) -> Self {
        self.liquid_raw = liquid_raw;
        self
    }

    /// Check that the parameters can produce finite layout values.
    pub fn validate(&self) -> Result<()> {
        if !self.reference_size.is_finite() || self.reference_size <= 0.0 {
            return Err(FacsimileError::InvalidParams(format!(
                "reference_size must be a positive number, got {}",
                self.reference_size
            )));
        }
        Ok(())
    }
}
