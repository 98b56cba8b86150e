//! Render selected pages of a document, optionally in parallel.

use std::io::Write;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::error::{FacsimileError, Result};
use crate::model::FacsimilePage;
use crate::params::RenderParams;
use crate::render::{PageRenderer, ZoneFailure};
use crate::tei::Facsimile;

/// Options for document rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Markup and layout parameters.
    pub params: RenderParams,

    /// Zero-indexed pages to render. None means all pages.
    pub page_numbers: Option<Vec<usize>>,

    /// Worker threads. None or 1 renders on the calling thread; 0 is rejected.
    pub threads: Option<usize>,
}

/// One rendered page.
#[derive(Debug)]
pub struct RenderedPage {
    /// Zero-based position among the document's pages.
    pub index: usize,
    pub id: Option<String>,
    pub n: Option<String>,
    pub html: String,
    /// Zones left out of `html` because they could not be rendered.
    pub failures: Vec<ZoneFailure>,
}

fn render_one(renderer: &PageRenderer<'_>, index: usize, page: &FacsimilePage<'_, '_>) -> RenderedPage {
    let markup = renderer.render_page(page);
    RenderedPage {
        index,
        id: page.id().map(str::to_string),
        n: page.n().map(str::to_string),
        html: markup.html,
        failures: markup.failures,
    }
}

/// Render pages of a parsed document.
///
/// Results are in page order, whatever the order of `options.page_numbers`
/// or the thread count. Repeated indices render once.
pub fn render_pages(doc: &Facsimile<'_>, options: &RenderOptions) -> Result<Vec<RenderedPage>> {
    options.params.validate()?;
    if options.threads == Some(0) {
        return Err(FacsimileError::InvalidParams(
            "threads must be at least 1".to_string(),
        ));
    }

    let pages = doc.pages();
    let selected: Vec<usize> = match &options.page_numbers {
        Some(nums) => {
            if let Some(&index) = nums.iter().find(|&&i| i >= pages.len()) {
                return Err(FacsimileError::PageOutOfRange {
                    index,
                    count: pages.len(),
                });
            }
            (0..pages.len()).filter(|i| nums.contains(i)).collect()
        }
        None => (0..pages.len()).collect(),
    };

    let renderer = PageRenderer::new(&options.params);
    let threads = options.threads.unwrap_or(1);
    tracing::debug!(pages = selected.len(), threads, "rendering document");

    if threads > 1 && selected.len() > 1 {
        let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
        Ok(pool.install(|| {
            selected
                .par_iter()
                .map(|&i| render_one(&renderer, i, &pages[i]))
                .collect()
        }))
    } else {
        Ok(selected
            .iter()
            .map(|&i| render_one(&renderer, i, &pages[i]))
            .collect())
    }
}

/// Parse a TEI document and render its pages.
pub fn render_document(xml: &str, options: &RenderOptions) -> Result<Vec<RenderedPage>> {
    let doc = Facsimile::parse(xml)?;
    render_pages(&doc, options)
}

/// Render pages of a parsed document and write their markup to `writer`,
/// in page order.
///
/// Zone failures are logged by the renderer and left out of the output.
pub fn render_pages_to_fp<W: Write>(
    doc: &Facsimile<'_>,
    writer: &mut W,
    options: &RenderOptions,
) -> Result<()> {
    for page in render_pages(doc, options)? {
        writer.write_all(page.html.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
