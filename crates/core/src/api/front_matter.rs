//! Front-matter records for static-site page and annotation documents.
//!
//! These are plain serializable values; writing them out is left to the
//! caller.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{FacsimileError, Result};
use crate::model::{FacsimilePage, Note};
use crate::tei::Facsimile;

/// How printed page numbers map onto facsimile pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageNumbering {
    /// Facsimile page number that carries printed page 1. Earlier pages are
    /// labelled as front matter.
    pub page_one: Option<u32>,
}

/// Front matter of a volume page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFrontMatter {
    pub sort_order: u32,
    pub tei_id: Option<String>,
    pub annotation_count: usize,
    /// Image URLs keyed on their `@rend`.
    pub images: IndexMap<String, String>,
    pub title: String,
    pub number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

impl PageFrontMatter {
    pub fn build(page: &FacsimilePage<'_, '_>, numbering: PageNumbering) -> Result<Self> {
        let page_number = page.number()?;
        let images = page
            .images()
            .iter()
            .filter_map(|img| Some((img.rend()?.to_string(), img.url()?.to_string())))
            .collect();

        let mut front_matter = Self {
            sort_order: page_number,
            tei_id: page.id().map(str::to_string),
            annotation_count: page.annotation_count(),
            images,
            title: format!("Page {page_number}"),
            number: page_number,
            short_label: None,
            permalink: None,
        };

        if let Some(page_one) = numbering.page_one {
            if page_number < page_one {
                front_matter.title = format!("Front {page_number}");
                front_matter.short_label = Some("f.".to_string());
                front_matter.permalink = Some(format!("/pages/front-{page_number}/"));
            } else {
                let adjusted = page_number - page_one + 1;
                front_matter.title = format!("Page {adjusted}");
                front_matter.number = adjusted;
                front_matter.permalink = Some(format!("/pages/{adjusted}/"));
            }
        }
        Ok(front_matter)
    }
}

/// Front matter of an annotation document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationFrontMatter {
    pub annotation_id: Option<String>,
    pub author: Option<String>,
    pub tei_target: String,
    pub annotated_page: Option<String>,
    pub page_index: usize,
    pub target: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_target: Option<String>,
    /// Note body, written as the annotation document's content.
    pub markdown: Option<String>,
}

impl AnnotationFrontMatter {
    pub fn build(note: &Note<'_, '_>) -> Result<Self> {
        let span = note.target_span()?;
        let (page_index, page) = note
            .annotated_page(&span)
            .ok_or_else(|| FacsimileError::AnnotatedPageNotFound(span.start.clone()))?;

        Ok(Self {
            annotation_id: note.annotation_id().map(str::to_string),
            author: note.author().map(str::to_string),
            tei_target: note.target().unwrap_or_default().to_string(),
            annotated_page: page.id().map(str::to_string),
            page_index,
            target: span.start,
            tags: note.tags().into_iter().map(str::to_string).collect(),
            end_target: span.end,
            markdown: note.markdown(),
        })
    }
}

/// A tag's display record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRecord {
    pub name: String,
}

/// Tag records keyed on tag id.
pub fn tag_records(doc: &Facsimile<'_>) -> IndexMap<String, TagRecord> {
    doc.tags()
        .into_iter()
        .map(|(id, interp)| {
            let name = interp.value().unwrap_or_default().to_string();
            (id.to_string(), TagRecord { name })
        })
        .collect()
}
