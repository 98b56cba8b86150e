//! High-level API for rendering whole documents.
//!
//! # Example
//!
//! ```ignore
//! use facsimile_core::api::{RenderOptions, render_document};
//!
//! let xml = std::fs::read_to_string("volume.xml")?;
//! for page in render_document(&xml, &RenderOptions::default())? {
//!     println!("{}", page.html);
//! }
//! ```

pub mod front_matter;
pub mod high_level;

pub use front_matter::{
    AnnotationFrontMatter, PageFrontMatter, PageNumbering, TagRecord, tag_records,
};
pub use high_level::{
    RenderOptions, RenderedPage, render_document, render_pages, render_pages_to_fp,
};
