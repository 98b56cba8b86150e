//! facsimile - annotation highlighting and overlay rendering for TEI
//! facsimile documents.
//!
//! A TEI facsimile pairs page images with OCR zones (lines, words) carrying
//! pixel coordinates. Annotations are stored either as start/end anchor
//! pairs around transcribed text or as image highlight zones. This crate
//! resolves which annotations cover each zone and renders every page as an
//! HTML overlay positioned in percentages over the scaled page image.

pub mod api;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod model;
pub mod params;
pub mod render;
pub mod tei;

pub use api::high_level;
pub use error::{FacsimileError, Result};
pub use params::RenderParams;
pub use tei::{Facsimile, Namespaces};
