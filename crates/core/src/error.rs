//! Error types for facsimile document rendering.

use thiserror::Error;

/// Primary error type for TEI facsimile operations.
#[derive(Error, Debug)]
pub enum FacsimileError {
    #[error("xml parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("<{element}> is missing required attribute @{attribute}")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    #[error("attribute @{attribute} is not a number: {value:?}")]
    InvalidNumber {
        attribute: &'static str,
        value: String,
    },

    #[error("zone {zone} has no enclosing {ancestor}")]
    MissingAncestor {
        zone: String,
        ancestor: &'static str,
    },

    #[error("page {page} has zero width or height")]
    ZeroAreaPage { page: String },

    #[error("zone {zone} has zero width or height and cannot position its children")]
    DegenerateZone { zone: String },

    #[error("layout value for {property} is not finite")]
    NonFiniteLayout { property: &'static str },

    #[error("invalid annotation target: {0}")]
    InvalidTarget(String),

    #[error("no page contains annotation target {0}")]
    AnnotatedPageNotFound(String),

    #[error("page index {index} out of range ({count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    #[error("invalid render parameters: {0}")]
    InvalidParams(String),

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Convenience Result type alias for FacsimileError.
pub type Result<T> = std::result::Result<T, FacsimileError>;
