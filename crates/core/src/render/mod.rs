//! Markup rendering for zones and pages.

pub mod markup;
pub mod page;

pub use markup::SpanRenderer;
pub use page::{PageMarkup, PageRenderer, ZoneFailure};
