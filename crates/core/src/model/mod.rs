//! Typed views over TEI facsimile elements.
//!
//! Every type here wraps a tree node and re-reads its values on each call;
//! nothing is cached, so views are `Copy` and safe to share across threads.

pub mod anchor;
pub mod document;
pub mod header;
pub mod note;
pub mod page;
pub mod zone;

pub use anchor::{Anchor, AnchorKind, HIGHLIGHT_END_TYPE, HIGHLIGHT_START_TYPE};
pub use header::{Bibl, Graphic, Interp, TeiRef, TitleStatement};
pub use note::{Note, TargetSpan};
pub use page::FacsimilePage;
pub use zone::{BBox, IMAGE_HIGHLIGHT_TYPE, LINE_TYPES, RegionKind, WORD_TYPE, Zone};
