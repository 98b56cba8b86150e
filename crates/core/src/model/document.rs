//! Document-level accessors on [`Facsimile`].

use indexmap::IndexMap;

use super::header::{Bibl, Interp, TitleStatement};
use super::note::Note;
use super::page::FacsimilePage;
use super::zone::Zone;
use crate::error::{FacsimileError, Result};
use crate::tei::{Facsimile, TeiNode};

/// Page surfaces of every `<facsimile>` under `root`, in document order.
pub(crate) fn pages_under<'a, 'input>(root: TeiNode<'a, 'input>) -> Vec<FacsimilePage<'a, 'input>> {
    root.descendants_named("facsimile")
        .flat_map(|facsimile| facsimile.children_named("surface"))
        .filter(|surface| surface.attr("type") == Some("page"))
        .map(FacsimilePage::new)
        .collect()
}

impl<'input> Facsimile<'input> {
    fn file_desc(&self) -> Option<TeiNode<'_, 'input>> {
        self.root()
            .descendant_named("teiHeader")?
            .child_named("fileDesc")
    }

    pub fn title_statement(&self) -> Option<TitleStatement<'_, 'input>> {
        self.file_desc()?
            .child_named("titleStmt")
            .map(TitleStatement::new)
    }

    /// Source descriptions keyed on `@type` (e.g. `original`, `digital`).
    pub fn source_bibl(&self) -> IndexMap<&str, Bibl<'_, 'input>> {
        let Some(source_desc) = self.file_desc().and_then(|d| d.child_named("sourceDesc")) else {
            return IndexMap::new();
        };
        source_desc
            .children_named("bibl")
            .map(Bibl::new)
            .filter_map(|b| b.type_name().map(|t| (t, b)))
            .collect()
    }

    /// Page surfaces, in document order.
    pub fn pages(&self) -> Vec<FacsimilePage<'_, 'input>> {
        pages_under(self.root())
    }

    /// Page at a 0-based index.
    pub fn page(&self, index: usize) -> Result<FacsimilePage<'_, 'input>> {
        let pages = self.pages();
        let count = pages.len();
        pages
            .into_iter()
            .nth(index)
            .ok_or(FacsimileError::PageOutOfRange { index, count })
    }

    /// Element with the given `xml:id`.
    pub fn element_by_id(&self, id: &str) -> Option<TeiNode<'_, 'input>> {
        let root = self.root();
        root.node()
            .descendants()
            .map(|n| root.with(n))
            .find(|n| n.xml_id() == Some(id))
    }

    /// Zone or page surface with the given `xml:id`.
    pub fn zone_by_id(&self, id: &str) -> Option<Zone<'_, 'input>> {
        self.element_by_id(id)
            .filter(|n| n.is_tei("zone") || n.is_tei("surface"))
            .map(Zone::new)
    }

    /// Annotation notes, in document order.
    pub fn annotations(&self) -> Vec<Note<'_, 'input>> {
        self.root()
            .descendants_named("note")
            .filter(|n| n.attr("type") == Some("annotation"))
            .map(Note::new)
            .collect()
    }

    /// Tag definitions from `back/interpGrp[@type="tags"]`, keyed on `xml:id`.
    pub fn tags(&self) -> IndexMap<&str, Interp<'_, 'input>> {
        self.root()
            .descendants_named("back")
            .flat_map(|back| back.children_named("interpGrp"))
            .filter(|grp| grp.attr("type") == Some("tags"))
            .flat_map(|grp| grp.children_named("interp"))
            .map(Interp::new)
            .filter_map(|i| i.id().map(|id| (id, i)))
            .collect()
    }
}
