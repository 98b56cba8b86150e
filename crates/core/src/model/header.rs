//! Header and back-matter records: title statement, bibliographic sources,
//! page graphics and tag definitions.

use indexmap::IndexMap;

use crate::tei::TeiNode;

fn child_text(node: &TeiNode<'_, '_>, local: &str, type_attr: Option<&str>) -> Option<String> {
    node.node()
        .descendants()
        .map(|n| node.with(n))
        .find(|n| match type_attr {
            Some(t) => n.is_tei_typed(local, t),
            None => n.is_tei(local),
        })
        .map(|n| n.text_content())
}

/// `<titleStmt>` of the file description.
#[derive(Debug, Clone, Copy)]
pub struct TitleStatement<'a, 'input> {
    node: TeiNode<'a, 'input>,
}

impl<'a, 'input> TitleStatement<'a, 'input> {
    pub fn new(node: TeiNode<'a, 'input>) -> Self {
        Self { node }
    }

    /// Main title.
    pub fn title(&self) -> Option<String> {
        child_text(&self.node, "title", Some("main"))
    }

    pub fn subtitle(&self) -> Option<String> {
        child_text(&self.node, "title", Some("sub"))
    }
}

/// A `<ref>` with a typed target URL.
#[derive(Debug, Clone, Copy)]
pub struct TeiRef<'a, 'input> {
    node: TeiNode<'a, 'input>,
}

impl<'a, 'input> TeiRef<'a, 'input> {
    pub fn new(node: TeiNode<'a, 'input>) -> Self {
        Self { node }
    }

    pub fn type_name(&self) -> Option<&'a str> {
        self.node.attr("type")
    }

    pub fn target(&self) -> Option<&'a str> {
        self.node.attr("target")
    }
}

/// Bibliographic description of a source.
#[derive(Debug, Clone, Copy)]
pub struct Bibl<'a, 'input> {
    node: TeiNode<'a, 'input>,
}

impl<'a, 'input> Bibl<'a, 'input> {
    pub fn new(node: TeiNode<'a, 'input>) -> Self {
        Self { node }
    }

    pub fn type_name(&self) -> Option<&'a str> {
        self.node.attr("type")
    }

    pub fn title(&self) -> Option<String> {
        self.node.child_named("title").map(|n| n.text_content())
    }

    pub fn date(&self) -> Option<String> {
        self.node.child_named("date").map(|n| n.text_content())
    }

    pub fn author(&self) -> Option<String> {
        self.node.child_named("author").map(|n| n.text_content())
    }

    /// References keyed on their `@type`.
    pub fn references(&self) -> IndexMap<&'a str, TeiRef<'a, 'input>> {
        self.node
            .children_named("ref")
            .map(TeiRef::new)
            .filter_map(|r| r.type_name().map(|t| (t, r)))
            .collect()
    }
}

/// A page image.
#[derive(Debug, Clone, Copy)]
pub struct Graphic<'a, 'input> {
    node: TeiNode<'a, 'input>,
}

impl<'a, 'input> Graphic<'a, 'input> {
    pub fn new(node: TeiNode<'a, 'input>) -> Self {
        Self { node }
    }

    /// Image role, e.g. `page`, `thumbnail`, `small-thumbnail`.
    pub fn rend(&self) -> Option<&'a str> {
        self.node.attr("rend")
    }

    pub fn url(&self) -> Option<&'a str> {
        self.node.attr("url")
    }
}

/// A tag definition from the `tags` interpretation group.
#[derive(Debug, Clone, Copy)]
pub struct Interp<'a, 'input> {
    node: TeiNode<'a, 'input>,
}

impl<'a, 'input> Interp<'a, 'input> {
    pub fn new(node: TeiNode<'a, 'input>) -> Self {
        Self { node }
    }

    pub fn id(&self) -> Option<&'a str> {
        self.node.xml_id()
    }

    /// Display name of the tag.
    pub fn value(&self) -> Option<&'a str> {
        self.node.attr("value")
    }
}
