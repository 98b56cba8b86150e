//! TEI document access over a parsed `roxmltree` tree.
//!
//! The tree itself is owned by [`Facsimile`]; every model type in
//! [`crate::model`] is a cheap [`TeiNode`] view that re-derives its values
//! from the tree on each call.

pub mod axis;

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::Result;

/// TEI P5 namespace.
pub const TEI_NAMESPACE: &str = "http://www.tei-c.org/ns/1.0";

/// XLink namespace, used by `xlink:href` on zones.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Namespace configuration used when selecting TEI elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    /// Namespace URI that TEI elements must carry.
    pub tei: String,
    /// Namespace URI for `href` links on zones.
    pub xlink: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            tei: TEI_NAMESPACE.to_string(),
            xlink: XLINK_NAMESPACE.to_string(),
        }
    }
}

/// A parsed TEI facsimile document.
///
/// The document is immutable after parsing, so views into it can be shared
/// freely across threads.
pub struct Facsimile<'input> {
    doc: Document<'input>,
    ns: Namespaces,
}

impl<'input> Facsimile<'input> {
    /// Parse a TEI document using the standard namespaces.
    pub fn parse(text: &'input str) -> Result<Self> {
        Self::parse_with(text, Namespaces::default())
    }

    /// Parse a TEI document with an explicit namespace configuration.
    pub fn parse_with(text: &'input str, ns: Namespaces) -> Result<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(text, options)?;
        Ok(Self { doc, ns })
    }

    /// Namespace configuration this document was parsed with.
    pub fn namespaces(&self) -> &Namespaces {
        &self.ns
    }

    /// The underlying tree.
    pub fn document(&self) -> &Document<'input> {
        &self.doc
    }

    /// View of the document root (not the root element).
    pub fn root(&self) -> TeiNode<'_, 'input> {
        TeiNode::new(self.doc.root(), &self.ns)
    }
}

/// A node of the TEI tree paired with the namespace configuration.
#[derive(Clone, Copy)]
pub struct TeiNode<'a, 'input> {
    node: Node<'a, 'input>,
    ns: &'a Namespaces,
}

impl<'a, 'input> TeiNode<'a, 'input> {
    pub fn new(node: Node<'a, 'input>, ns: &'a Namespaces) -> Self {
        Self { node, ns }
    }

    /// Wrap another node from the same document.
    pub fn with(&self, node: Node<'a, 'input>) -> Self {
        Self { node, ns: self.ns }
    }

    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }

    pub fn namespaces(&self) -> &'a Namespaces {
        self.ns
    }

    /// Local name of the element, or an empty string for non-elements.
    pub fn local_name(&self) -> &'a str {
        if self.node.is_element() {
            self.node.tag_name().name()
        } else {
            ""
        }
    }

    /// True if this is a TEI element with the given local name.
    pub fn is_tei(&self, local: &str) -> bool {
        is_tei_element(self.node, self.ns, local)
    }

    /// True if this is a TEI element with the given local name and `@type`.
    pub fn is_tei_typed(&self, local: &str, type_attr: &str) -> bool {
        self.is_tei(local) && self.node.attribute("type") == Some(type_attr)
    }

    /// Unqualified attribute value.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// The `xml:id` attribute.
    pub fn xml_id(&self) -> Option<&'a str> {
        self.node.attribute((roxmltree::NS_XML_URI, "id"))
    }

    /// An attribute in the configured XLink namespace.
    pub fn xlink_attr(&self, name: &str) -> Option<&'a str> {
        self.node.attribute((self.ns.xlink.as_str(), name))
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        text_content(self.node)
    }

    /// Direct TEI element children with the given local name.
    pub fn children_named(self, local: &'a str) -> impl Iterator<Item = TeiNode<'a, 'input>> + 'a {
        let ns = self.ns;
        self.node
            .children()
            .filter(move |n| is_tei_element(*n, ns, local))
            .map(move |n| TeiNode::new(n, ns))
    }

    /// TEI element descendants (excluding this node) with the given local name,
    /// in document order.
    pub fn descendants_named(
        self,
        local: &'a str,
    ) -> impl Iterator<Item = TeiNode<'a, 'input>> + 'a {
        let ns = self.ns;
        let this = self.node;
        this.descendants()
            .filter(move |n| *n != this && is_tei_element(*n, ns, local))
            .map(move |n| TeiNode::new(n, ns))
    }

    /// First child element matching `local`.
    pub fn child_named(&self, local: &'a str) -> Option<TeiNode<'a, 'input>> {
        self.children_named(local).next()
    }

    /// First descendant element matching `local`.
    pub fn descendant_named(&self, local: &'a str) -> Option<TeiNode<'a, 'input>> {
        self.descendants_named(local).next()
    }

    /// Nearest proper ancestor satisfying `pred`.
    pub fn ancestor_where<F>(&self, pred: F) -> Option<TeiNode<'a, 'input>>
    where
        F: Fn(&TeiNode<'a, 'input>) -> bool,
    {
        self.node
            .ancestors()
            .skip(1)
            .map(|n| self.with(n))
            .find(|n| pred(n))
    }
}

impl PartialEq for TeiNode<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl std::fmt::Debug for TeiNode<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeiNode")
            .field("name", &self.local_name())
            .field("id", &self.xml_id())
            .finish()
    }
}

pub(crate) fn is_tei_element(node: Node<'_, '_>, ns: &Namespaces, local: &str) -> bool {
    if !node.is_element() {
        return false;
    }
    let name = node.tag_name();
    name.name() == local && name.namespace() == Some(ns.tei.as_str())
}

pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
