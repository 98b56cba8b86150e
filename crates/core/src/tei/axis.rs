//! Document-order axes over the TEI tree.
//!
//! These follow XPath semantics: the preceding axis holds every node that
//! ends before the context node starts (ancestors excluded), the following
//! axis every node that starts after the context node ends (descendants
//! excluded). Results are always in document order.

use std::iter::successors;

use roxmltree::Node;

/// Nodes on the preceding axis of `node` that satisfy `pred`.
pub fn preceding<'a, 'input, F>(node: Node<'a, 'input>, pred: F) -> Vec<Node<'a, 'input>>
where
    F: Fn(Node<'a, 'input>) -> bool,
{
    // Walk the ancestor chain root-first: earlier siblings of an outer
    // ancestor always come before earlier siblings of an inner one.
    let chain: Vec<Node<'a, 'input>> = node.ancestors().collect();
    let mut found = Vec::new();
    for level in chain.iter().rev() {
        let mut siblings: Vec<Node<'a, 'input>> =
            successors(level.prev_sibling(), |n| n.prev_sibling()).collect();
        siblings.reverse();
        for sibling in siblings {
            found.extend(sibling.descendants().filter(|n| pred(*n)));
        }
    }
    found
}

/// Nodes on the following axis of `node` that satisfy `pred`.
pub fn following<'a, 'input, F>(node: Node<'a, 'input>, pred: F) -> Vec<Node<'a, 'input>>
where
    F: Fn(Node<'a, 'input>) -> bool,
{
    let mut found = Vec::new();
    for level in node.ancestors() {
        for sibling in successors(level.next_sibling(), |n| n.next_sibling()) {
            found.extend(sibling.descendants().filter(|n| pred(*n)));
        }
    }
    found
}
