//! # Element Tree Search
//!
//! Depth-first, pre-order traversal over an element forest. Siblings are
//! visited in stored order and a node is visited before its children, so the
//! first match is the one closest to the start of the document.

use crate::documents::Element;

/// Pre-order iterator over an element forest
///
/// Uses an explicit stack, so arbitrarily deep trees do not grow the call
/// stack.
pub struct PreOrder<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> PreOrder<'a> {
    pub fn new(roots: &'a [Element]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.elements.iter().rev());
        Some(node)
    }
}

/// Find the first element with the given id anywhere in the tree
pub fn find_element_recursive<'a>(elements: &'a [Element], element_id: &str) -> Option<&'a Element> {
    PreOrder::new(elements).find(|element| element.id == element_id)
}
