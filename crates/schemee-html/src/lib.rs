//! Schemee HTML Document Layer
//!
//! Implements [`DocumentTree`] over an html5ever [`RcDom`].
//!
//! # Marker transparency
//!
//! During learning the sample contains synthetic marker elements (any element
//! carrying the `data-schemee-id` attribute). Every query in this crate looks
//! *through* them: the children of an element are its child elements with each
//! marker replaced by the marker's own children, and the parent of an element
//! is its nearest non-marker ancestor. A selector computed on a marked sample
//! is therefore the selector the same element has in the unmarked document.
//!
//! # Examples
//!
//! ```
//! use schemee_domain::traits::DocumentTree;
//! use schemee_html::HtmlDocument;
//!
//! let doc = HtmlDocument::parse("<ul><li>a</li><li>b</li></ul>");
//! let root = doc.root_element().unwrap();
//!
//! let second = doc.resolve(&root, &"body > ul:first-child > li:nth-child(2)".parse().unwrap()).unwrap();
//! assert_eq!(doc.text_content(&second), "b");
//! ```

#![warn(missing_docs)]

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use schemee_domain::traits::DocumentTree;
use schemee_domain::{Address, ChildIndex, MarkerId, PathStep, MARKER_ATTRIBUTE};
use std::rc::Rc;
use tracing::trace;

/// An HTML document parsed with html5ever
///
/// Parsing follows the HTML5 tree-construction rules, so it never fails;
/// malformed input is repaired the way a browser would repair it.
pub struct HtmlDocument {
    dom: RcDom,
}

impl HtmlDocument {
    /// Access the underlying DOM
    pub fn dom(&self) -> &RcDom {
        &self.dom
    }
}

impl DocumentTree for HtmlDocument {
    type Node = Handle;

    fn parse(text: &str) -> Self {
        let dom = parse_document(RcDom::default(), Default::default()).one(text);
        trace!("Parsed HTML document ({} bytes)", text.len());
        Self { dom }
    }

    fn root_element(&self) -> Option<Handle> {
        self.dom
            .document
            .children
            .borrow()
            .iter()
            .find(|child| is_element(child))
            .cloned()
    }

    fn find_marker(&self, marker: MarkerId) -> Option<Handle> {
        let wanted = marker.to_string();
        let mut stack = vec![self.dom.document.clone()];
        while let Some(node) = stack.pop() {
            if marker_attribute(&node).as_deref() == Some(wanted.as_str()) {
                return Some(node);
            }
            stack.extend(node.children.borrow().iter().rev().cloned());
        }
        None
    }

    fn first_child_element(&self, node: &Handle) -> Option<Handle> {
        logical_children(node).into_iter().next()
    }

    fn parent_element(&self, node: &Handle) -> Option<Handle> {
        logical_parent(node)
    }

    fn selector_for(&self, node: &Handle) -> Address {
        let root = self.root_element();
        let mut steps = Vec::new();
        let mut current = node.clone();

        loop {
            if root.as_ref().is_some_and(|r| Rc::ptr_eq(r, &current)) {
                break;
            }
            let Some(parent) = logical_parent(&current) else {
                break;
            };
            // Markers contribute no step of their own
            if !is_marker(&current) {
                let index = logical_children(&parent)
                    .iter()
                    .position(|child| Rc::ptr_eq(child, &current))
                    .unwrap_or(0);
                steps.push(PathStep::at(element_name(&current).unwrap_or_default(), index));
            }
            current = parent;
        }

        steps.into_iter().rev().collect()
    }

    fn resolve(&self, anchor: &Handle, address: &Address) -> Option<Handle> {
        let mut current = anchor.clone();
        for step in address.steps() {
            let children = logical_children(&current);
            let next = match step.index {
                Some(ChildIndex::At(i)) => children.get(i).cloned(),
                Some(ChildIndex::Last) => children.last().cloned(),
                None => children
                    .iter()
                    .find(|child| element_name(child).as_deref() == Some(step.tag.as_str()))
                    .cloned(),
            }?;

            if element_name(&next).as_deref() != Some(step.tag.as_str()) {
                return None;
            }
            current = next;
        }
        Some(current)
    }

    fn next_element_sibling(&self, node: &Handle) -> Option<Handle> {
        let parent = logical_parent(node)?;
        let siblings = logical_children(&parent);
        let position = siblings.iter().position(|child| Rc::ptr_eq(child, node))?;
        siblings.get(position + 1).cloned()
    }

    fn tag_name(&self, node: &Handle) -> Option<String> {
        element_name(node)
    }

    fn text_content(&self, node: &Handle) -> String {
        let mut text = String::new();
        for child in node.children.borrow().iter() {
            if let NodeData::Text { contents } = &child.data {
                text.push_str(&contents.borrow());
            }
        }
        text
    }
}

fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

fn element_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn marker_attribute(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == MARKER_ATTRIBUTE)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn is_marker(node: &Handle) -> bool {
    marker_attribute(node).is_some()
}

fn parent_of(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    node.parent.set(weak);
    parent
}

/// Nearest ancestor element that is not a marker
fn logical_parent(node: &Handle) -> Option<Handle> {
    let mut current = parent_of(node)?;
    loop {
        if !is_element(&current) {
            return None;
        }
        if !is_marker(&current) {
            return Some(current);
        }
        current = parent_of(&current)?;
    }
}

/// Child elements with markers flattened away, in document order
fn logical_children(node: &Handle) -> Vec<Handle> {
    let mut children = Vec::new();
    let mut stack: Vec<Handle> = node.children.borrow().iter().rev().cloned().collect();
    while let Some(child) = stack.pop() {
        if !is_element(&child) {
            continue;
        }
        if is_marker(&child) {
            stack.extend(child.children.borrow().iter().rev().cloned());
        } else {
            children.push(child);
        }
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements_by_tag(doc: &HtmlDocument, tag: &str) -> Vec<Handle> {
        let mut found = Vec::new();
        let mut stack = vec![doc.dom().document.clone()];
        while let Some(node) = stack.pop() {
            if element_name(&node).as_deref() == Some(tag) {
                found.push(node.clone());
            }
            stack.extend(node.children.borrow().iter().rev().cloned());
        }
        found
    }

    #[test]
    fn test_root_element_is_html() {
        let doc = HtmlDocument::parse("<p>hi</p>");
        let root = doc.root_element().unwrap();
        assert_eq!(doc.tag_name(&root).as_deref(), Some("html"));
    }

    #[test]
    fn test_selector_counts_element_positions() {
        let doc = HtmlDocument::parse("<h1>t</h1>\n<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>");
        let items = elements_by_tag(&doc, "li");

        let selector = doc.selector_for(&items[1]);
        assert_eq!(
            selector.to_string(),
            "body:nth-child(2) > ul:nth-child(2) > li:nth-child(2)"
        );
    }

    #[test]
    fn test_selector_resolves_back_to_node() {
        let doc = HtmlDocument::parse("<div><span>x</span><p><b>y</b><i>z</i></p></div>");
        let root = doc.root_element().unwrap();

        for tag in ["span", "b", "i"] {
            let node = elements_by_tag(&doc, tag).remove(0);
            let resolved = doc.resolve(&root, &doc.selector_for(&node)).unwrap();
            assert!(Rc::ptr_eq(&resolved, &node), "{} should resolve to itself", tag);
        }
    }

    #[test]
    fn test_markers_are_transparent() {
        let id = MarkerId::from_value(42);
        let marked = format!(
            "<h1>t</h1><ul><list-start {}=\"{}\"><li>a</li><li><value {}=\"{}\"></value>b</li></list-start></ul>",
            MARKER_ATTRIBUTE,
            id,
            MARKER_ATTRIBUTE,
            MarkerId::from_value(43)
        );
        let plain = "<h1>t</h1><ul><li>a</li><li>b</li></ul>";

        let marked_doc = HtmlDocument::parse(&marked);
        let plain_doc = HtmlDocument::parse(plain);

        let marked_li = elements_by_tag(&marked_doc, "li");
        let plain_li = elements_by_tag(&plain_doc, "li");

        assert_eq!(
            marked_doc.selector_for(&marked_li[1]),
            plain_doc.selector_for(&plain_li[1])
        );

        let marker = marked_doc.find_marker(id).unwrap();
        let first = marked_doc.first_child_element(&marker).unwrap();
        assert!(Rc::ptr_eq(&first, &marked_li[0]));

        let ul = marked_doc.parent_element(&first).unwrap();
        assert_eq!(marked_doc.tag_name(&ul).as_deref(), Some("ul"));
    }

    #[test]
    fn test_value_marker_parent_is_enclosing_element() {
        let id = MarkerId::from_value(7);
        let doc = HtmlDocument::parse(&format!(
            "<p><span><value {}=\"{}\"></value>Bob</span></p>",
            MARKER_ATTRIBUTE, id
        ));

        let marker = doc.find_marker(id).unwrap();
        let parent = doc.parent_element(&marker).unwrap();
        assert_eq!(doc.tag_name(&parent).as_deref(), Some("span"));
        assert_eq!(doc.text_content(&parent), "Bob");
    }

    #[test]
    fn test_find_marker_missing() {
        let doc = HtmlDocument::parse("<p>nothing here</p>");
        assert!(doc.find_marker(MarkerId::from_value(1)).is_none());
    }

    #[test]
    fn test_next_sibling_skips_text() {
        let doc = HtmlDocument::parse("<ul>\n<li>a</li>\n text \n<li>b</li>\n</ul>");
        let items = elements_by_tag(&doc, "li");

        let next = doc.next_element_sibling(&items[0]).unwrap();
        assert!(Rc::ptr_eq(&next, &items[1]));
        assert!(doc.next_element_sibling(&items[1]).is_none());
    }

    #[test]
    fn test_text_content_is_direct_children_only() {
        let doc = HtmlDocument::parse("<p>Hello <b>big</b> world</p>");
        let p = elements_by_tag(&doc, "p").remove(0);
        assert_eq!(doc.text_content(&p), "Hello  world");
    }

    #[test]
    fn test_resolve_step_variants() {
        let doc = HtmlDocument::parse("<div><p>1</p><span>2</span><p>3</p></div>");
        let root = doc.root_element().unwrap();

        let last = doc
            .resolve(&root, &"body > div > p:last-child".parse().unwrap())
            .unwrap();
        assert_eq!(doc.text_content(&last), "3");

        let by_tag = doc
            .resolve(&root, &"body > div > span".parse().unwrap())
            .unwrap();
        assert_eq!(doc.text_content(&by_tag), "2");

        // Position 1 is a span, not a p
        assert!(doc
            .resolve(&root, &"body > div > p:nth-child(2)".parse().unwrap())
            .is_none());
        assert!(doc
            .resolve(&root, &"body > div > p:nth-child(9)".parse().unwrap())
            .is_none());
    }

    #[test]
    fn test_empty_address_resolves_to_anchor() {
        let doc = HtmlDocument::parse("<p>x</p>");
        let root = doc.root_element().unwrap();
        let resolved = doc.resolve(&root, &Address::empty()).unwrap();
        assert!(Rc::ptr_eq(&resolved, &root));
    }
}
