//! # Structure Matching
//!
//! Order-insensitive, name-only containment of an element shape within a
//! candidate tree. This backs the "contains structure" assertion: the shape
//! document declares which child elements must exist, nothing more.

use sxd_document::dom::Element;

use crate::xml::child_elements;

/// Decide whether the element-name shape of `schema` is present among the
/// direct children of `candidate`, recursively.
///
/// For every direct child of `schema`, the FIRST direct child of `candidate`
/// with the same local name is taken as its counterpart, and that
/// counterpart must match recursively. Matching never backtracks: when the
/// first same-named child fails deeper, later siblings with the same name
/// are not tried and the whole requirement fails. Known limitation; a shape
/// that needs a specific sibling among same-named ones must hold in the
/// first occurrence.
///
/// Only element local names are compared. Attributes, text content, and
/// namespaces are ignored at every depth, and extra candidate children are
/// allowed. A `schema` element with no children matches trivially.
pub fn structure_matches(schema: Element<'_>, candidate: Element<'_>) -> bool {
    let candidate_children = child_elements(candidate);
    child_elements(schema).into_iter().all(|required| {
        let name = required.name().local_part();
        match candidate_children.iter().find(|c| c.name().local_part() == name) {
            Some(counterpart) => structure_matches(required, *counterpart),
            None => false,
        }
    })
}

/// Every element in the tree rooted at `root` (inclusive) whose local name
/// equals `name`, in document order.
pub fn find_named<'d>(root: Element<'d>, name: &str) -> Vec<Element<'d>> {
    let mut found = Vec::new();
    collect_named(root, name, &mut found);
    found
}

fn collect_named<'d>(element: Element<'d>, name: &str, found: &mut Vec<Element<'d>>) {
    if element.name().local_part() == name {
        found.push(element);
    }
    for child in child_elements(element) {
        collect_named(child, name, found);
    }
}
