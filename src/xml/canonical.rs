//! # Canonical Rendering
//!
//! Renders a document into a canonical string so that two documents compare
//! equal exactly when their canonical strings are byte-equal. Attribute
//! declaration order never matters, insignificant whitespace and comments
//! are dropped, and namespace declarations collapse to one `xmlns` per
//! namespace switch, so prefixed and default-namespace spellings of the
//! same document render identically.

use sxd_document::dom::{ChildOfElement, Element};

use crate::error::Error;
use crate::xml::{escape_into, parse_document, root_element};

/// Canonical string form of `xml`. Malformed input is an [`Error::Parse`].
pub fn canonicalize(xml: &str) -> Result<String, Error> {
    let package = parse_document(xml)?;
    let document = package.as_document();
    let root = root_element(&document)
        .ok_or_else(|| Error::Parse("Document has no root element".to_string()))?;
    let mut out = String::new();
    write_element(&mut out, root, None);
    Ok(out)
}

fn write_element(out: &mut String, element: Element<'_>, parent_ns: Option<&str>) {
    let name = element.name();
    out.push('<');
    out.push_str(name.local_part());

    // One xmlns declaration wherever the effective namespace changes.
    let ns = name.namespace_uri();
    if ns != parent_ns {
        out.push_str(" xmlns=\"");
        escape_into(out, ns.unwrap_or(""));
        out.push('"');
    }

    let mut attributes: Vec<(&str, &str)> = element
        .attributes()
        .into_iter()
        .map(|a| (a.name().local_part(), a.value()))
        .collect();
    attributes.sort_unstable();
    for (attr_name, attr_value) in attributes {
        out.push(' ');
        out.push_str(attr_name);
        out.push_str("=\"");
        escape_into(out, attr_value);
        out.push('"');
    }

    let children: Vec<ChildOfElement<'_>> = element
        .children()
        .into_iter()
        .filter(|child| match child {
            ChildOfElement::Element(_) => true,
            ChildOfElement::Text(t) => !t.text().trim().is_empty(),
            _ => false,
        })
        .collect();

    if children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in children {
        match child {
            ChildOfElement::Element(e) => write_element(out, e, ns),
            ChildOfElement::Text(t) => escape_into(out, t.text().trim()),
            _ => {}
        }
    }
    out.push_str("</");
    out.push_str(name.local_part());
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_order_is_irrelevant() {
        let left = canonicalize(r#"<a b="1" c="2"/>"#).unwrap();
        let right = canonicalize(r#"<a c="2" b="1"/>"#).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn self_closing_and_empty_pair_render_identically() {
        assert_eq!(canonicalize("<a/>").unwrap(), canonicalize("<a></a>").unwrap());
    }

    #[test]
    fn insignificant_whitespace_and_comments_are_dropped() {
        let pretty = canonicalize("<a>\n  <!-- note -->\n  <b> hi </b>\n</a>").unwrap();
        let tight = canonicalize("<a><b>hi</b></a>").unwrap();
        assert_eq!(pretty, tight);
    }

    #[test]
    fn prefixed_and_default_namespaces_are_equivalent() {
        let prefixed = canonicalize(r#"<x:a xmlns:x="urn:t"><x:b/></x:a>"#).unwrap();
        let default_ns = canonicalize(r#"<a xmlns="urn:t"><b/></a>"#).unwrap();
        assert_eq!(prefixed, default_ns);
        assert_eq!(prefixed, r#"<a xmlns="urn:t"><b/></a>"#);
    }

    #[test]
    fn namespace_switch_emits_a_fresh_declaration() {
        let rendered =
            canonicalize(r#"<a xmlns="urn:t"><b xmlns="urn:u"/><c/></a>"#).unwrap();
        assert_eq!(rendered, r#"<a xmlns="urn:t"><b xmlns="urn:u"/><c/></a>"#);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let rendered = canonicalize(r#"<a note="x &amp; y"/>"#).unwrap();
        assert_eq!(rendered, r#"<a note="x &amp; y"/>"#);
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(canonicalize("<a><b></a>"), Err(Error::Parse(_))));
    }
}
