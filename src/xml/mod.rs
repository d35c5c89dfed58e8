//! # XML Helpers
//!
//! Shared parsing and navigation glue over the `sxd-document` DOM, plus the
//! pieces the assertion surface is built from: canonical rendering,
//! structural matching, and selector resolution.

pub mod canonical;
pub mod css;
pub mod locator;
pub mod structure;

use sxd_document::Package;
use sxd_document::dom::{ChildOfElement, ChildOfRoot, Document, Element};
use sxd_document::parser;

use crate::error::Error;

/// Parse `xml` into an owned DOM package. Malformed input is an
/// [`Error::Parse`], never an empty document.
pub(crate) fn parse_document(xml: &str) -> Result<Package, Error> {
    parser::parse(xml).map_err(|e| Error::Parse(e.to_string()))
}

/// First element under the document root.
pub(crate) fn root_element<'d>(document: &Document<'d>) -> Option<Element<'d>> {
    document.root().children().into_iter().find_map(|child| match child {
        ChildOfRoot::Element(element) => Some(element),
        _ => None,
    })
}

/// Direct element children, skipping text, comment, and PI nodes.
pub(crate) fn child_elements<'d>(element: Element<'d>) -> Vec<Element<'d>> {
    element
        .children()
        .into_iter()
        .filter_map(|child| match child {
            ChildOfElement::Element(element) => Some(element),
            _ => None,
        })
        .collect()
}

/// Concatenated text of all descendant text nodes, in document order.
pub(crate) fn element_text(element: Element<'_>) -> String {
    let mut text = String::new();
    collect_text(element, &mut text);
    text
}

fn collect_text(element: Element<'_>, text: &mut String) {
    for child in element.children() {
        match child {
            ChildOfElement::Text(t) => text.push_str(t.text()),
            ChildOfElement::Element(e) => collect_text(e, text),
            _ => {}
        }
    }
}

/// XML-escape `value` into `out`.
pub(crate) fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = parse_document("<open><unclosed>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn element_text_concatenates_descendants() {
        let package = parse_document("<a>one<b>two</b><c><d>three</d></c></a>").unwrap();
        let document = package.as_document();
        let root = root_element(&document).unwrap();
        assert_eq!(element_text(root), "onetwothree");
    }

    #[test]
    fn escape_covers_markup_and_quotes() {
        let mut out = String::new();
        escape_into(&mut out, r#"<a b="c" d='e'> & more"#);
        assert_eq!(out, "&lt;a b=&quot;c&quot; d=&apos;e&apos;&gt; &amp; more");
    }
}
