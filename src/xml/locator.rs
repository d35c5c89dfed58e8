//! # Element Locator
//!
//! Resolves a CSS-or-XPath selector against a document. CSS translation is
//! tried first; when the selector is not valid CSS, the text is evaluated
//! directly as XPath. Zero matches from a valid expression is an ordinary
//! outcome, reported separately from a malformed expression.

use sxd_document::dom::Document;
use sxd_xpath::nodeset::Node;
use sxd_xpath::{Value, evaluate_xpath};

use crate::error::Error;
use crate::xml::{css, parse_document};

/// Interpret `selector` as CSS when it translates, raw XPath otherwise.
fn resolve(selector: &str) -> String {
    match css::to_xpath(selector) {
        Ok(xpath) => xpath,
        Err(_) => selector.to_string(),
    }
}

/// Number of nodes selected by `xpath` in `xml`.
///
/// `Ok(0)` is a valid expression with no matches. A malformed expression,
/// or one that evaluates to a value rather than a node-set, is an
/// [`Error::Selector`].
pub fn match_count(xml: &str, xpath: &str) -> Result<usize, Error> {
    let package = parse_document(xml)?;
    let document = package.as_document();
    match evaluate_xpath(&document, xpath) {
        Ok(Value::Nodeset(nodes)) => Ok(nodes.size()),
        Ok(other) => Err(non_nodeset(xpath, &other)),
        Err(e) => Err(Error::Selector {
            selector: xpath.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// XPath string-value of the first node matched by `selector`, in document
/// order. [`Error::NoMatch`] carries the original selector text.
pub fn text_of_first(xml: &str, selector: &str) -> Result<String, Error> {
    let package = parse_document(xml)?;
    let document = package.as_document();
    let node = first_node(&document, selector)?;
    Ok(node.string_value())
}

/// Value of `attribute` on the first element matched by `selector`.
/// `Ok(None)` when the element exists but carries no such attribute.
pub fn attribute_of_first(
    xml: &str,
    selector: &str,
    attribute: &str,
) -> Result<Option<String>, Error> {
    let package = parse_document(xml)?;
    let document = package.as_document();
    match first_node(&document, selector)? {
        Node::Element(element) => Ok(element.attribute(attribute).map(|a| a.value().to_string())),
        _ => Err(Error::Selector {
            selector: selector.to_string(),
            reason: "selector does not match an element".to_string(),
        }),
    }
}

fn first_node<'d>(document: &'d Document<'d>, selector: &str) -> Result<Node<'d>, Error> {
    let xpath = resolve(selector);
    let value = evaluate_xpath(document, &xpath).map_err(|e| Error::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;
    match value {
        Value::Nodeset(nodes) => nodes
            .document_order_first()
            .ok_or_else(|| Error::NoMatch(selector.to_string())),
        other => Err(non_nodeset(selector, &other)),
    }
}

fn non_nodeset(selector: &str, value: &Value<'_>) -> Error {
    let kind = match value {
        Value::Boolean(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Nodeset(_) => "node-set",
    };
    Error::Selector {
        selector: selector.to_string(),
        reason: format!("expression selects a {kind}, not nodes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<catalog>
        <book id="b1" class="fiction new"><title>Dune</title></book>
        <book id="b2"><title>Sum</title></book>
    </catalog>"#;

    #[test]
    fn zero_matches_is_not_an_error() {
        assert_eq!(match_count(DOC, "//nonexistent").unwrap(), 0);
    }

    #[test]
    fn malformed_xpath_is_a_selector_error() {
        let err = match_count(DOC, "//*[").unwrap_err();
        assert!(matches!(err, Error::Selector { .. }));
    }

    #[test]
    fn value_expressions_are_selector_errors() {
        let err = match_count(DOC, "count(//book)").unwrap_err();
        assert!(matches!(err, Error::Selector { .. }));
    }

    #[test]
    fn css_id_selector_resolves() {
        assert_eq!(text_of_first(DOC, "#b2").unwrap(), "Sum");
    }

    #[test]
    fn css_class_selector_resolves() {
        assert_eq!(text_of_first(DOC, "book.fiction title").unwrap(), "Dune");
    }

    #[test]
    fn invalid_css_falls_back_to_xpath() {
        assert_eq!(text_of_first(DOC, "descendant::title").unwrap(), "Dune");
        assert_eq!(text_of_first(DOC, "//book[2]/title").unwrap(), "Sum");
    }

    #[test]
    fn no_match_carries_the_original_selector() {
        match text_of_first(DOC, "magazine").unwrap_err() {
            Error::NoMatch(selector) => assert_eq!(selector, "magazine"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn attribute_lookup_distinguishes_missing_attribute() {
        assert_eq!(attribute_of_first(DOC, "book", "id").unwrap().as_deref(), Some("b1"));
        assert_eq!(attribute_of_first(DOC, "book", "isbn").unwrap(), None);
    }
}
