//! # Envelope Construction
//!
//! Builds SOAP 1.1 envelopes for outbound calls and decodes the body
//! payload of inbound ones. The operation element is emitted unqualified;
//! resolving a service's target namespace from its WSDL is the transport
//! collaborator's concern, not this crate's.

use sxd_document::dom::Element;

use crate::soap::header::SoapHeader;
use crate::soap::value::XmlValue;
use crate::xml::{child_elements, element_text, escape_into, parse_document, root_element};

/// Namespace of the SOAP 1.1 envelope schema.
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Build the envelope for one call: the pending headers in insertion order,
/// then the operation element wrapping the serialized parameters. The
/// `<soap:Header>` element is omitted entirely when no headers are pending.
pub fn build(
    action: &str,
    params: &XmlValue,
    headers: &[SoapHeader],
    default_header_ns: &str,
) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>");
    out.push_str("<soap:Envelope xmlns:soap=\"");
    out.push_str(SOAP_ENVELOPE_NS);
    out.push_str("\">");

    if !headers.is_empty() {
        out.push_str("<soap:Header>");
        for header in headers {
            let ns = header.namespace.as_deref().unwrap_or(default_header_ns);
            out.push('<');
            out.push_str(&header.name);
            out.push_str(" xmlns=\"");
            escape_into(&mut out, ns);
            out.push_str("\">");
            write_value(&mut out, &header.value);
            out.push_str("</");
            out.push_str(&header.name);
            out.push('>');
        }
        out.push_str("</soap:Header>");
    }

    out.push_str("<soap:Body>");
    out.push('<');
    out.push_str(action);
    out.push('>');
    write_value(&mut out, params);
    out.push_str("</");
    out.push_str(action);
    out.push('>');
    out.push_str("</soap:Body></soap:Envelope>");
    out
}

fn write_value(out: &mut String, value: &XmlValue) {
    match value {
        XmlValue::Text(text) => escape_into(out, text),
        XmlValue::Map(fields) => {
            for (name, value) in fields {
                write_named(out, name, value);
            }
        }
        XmlValue::List(items) => {
            for item in items {
                write_value(out, item);
            }
        }
    }
}

fn write_named(out: &mut String, name: &str, value: &XmlValue) {
    if let XmlValue::List(items) = value {
        for item in items {
            write_named(out, name, item);
        }
        return;
    }
    out.push('<');
    out.push_str(name);
    out.push('>');
    write_value(out, value);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Decode the first element under the envelope `Body` into an [`XmlValue`].
/// `None` when the document has no body or the body is empty.
pub fn extract_body_value(response_xml: &str) -> Option<XmlValue> {
    let package = parse_document(response_xml).ok()?;
    let document = package.as_document();
    let root = root_element(&document)?;
    let body = child_elements(root)
        .into_iter()
        .find(|e| e.name().local_part() == "Body")?;
    let payload = child_elements(body).into_iter().next()?;
    Some(decode_element(payload))
}

fn decode_element(element: Element<'_>) -> XmlValue {
    let children = child_elements(element);
    if children.is_empty() {
        XmlValue::Text(element_text(element).trim().to_string())
    } else {
        XmlValue::Map(
            children
                .into_iter()
                .map(|child| (child.name().local_part().to_string(), decode_element(child)))
                .collect(),
        )
    }
}
