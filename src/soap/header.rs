//! Pending SOAP headers.

use crate::soap::value::XmlValue;

/// One SOAP header scheduled for the following calls.
///
/// Headers live on the session in insertion order, which is also wire
/// order. A `None` namespace resolves to the configured default at
/// serialization time.
#[derive(Debug, Clone, PartialEq)]
pub struct SoapHeader {
    pub namespace: Option<String>,
    pub name: String,
    pub value: XmlValue,
}
