//! # Response Assertions
//!
//! Checks over the snapshots captured by the last call. Every assertion
//! reads session state without mutating it and reports a descriptive
//! [`Error::Assertion`] when its condition is violated, never a silent
//! boolean. All of them require a recorded response and fail with
//! [`Error::NoResponse`] before the first completed call.

use crate::error::Error;
use crate::soap::session::SoapSession;
use crate::soap::transport::SoapTransport;
use crate::xml::canonical::canonicalize;
use crate::xml::locator;
use crate::xml::structure::{find_named, structure_matches};
use crate::xml::{parse_document, root_element};

impl<T: SoapTransport> SoapSession<T> {
    /// The canonical form of the last response must be byte-equal to the
    /// canonical form of `xml`.
    pub fn assert_response_equals(&self, xml: &str) -> Result<(), Error> {
        let actual = canonicalize(self.response_xml()?)?;
        let expected = canonicalize(xml)?;
        if actual == expected {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "Response does not equal expected XML\n  expected: {expected}\n  actual:   {actual}"
            )))
        }
    }

    /// The canonical form of `xml` must appear as a substring of the
    /// canonical form of the last response.
    ///
    /// This is textual containment on canonical output, not tree-aware
    /// containment; a fragment only matches when its canonical rendering
    /// lines up with a contiguous slice of the response's. Brittle for
    /// fragments that span partial sibling runs; prefer
    /// [`assert_response_contains_structure`](Self::assert_response_contains_structure)
    /// for shape checks.
    pub fn assert_response_includes(&self, xml: &str) -> Result<(), Error> {
        let response = canonicalize(self.response_xml()?)?;
        let fragment = canonicalize(xml)?;
        if response.contains(&fragment) {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "Response does not include fragment\n  fragment: {fragment}\n  response: {response}"
            )))
        }
    }

    /// The canonical form of `xml` must NOT appear inside the canonical
    /// form of the last response.
    pub fn assert_response_excludes(&self, xml: &str) -> Result<(), Error> {
        let response = canonicalize(self.response_xml()?)?;
        let fragment = canonicalize(xml)?;
        if response.contains(&fragment) {
            Err(Error::Assertion(format!(
                "Response unexpectedly includes fragment: {fragment}"
            )))
        } else {
            Ok(())
        }
    }

    /// The element-name shape of `xml` must be present under some element
    /// of the last response that shares its root name.
    ///
    /// Candidates are all response elements with the schema root's local
    /// name; the assertion passes when any of them satisfies the matcher
    /// in [`crate::xml::structure`]. Zero candidates is reported as
    /// "element not found", distinct from "found but shape mismatched".
    pub fn assert_response_contains_structure(&self, xml: &str) -> Result<(), Error> {
        let schema_package = parse_document(xml)?;
        let schema_document = schema_package.as_document();
        let schema_root = root_element(&schema_document)
            .ok_or_else(|| Error::Parse("Structure fragment has no root element".to_string()))?;

        let response_package = parse_document(self.response_xml()?)?;
        let response_document = response_package.as_document();
        let response_root = root_element(&response_document)
            .ok_or_else(|| Error::Parse("Response has no root element".to_string()))?;

        let name = schema_root.name().local_part();
        let candidates = find_named(response_root, name);
        if candidates.is_empty() {
            return Err(Error::Assertion(format!(
                "No `<{name}>` element found in response"
            )));
        }
        if candidates
            .iter()
            .any(|candidate| structure_matches(schema_root, *candidate))
        {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "Found {} `<{name}>` element(s) in response, but none matched the expected structure",
                candidates.len()
            )))
        }
    }

    /// `xpath` must select at least one node in the last response. A
    /// malformed expression is an [`Error::Selector`], never a zero count.
    pub fn assert_response_contains_xpath(&self, xpath: &str) -> Result<(), Error> {
        let count = locator::match_count(self.response_xml()?, xpath)?;
        if count > 0 {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "XPath `{xpath}` matched no nodes in response"
            )))
        }
    }

    /// `xpath` must select no nodes in the last response. A malformed
    /// expression is still an [`Error::Selector`].
    pub fn assert_response_excludes_xpath(&self, xpath: &str) -> Result<(), Error> {
        let count = locator::match_count(self.response_xml()?, xpath)?;
        if count == 0 {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "XPath `{xpath}` unexpectedly matched {count} node(s) in response"
            )))
        }
    }

    /// The recorded HTTP status must equal `expected`. Fails with
    /// [`Error::NoResponse`] while no status has been recorded; there is no
    /// default status to compare against.
    pub fn assert_response_code(&self, expected: u16) -> Result<(), Error> {
        let actual = self.status().ok_or(Error::NoResponse)?;
        if actual == expected {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "Expected HTTP status {expected}, got {actual}"
            )))
        }
    }
}
