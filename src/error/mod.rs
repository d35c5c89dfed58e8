//! # Error Taxonomy
//!
//! Every fallible operation in the crate reports one of the variants below.
//! Nothing is retried automatically: errors surface to the test step that
//! triggered them, and a failed call leaves the session snapshots exactly as
//! they were before the call.

use crate::soap::transport::TransportError;

/// Failures surfaced by sessions, locators, and assertions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required configuration is missing or unusable. Raised at session
    /// construction, never later.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The HTTP layer failed before a response document was captured.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Malformed XML, either in a captured envelope or in a comparison
    /// document supplied to an assertion.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// The selector itself is unusable: malformed XPath/CSS syntax, or an
    /// expression that evaluates to a value where nodes are required.
    /// Distinct from [`Error::NoMatch`], which is a valid selector that
    /// simply matched nothing.
    #[error("Invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    /// A valid selector matched zero nodes.
    #[error("No node matched selector `{0}`")]
    NoMatch(String),

    /// An assertion condition was not met. The message carries the expected
    /// and observed values so the failure can be diagnosed without rerunning.
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// A response artifact was queried before any call completed.
    #[error("No response recorded yet; issue a call first")]
    NoResponse,
}
