//! # SOAP Session
//!
//! One synchronous SOAP conversation against one endpoint. A session issues
//! one blocking call at a time and snapshots the raw request envelope, the
//! raw response envelope, the decoded body payload, and the HTTP status.
//! Sessions are plain values: run parallel tests with independent sessions,
//! nothing is shared behind them.

use crate::config::SoapConfig;
use crate::error::Error;
use crate::soap::envelope;
use crate::soap::header::SoapHeader;
use crate::soap::transport::{HttpTransport, SoapTransport};
use crate::soap::value::XmlValue;
use crate::xml::{self, locator};

pub struct SoapSession<T: SoapTransport = HttpTransport> {
    config: SoapConfig,
    transport: T,
    headers: Vec<SoapHeader>,
    last_request: Option<String>,
    last_response: Option<String>,
    last_value: Option<XmlValue>,
    last_status: Option<u16>,
}

impl SoapSession<HttpTransport> {
    /// Validate `config` and open a session over blocking HTTP.
    pub fn new(config: SoapConfig) -> Result<Self, Error> {
        validate(&config)?;
        let transport = HttpTransport::new(&config);
        Ok(Self::assemble(config, transport))
    }
}

impl<T: SoapTransport> SoapSession<T> {
    /// Open a session over a caller-supplied transport. Tests plug scripted
    /// transports in here; configuration is validated the same way as for
    /// [`SoapSession::new`].
    pub fn with_transport(config: SoapConfig, transport: T) -> Result<Self, Error> {
        validate(&config)?;
        Ok(Self::assemble(config, transport))
    }

    fn assemble(config: SoapConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            headers: Vec::new(),
            last_request: None,
            last_response: None,
            last_value: None,
            last_status: None,
        }
    }

    pub fn config(&self) -> &SoapConfig {
        &self.config
    }

    /// Schedule a header for every following call.
    ///
    /// Headers are never cleared automatically: two `add_header` calls
    /// followed by two `call`s put BOTH headers on both requests. Use
    /// [`clear_headers`](Self::clear_headers) when a test needs a clean
    /// pending set. A `None` namespace falls back to the configured
    /// `header_namespace`.
    pub fn add_header(&mut self, namespace: Option<&str>, name: &str, value: XmlValue) {
        self.headers.push(SoapHeader {
            namespace: namespace.map(|ns| ns.to_string()),
            name: name.to_string(),
            value,
        });
    }

    /// Drop all pending headers.
    pub fn clear_headers(&mut self) {
        self.headers.clear();
    }

    /// Invoke `action` with the pending headers attached, then snapshot the
    /// exchange.
    ///
    /// Both captured envelopes must parse as XML before any snapshot is
    /// replaced; a transport or parse failure leaves the previous snapshots
    /// untouched. The HTTP status is read from the first status line in the
    /// captured response headers and is only overwritten when such a line
    /// is present.
    pub fn call(&mut self, action: &str, params: XmlValue) -> Result<(), Error> {
        let exchange = self.transport.call(action, &params, &self.headers)?;
        xml::parse_document(&exchange.request_xml)?;
        xml::parse_document(&exchange.response_xml)?;

        self.last_value = envelope::extract_body_value(&exchange.response_xml);
        self.last_request = Some(exchange.request_xml);
        self.last_response = Some(exchange.response_xml);
        if let Some(code) = parse_status_line(&exchange.response_headers) {
            self.last_status = Some(code);
        }
        tracing::debug!(action, status = ?self.last_status, "SOAP call completed");
        Ok(())
    }

    /// Raw request envelope captured by the last completed call.
    pub fn request_xml(&self) -> Result<&str, Error> {
        self.last_request.as_deref().ok_or(Error::NoResponse)
    }

    /// Raw response envelope captured by the last completed call.
    pub fn response_xml(&self) -> Result<&str, Error> {
        self.last_response.as_deref().ok_or(Error::NoResponse)
    }

    /// Decoded body payload of the last response.
    pub fn response_value(&self) -> Result<&XmlValue, Error> {
        self.last_value.as_ref().ok_or(Error::NoResponse)
    }

    /// HTTP status recorded by the last call that carried a status line.
    pub fn status(&self) -> Option<u16> {
        self.last_status
    }

    /// Text content of the first element in the last response matched by
    /// `selector` (CSS or XPath).
    pub fn text_content_of(&self, selector: &str) -> Result<String, Error> {
        locator::text_of_first(self.response_xml()?, selector)
    }

    /// Value of `attribute` on the first element in the last response
    /// matched by `selector`. Fails when the matched element lacks the
    /// attribute.
    pub fn attribute_of(&self, selector: &str, attribute: &str) -> Result<String, Error> {
        match locator::attribute_of_first(self.response_xml()?, selector, attribute)? {
            Some(value) => Ok(value),
            None => Err(Error::Assertion(format!(
                "Element matched by `{selector}` has no attribute `{attribute}`"
            ))),
        }
    }
}

fn validate(config: &SoapConfig) -> Result<(), Error> {
    if config.endpoint.trim().is_empty() {
        return Err(Error::Configuration("Endpoint cannot be empty".to_string()));
    }
    reqwest::Url::parse(&config.endpoint)
        .map_err(|e| Error::Configuration(format!("Invalid endpoint `{}`: {e}", config.endpoint)))?;
    Ok(())
}

/// Numeric status from the first HTTP status line, if any.
fn parse_status_line(headers_text: &str) -> Option<u16> {
    headers_text.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("HTTP/")?;
        let mut parts = rest.split_whitespace();
        parts.next()?; // protocol version
        parts.next()?.parse().ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_parses_from_the_top_of_the_header_block() {
        let headers = "HTTP/1.1 500 Internal Server Error\ncontent-type: text/xml";
        assert_eq!(parse_status_line(headers), Some(500));
    }

    #[test]
    fn header_block_without_status_line_yields_nothing() {
        assert_eq!(parse_status_line("content-type: text/xml"), None);
        assert_eq!(parse_status_line(""), None);
    }

    #[test]
    fn garbled_status_line_is_skipped() {
        assert_eq!(parse_status_line("HTTP/1.1 abc OK"), None);
        assert_eq!(
            parse_status_line("x: y\nHTTP/1.1 204 No Content"),
            Some(204)
        );
    }

    #[test]
    fn empty_endpoint_is_a_configuration_error() {
        let err = validate(&SoapConfig::new("   ")).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn unparseable_endpoint_is_a_configuration_error() {
        let err = validate(&SoapConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn valid_endpoint_passes_validation() {
        assert!(validate(&SoapConfig::new("http://service.test/soap")).is_ok());
    }
}
