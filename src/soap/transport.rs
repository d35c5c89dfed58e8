//! # Transport
//!
//! The seam between the session and whatever moves envelopes. Production
//! sessions POST over blocking HTTP; tests script the exchange.

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap};

use crate::config::SoapConfig;
use crate::soap::envelope;
use crate::soap::header::SoapHeader;
use crate::soap::value::XmlValue;

/// Raw artifacts captured from one SOAP exchange.
#[derive(Debug, Clone)]
pub struct SoapExchange {
    /// Outbound envelope exactly as it went over the wire.
    pub request_xml: String,
    /// Inbound envelope exactly as it arrived, faults included.
    pub response_xml: String,
    /// Status line plus one `name: value` line per response header.
    pub response_headers: String,
}

/// Failures below the XML layer.
///
/// SOAP faults are NOT transport errors: an HTTP error status still carries
/// a response document, and that document is what fault assertions inspect.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to send SOAP request to `{endpoint}`: {source}")]
    Send {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read SOAP response body: {0}")]
    Read(#[source] reqwest::Error),
    /// Reported by transport implementations outside this crate, such as
    /// scripted test doubles.
    #[error("Transport failure: {0}")]
    Failed(String),
}

/// Moves one envelope to the service and brings the raw exchange back.
pub trait SoapTransport {
    fn call(
        &self,
        action: &str,
        params: &XmlValue,
        headers: &[SoapHeader],
    ) -> Result<SoapExchange, TransportError>;
}

/// Blocking HTTP POST transport.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    header_namespace: String,
}

impl HttpTransport {
    pub fn new(config: &SoapConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            header_namespace: config.header_namespace.clone(),
        }
    }
}

impl SoapTransport for HttpTransport {
    fn call(
        &self,
        action: &str,
        params: &XmlValue,
        headers: &[SoapHeader],
    ) -> Result<SoapExchange, TransportError> {
        let request_xml = envelope::build(action, params, headers, &self.header_namespace);
        tracing::debug!(action, endpoint = %self.endpoint, "sending SOAP request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{action}\""))
            .body(request_xml.clone())
            .send()
            .map_err(|e| TransportError::Send {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        let response_headers = format_response_headers(status, response.headers());
        let response_xml = response.text().map_err(TransportError::Read)?;
        tracing::debug!(status = status.as_u16(), "received SOAP response");

        Ok(SoapExchange {
            request_xml,
            response_xml,
            response_headers,
        })
    }
}

/// Render the status line and headers the way they arrived on the wire.
fn format_response_headers(status: reqwest::StatusCode, headers: &HeaderMap) -> String {
    let mut lines = vec![format!(
        "HTTP/1.1 {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )];
    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<binary>");
        lines.push(format!("{name}: {value}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn response_headers_start_with_the_status_line() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/xml"));
        let rendered = format_response_headers(reqwest::StatusCode::OK, &headers);
        assert!(rendered.starts_with("HTTP/1.1 200 OK\n"));
        assert!(rendered.contains("content-type: text/xml"));
    }
}
