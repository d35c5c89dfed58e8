//! # Soapman
//!
//! A testing helper for SOAP endpoints: issue calls against a service, then
//! assert on the captured XML and HTTP status.
//!
//! A [`SoapSession`] owns the artifacts of its most recent call: the raw
//! request and response envelopes, the decoded body payload, and the HTTP
//! status. Assertions compare canonical XML forms, check structural
//! containment of an element shape, and query the response with XPath or a
//! small CSS subset. Pending SOAP headers accumulate on the session across
//! calls until explicitly cleared.
//!
//! ```no_run
//! use soapman::{SoapConfig, SoapSession, XmlValue};
//!
//! fn main() -> Result<(), soapman::Error> {
//!     let config = SoapConfig::new("https://example.com/weather");
//!     let mut session = SoapSession::new(config)?;
//!
//!     let params = XmlValue::from(serde_json::json!({ "City": "Reykjavik" }));
//!     session.call("GetForecast", params)?;
//!
//!     session.assert_response_code(200)?;
//!     session.assert_response_contains_structure("<GetForecastResponse><City/></GetForecastResponse>")?;
//!     session.assert_response_contains_xpath("//*[local-name()='City']")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod soap;
pub mod xml;

pub use config::{SoapConfig, load_config};
pub use error::Error;
pub use soap::envelope::SOAP_ENVELOPE_NS;
pub use soap::header::SoapHeader;
pub use soap::session::SoapSession;
pub use soap::transport::{HttpTransport, SoapExchange, SoapTransport, TransportError};
pub use soap::value::XmlValue;
