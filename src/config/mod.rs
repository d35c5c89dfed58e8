//! # Session Configuration
//!
//! Connection settings for a [`SoapSession`](crate::SoapSession): the
//! endpoint URL and the namespace applied to headers that are added without
//! an explicit one. Configurations can be built in code or loaded from a
//! JSON file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::soap::envelope::SOAP_ENVELOPE_NS;

/// Connection settings for one SOAP session.
#[derive(Debug, Clone, Deserialize)]
pub struct SoapConfig {
    /// Service endpoint URL. Required; validated at session construction.
    pub endpoint: String,
    /// Namespace for headers added without an explicit one. Defaults to the
    /// SOAP 1.1 envelope schema namespace.
    #[serde(default = "default_header_namespace")]
    pub header_namespace: String,
}

fn default_header_namespace() -> String {
    SOAP_ENVELOPE_NS.to_string()
}

impl SoapConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            header_namespace: default_header_namespace(),
        }
    }

    pub fn with_header_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.header_namespace = namespace.into();
        self
    }
}

/// Load a configuration from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<SoapConfig, Error> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| Error::Configuration(format!("Failed to read config file `{}`: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| Error::Configuration(format!("Failed to parse config file `{}`: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_namespace_defaults_to_envelope_schema() {
        let config: SoapConfig =
            serde_json::from_str(r#"{ "endpoint": "http://service.test/soap" }"#).unwrap();
        assert_eq!(config.endpoint, "http://service.test/soap");
        assert_eq!(config.header_namespace, SOAP_ENVELOPE_NS);
    }

    #[test]
    fn explicit_header_namespace_is_kept() {
        let config = SoapConfig::new("http://service.test/soap")
            .with_header_namespace("http://service.test/headers");
        assert_eq!(config.header_namespace, "http://service.test/headers");
    }

    #[test]
    fn missing_config_file_is_a_configuration_error() {
        let err = load_config("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
