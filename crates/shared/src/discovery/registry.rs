//! Static service registry mapping logical names to base URLs
//!
//! The registry is the local stand-in for an external discovery system:
//! handlers refer to remote services by logical name (e.g.
//! `"micro-service2"`) and the registry resolves that name to a network
//! address at call time. Entries are loaded once at process start from
//! configuration and are immutable afterwards, so lookups are lock-free
//! and safe to share across concurrent requests.

use crate::error::{MicrohelloError, Result};
use std::collections::HashMap;
use tracing::debug;
use url::Url;

/// Immutable map of logical service names to validated base URLs
///
/// # Thread Safety
///
/// The registry is read-only after construction and can be shared freely
/// behind an `Arc` across request handler tasks.
///
/// # Examples
///
/// ```rust
/// use microhello_shared::discovery::ServiceRegistry;
///
/// let registry =
///     ServiceRegistry::from_spec("micro-service2=http://127.0.0.1:8081").unwrap();
/// let base = registry.resolve("micro-service2").unwrap();
/// assert_eq!(base.as_str(), "http://127.0.0.1:8081/");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRegistry {
    entries: HashMap<String, Url>,
}

impl ServiceRegistry {
    /// Builds a registry from a comma-separated `name=base_url` specification
    ///
    /// Entries are trimmed and empty segments are ignored, so trailing
    /// commas are harmless. Every base URL must parse and use the `http`
    /// or `https` scheme; a malformed entry fails the whole specification
    /// so misconfiguration is caught at startup rather than on the first
    /// outbound call.
    ///
    /// # Arguments
    ///
    /// * `spec` - Specification string, e.g.
    ///   `"micro-service2=http://127.0.0.1:8081,billing=http://10.0.0.3:9000"`
    ///
    /// # Errors
    ///
    /// Returns a configuration error when an entry is missing the `=`
    /// separator, has an empty name, or carries an invalid base URL.
    pub fn from_spec(spec: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for segment in spec.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let (name, base_url) = segment.split_once('=').ok_or_else(|| {
                MicrohelloError::configuration(
                    format!("Invalid service map entry '{}': expected name=base_url", segment),
                    None,
                )
            })?;

            let name = name.trim();
            if name.is_empty() {
                return Err(MicrohelloError::configuration(
                    format!("Invalid service map entry '{}': empty service name", segment),
                    None,
                ));
            }

            let url = Url::parse(base_url.trim()).map_err(|e| {
                MicrohelloError::configuration(
                    format!("Invalid base URL for service '{}': {}", name, e),
                    Some(Box::new(e)),
                )
            })?;

            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(MicrohelloError::configuration(
                    format!(
                        "Invalid base URL for service '{}': unsupported scheme '{}'",
                        name,
                        url.scheme()
                    ),
                    None,
                ));
            }

            entries.insert(name.to_string(), url);
        }

        debug!(service_count = entries.len(), "Service registry loaded");

        Ok(Self { entries })
    }

    /// Builds a registry from pre-validated entries
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Url)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Resolves a logical service name to its base URL
    ///
    /// Resolution is a plain map lookup performed once per outbound call.
    ///
    /// # Errors
    ///
    /// Returns [`MicrohelloError::ServiceNotFound`] when the name has no
    /// registry entry.
    pub fn resolve(&self, name: &str) -> Result<&Url> {
        self.entries
            .get(name)
            .ok_or_else(|| MicrohelloError::service_not_found(name))
    }

    /// Returns whether the registry has an entry for the given name
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of registered services
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_spec_single_entry() {
        let registry = ServiceRegistry::from_spec("micro-service2=http://127.0.0.1:8081").unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("micro-service2"));
        assert_eq!(
            registry.resolve("micro-service2").unwrap().as_str(),
            "http://127.0.0.1:8081/"
        );
    }

    #[test]
    fn test_from_spec_multiple_entries_with_whitespace() {
        let registry = ServiceRegistry::from_spec(
            " micro-service2 = http://127.0.0.1:8081 , billing = https://10.0.0.3:9000 ,",
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("micro-service2"));
        assert!(registry.contains("billing"));
    }

    #[test]
    fn test_from_spec_rejects_missing_separator() {
        let result = ServiceRegistry::from_spec("micro-service2");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("expected name=base_url"));
    }

    #[test]
    fn test_from_spec_rejects_empty_name() {
        let result = ServiceRegistry::from_spec("=http://127.0.0.1:8081");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty service name"));
    }

    #[test]
    fn test_from_spec_rejects_invalid_url() {
        let result = ServiceRegistry::from_spec("micro-service2=not a url");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            MicrohelloError::Configuration { .. }
        ));
    }

    #[test]
    fn test_from_spec_rejects_unsupported_scheme() {
        let result = ServiceRegistry::from_spec("micro-service2=ftp://127.0.0.1:8081");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_from_spec_empty_specification() {
        let registry = ServiceRegistry::from_spec("").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_from_entries() {
        let registry = ServiceRegistry::from_entries([(
            "micro-service2".to_string(),
            Url::parse("http://127.0.0.1:8081").unwrap(),
        )]);

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("micro-service2"));
    }

    #[test]
    fn test_resolve_unknown_name() {
        let registry = ServiceRegistry::from_spec("micro-service2=http://127.0.0.1:8081").unwrap();

        let result = registry.resolve("no-such-service");
        assert!(matches!(
            result.unwrap_err(),
            MicrohelloError::ServiceNotFound { .. }
        ));
    }
}
