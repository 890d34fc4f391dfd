//! Request DTOs for the catalog service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the cache toggle operation (PUT /cache/enabled)
///
/// # Fields
/// - `enabled`: The desired state of the caching flag
#[derive(Debug, Clone, Deserialize)]
pub struct CacheToggleRequest {
    /// Whether caching should be on
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_request_deserialize() {
        let json = r#"{"enabled": false}"#;
        let req: CacheToggleRequest = serde_json::from_str(json).unwrap();
        assert!(!req.enabled);
    }

    #[test]
    fn test_toggle_request_rejects_missing_field() {
        let result = serde_json::from_str::<CacheToggleRequest>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_toggle_request_rejects_non_bool() {
        let result = serde_json::from_str::<CacheToggleRequest>(r#"{"enabled": "yes"}"#);
        assert!(result.is_err());
    }
}
