//! Engine configuration.
//!
//! This module provides a clean configuration struct for library usage,
//! without any CLI framework dependencies.
//!
//! The header grammar, the month-first date convention and the 50-message
//! window are fixed. Only the self-support policy is configurable.
//!
//! # Example
//!
//! ```rust
//! use linkpulse::config::{EngineConfig, SelfSupportPolicy};
//!
//! let config = EngineConfig::new().with_self_support(SelfSupportPolicy::Ignore);
//! assert_eq!(config.self_support, SelfSupportPolicy::Ignore);
//! ```

use serde::{Deserialize, Serialize};

/// Number of matched messages a supportive reaction may trail its post by.
pub const WINDOW_SIZE: usize = 50;

/// What to do when a member "supports" their own post.
///
/// Chat groups routinely see authors thanking people under their own link
/// ("great, thanks all!"), which the classifier reads as support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfSupportPolicy {
    /// Record the event like any other (default).
    #[default]
    Allow,
    /// Drop the event when the linked post belongs to the supporter.
    Ignore,
}

impl std::fmt::Display for SelfSupportPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelfSupportPolicy::Allow => write!(f, "allow"),
            SelfSupportPolicy::Ignore => write!(f, "ignore"),
        }
    }
}

/// Configuration for a single parse.
///
/// # Example
///
/// ```rust
/// use linkpulse::config::{EngineConfig, SelfSupportPolicy};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.self_support, SelfSupportPolicy::Allow);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Handling of reactions to one's own post (default: allow)
    #[serde(default)]
    pub self_support: SelfSupportPolicy,
}

impl EngineConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the self-support policy.
    #[must_use]
    pub fn with_self_support(mut self, policy: SelfSupportPolicy) -> Self {
        self.self_support = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_self_support() {
        assert_eq!(EngineConfig::new().self_support, SelfSupportPolicy::Allow);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new().with_self_support(SelfSupportPolicy::Ignore);
        assert_eq!(config.self_support, SelfSupportPolicy::Ignore);
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(SelfSupportPolicy::Allow.to_string(), "allow");
        assert_eq!(SelfSupportPolicy::Ignore.to_string(), "ignore");
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_config_serde() {
        let config = EngineConfig::new().with_self_support(SelfSupportPolicy::Ignore);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"self_support":"ignore"}"#);

        let parsed: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, EngineConfig::default());
    }
}
