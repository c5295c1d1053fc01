//! Error types for gesso_patina.

use thiserror::Error;

/// Rule configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No registered rule has this name
    #[error("unknown rule `{name}`")]
    UnknownRule { name: String },

    /// Options that do not deserialize into the rule's option type
    #[error("invalid options for `{rule}`: {source}")]
    InvalidOptions {
        rule: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
