//! Error types for descriptor parsing

/// Errors raised while interpreting descriptor contents
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// URI does not use the `content` scheme
    #[error("unsupported uri scheme in {uri:?} (expected content://)")]
    UnsupportedScheme {
        /// Offending URI
        uri: String,
    },

    /// URI has no authority component
    #[error("content uri {uri:?} has no authority")]
    MissingAuthority {
        /// Offending URI
        uri: String,
    },

    /// URI has no method path segment
    #[error("content uri {uri:?} has no method segment")]
    MissingMethod {
        /// Offending URI
        uri: String,
    },

    /// Component name is not `package/class`
    #[error("invalid component name: {0:?}")]
    InvalidComponent(String),
}

impl DescriptorError {
    /// The raw input that failed to parse
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::UnsupportedScheme { uri }
            | Self::MissingAuthority { uri }
            | Self::MissingMethod { uri } => uri,
            Self::InvalidComponent(raw) => raw,
        }
    }
}
