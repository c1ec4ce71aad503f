//! ContentUri - parsed remote references
//!
//! Tiles point at their remote icon/summary with URIs of the form
//! `content://<authority>/<method>[/<more segments>]`. The authority selects
//! the provider to connect to; the first path segment names the provider
//! method to call.

use crate::error::DescriptorError;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

const SCHEME: &str = "content";

/// Parsed `content://` reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentUri {
    authority: String,
    segments: Vec<String>,
}

impl ContentUri {
    /// Parse a raw reference
    ///
    /// # Errors
    /// Returns error if the scheme is not `content`, the authority is empty,
    /// or there is no method segment.
    pub fn parse(raw: &str) -> Result<Self, DescriptorError> {
        let rest = raw
            .split_once("://")
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case(SCHEME))
            .map(|(_, rest)| rest)
            .ok_or_else(|| DescriptorError::UnsupportedScheme {
                uri: raw.to_string(),
            })?;

        // Query and fragment are not part of the provider address
        let rest = rest.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();

        let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
        if authority.is_empty() {
            return Err(DescriptorError::MissingAuthority {
                uri: raw.to_string(),
            });
        }

        let segments: Vec<String> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        if segments.is_empty() {
            return Err(DescriptorError::MissingMethod {
                uri: raw.to_string(),
            });
        }

        Ok(Self {
            authority: authority.to_string(),
            segments,
        })
    }

    /// Provider authority
    #[inline]
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Provider method (first path segment)
    #[inline]
    #[must_use]
    pub fn method(&self) -> &str {
        // parse() guarantees at least one segment
        self.segments.first().map_or("", String::as_str)
    }

    /// All path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Display for ContentUri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}://{}/{}", self.authority, self.segments.join("/"))
    }
}

impl FromStr for ContentUri {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
