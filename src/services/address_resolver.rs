//! Address resolution for the source viewer.
//!
//! Validates and normalizes a raw address string into a fetchable address.
//! A bare address that fails to parse verbatim is retried once with the
//! configured default scheme prepended.

use std::fmt;

use url::Url;

use crate::types::errors::AddressError;

/// Scheme prefixes accepted without a fallback retry.
const RECOGNIZED_SCHEMES: &[&str] = &["http://", "https://"];

/// A validated, normalized address ready for fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    url: Url,
}

impl ResolvedAddress {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Trait defining the address resolution interface.
pub trait AddressResolverTrait {
    fn resolve(&self, raw: &str) -> Result<ResolvedAddress, AddressError>;
}

/// Resolver backed by the `url` parser.
pub struct AddressResolver {
    default_scheme: String,
}

impl AddressResolver {
    /// Creates a resolver that falls back to `default_scheme` (without
    /// the `://` suffix, e.g. `"http"`) for bare addresses.
    pub fn new(default_scheme: &str) -> Self {
        Self {
            default_scheme: default_scheme.trim_end_matches("://").to_string(),
        }
    }

    fn attempt(candidate: &str) -> Option<Url> {
        Url::parse(candidate).ok()
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::new("http")
    }
}

impl AddressResolverTrait for AddressResolver {
    /// Resolves `raw` into a fetchable address.
    ///
    /// Blank input fails immediately. Input carrying a recognized scheme
    /// prefix gets a single direct parse. Anything else is parsed
    /// verbatim first and, on failure, retried with the default scheme
    /// prepended. No attempt has side effects.
    fn resolve(&self, raw: &str) -> Result<ResolvedAddress, AddressError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }

        if RECOGNIZED_SCHEMES.iter().any(|s| trimmed.starts_with(s)) {
            return Self::attempt(trimmed)
                .map(|url| ResolvedAddress { url })
                .ok_or_else(|| AddressError::Malformed(trimmed.to_string()));
        }

        let url = Self::attempt(trimmed).or_else(|| {
            Self::attempt(&format!("{}://{}", self.default_scheme, trimmed))
        });

        url.map(|url| ResolvedAddress { url })
            .ok_or_else(|| AddressError::Malformed(trimmed.to_string()))
    }
}
