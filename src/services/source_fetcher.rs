//! Source fetching for the viewer.
//!
//! Retrieves the raw text content of a resolved address. The HTTP
//! implementation reads the response line by line, preserving line
//! order and joining with line feeds, until the stream ends.

#[cfg(feature = "network")]
use std::io::{BufRead, BufReader};
#[cfg(feature = "network")]
use std::time::Duration;

use crate::services::address_resolver::ResolvedAddress;
use crate::types::errors::FetchError;
#[cfg(feature = "network")]
use crate::types::settings::NetworkSettings;

/// Trait defining the source retrieval interface.
///
/// An empty result is a valid outcome distinct from failure; callers
/// check the returned text for emptiness separately.
pub trait SourceFetcherTrait {
    fn fetch(&self, address: &ResolvedAddress) -> Result<String, FetchError>;
}

/// Blocking HTTP fetcher.
///
/// The call blocks the invoking context until the transfer completes or
/// fails; there is no background worker and no cancellation.
#[cfg(feature = "network")]
pub struct HttpSourceFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "network")]
impl HttpSourceFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_settings(settings: &NetworkSettings) -> Result<Self, FetchError> {
        Self::new(
            Duration::from_secs(settings.timeout_secs),
            &settings.user_agent,
        )
    }
}

#[cfg(feature = "network")]
impl SourceFetcherTrait for HttpSourceFetcher {
    fn fetch(&self, address: &ResolvedAddress) -> Result<String, FetchError> {
        let response = self
            .client
            .get(address.url().clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let reader = BufReader::new(response);
        let mut source = String::new();
        for line in reader.lines() {
            let line = line.map_err(|e| FetchError::Decode(e.to_string()))?;
            source.push_str(&line);
            source.push('\n');
        }
        Ok(source)
    }
}
