//! `LocationIQ` reverse geocoder client.
//!
//! Secondary address source, tried when Nominatim fails. Speaks the same
//! `/reverse` protocol as Nominatim plus a `key` query parameter, so it
//! shares [`nominatim::reverse`] and the address parser.
//!
//! See <https://docs.locationiq.com/reference/reverse-api>

use std::time::Duration;

use async_trait::async_trait;
use landslide_risk_models::{AddressResult, AddressSource, Coordinate};

use crate::{AddressStrategy, GeocodeError, address, nominatim, throttle::RequestGate};

/// Secondary reverse geocoder backed by `LocationIQ`.
#[derive(Clone)]
pub struct LocationIqGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    gate: RequestGate,
}

impl std::fmt::Debug for LocationIqGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationIqGeocoder")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("interval", &self.gate.interval())
            .finish_non_exhaustive()
    }
}

impl LocationIqGeocoder {
    /// Creates a geocoder authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::MissingCredential`] if `api_key` is absent
    /// or blank.
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        api_key_env: &str,
        api_key: Option<String>,
        delay: Duration,
    ) -> Result<Self, GeocodeError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GeocodeError::MissingCredential {
                env_var: api_key_env.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            api_key,
            gate: RequestGate::new(delay),
        })
    }
}

#[async_trait]
impl AddressStrategy for LocationIqGeocoder {
    fn source(&self) -> AddressSource {
        AddressSource::SecondaryGeocoder
    }

    async fn resolve(&self, coord: Coordinate) -> Result<AddressResult, GeocodeError> {
        self.gate.wait().await;

        let components = nominatim::reverse(
            &self.client,
            &self.base_url,
            coord,
            &[("key", self.api_key.as_str())],
        )
        .await?;

        Ok(AddressResult {
            address: address::compose(&components),
            source: self.source(),
            components,
        })
    }
}
