//! Nominatim / OpenStreetMap reverse geocoder client.
//!
//! Primary address source. The public instance has strict usage rules:
//! **1 request per second** maximum and an identifying `User-Agent`.
//! Lookups pass through a [`RequestGate`] shared by all clones of the
//! geocoder, so concurrent requests are dispatched one delay apart.
//!
//! See <https://nominatim.org/release-docs/develop/api/Reverse/>

use std::time::Duration;

use async_trait::async_trait;
use landslide_risk_models::{AddressComponents, AddressResult, AddressSource, Coordinate};

use crate::{AddressStrategy, GeocodeError, address, retry, throttle::RequestGate};

/// Default `User-Agent` sent to Nominatim.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "landslide-risk-diy/",
    env!("CARGO_PKG_VERSION"),
    " (reverse geocoding for landslide risk analysis)"
);

/// `Accept-Language` header preferring Indonesian names.
pub const ACCEPT_LANGUAGE: &str = "id-ID,id;q=0.9,en;q=0.8";

/// Zoom level for reverse lookups (major streets / villages).
const REVERSE_ZOOM: &str = "16";

/// Reverse geocodes a coordinate against a Nominatim-compatible
/// `/reverse` endpoint.
///
/// The caller is responsible for rate limiting. `extra_query` carries
/// provider-specific parameters (e.g., an API key).
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request fails, the provider
/// answers with a non-success status, or the body has no usable address.
pub async fn reverse(
    client: &reqwest::Client,
    base_url: &str,
    coord: Coordinate,
    extra_query: &[(&str, &str)],
) -> Result<AddressComponents, GeocodeError> {
    let url = format!("{}/reverse", base_url.trim_end_matches('/'));
    let lat = coord.latitude.to_string();
    let lon = coord.longitude.to_string();

    let resp = retry::send(|| {
        client
            .get(&url)
            .query(&[
                ("format", "jsonv2"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("zoom", REVERSE_ZOOM),
                ("addressdetails", "1"),
                ("accept-language", "id"),
            ])
            .query(extra_query)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
    })
    .await?;

    let body: serde_json::Value = resp.json().await?;
    address::parse_reverse_response(&body)
}

/// Builds the shared HTTP client for remote geocoders.
///
/// # Errors
///
/// Returns [`GeocodeError::Http`] if the TLS backend cannot be
/// initialized.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, GeocodeError> {
    Ok(reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?)
}

/// Primary reverse geocoder backed by Nominatim.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
    gate: RequestGate,
}

impl NominatimGeocoder {
    /// Creates a geocoder for `base_url` dispatching at most one request
    /// per `delay`.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: String, delay: Duration) -> Self {
        Self {
            client,
            base_url,
            gate: RequestGate::new(delay),
        }
    }
}

#[async_trait]
impl AddressStrategy for NominatimGeocoder {
    fn source(&self) -> AddressSource {
        AddressSource::PrimaryGeocoder
    }

    async fn resolve(&self, coord: Coordinate) -> Result<AddressResult, GeocodeError> {
        self.gate.wait().await;

        let components = reverse(&self.client, &self.base_url, coord, &[]).await?;

        Ok(AddressResult {
            address: address::compose(&components),
            source: self.source(),
            components,
        })
    }
}
