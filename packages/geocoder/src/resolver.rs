//! Ordered address resolution chain.
//!
//! [`AddressResolver::resolve`] tries each [`AddressStrategy`] in order
//! and returns the first success. The zone fallback is always the final
//! stage, so resolution cannot fail.

use std::{collections::BTreeMap, fmt, time::Duration};

use async_trait::async_trait;
use landslide_risk_geography::zone_name;
use landslide_risk_models::{
    AddressComponents, AddressResult, AddressSource, Coordinate, PROVINCE_NAME,
};

use crate::{
    AddressStrategy, GeocodeError,
    gazetteer::Gazetteer,
    locationiq::LocationIqGeocoder,
    nominatim::{self, NominatimGeocoder},
    service_registry::{self, ProviderConfig},
};

/// Default per-request timeout for remote geocoders.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

/// Runtime overrides for the remote geocoders.
#[derive(Clone)]
pub struct GeocoderSettings {
    /// Replaces the Nominatim base URL from the service registry.
    pub nominatim_url: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Replaces every provider's `rate_limit_ms`.
    pub delay: Option<Duration>,
    /// `User-Agent` header.
    pub user_agent: String,
    /// API keys by environment variable name.
    pub credentials: BTreeMap<String, String>,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            nominatim_url: None,
            timeout: DEFAULT_TIMEOUT,
            delay: None,
            user_agent: nominatim::DEFAULT_USER_AGENT.to_string(),
            credentials: BTreeMap::new(),
        }
    }
}

impl GeocoderSettings {
    /// Fills [`Self::credentials`] with the API keys named by the
    /// service registry (`api_key_env`), read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Parse`] if the service registry is
    /// malformed.
    pub fn load_credentials<F>(&mut self, lookup: F) -> Result<(), GeocodeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for service in service_registry::all_services()? {
            if let ProviderConfig::LocationIq { api_key_env, .. } = service.provider
                && let Some(key) = lookup(&api_key_env)
            {
                self.credentials.insert(api_key_env, key);
            }
        }
        Ok(())
    }
}

impl fmt::Debug for GeocoderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocoderSettings")
            .field("nominatim_url", &self.nominatim_url)
            .field("timeout", &self.timeout)
            .field("delay", &self.delay)
            .field("user_agent", &self.user_agent)
            .field("credentials", &self.credentials.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Last-resort stage: the coarse geographic zone name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneFallback;

impl ZoneFallback {
    /// Always-available address for `coord`.
    #[must_use]
    pub fn address(coord: Coordinate) -> AddressResult {
        AddressResult {
            address: format!("{}, {PROVINCE_NAME}", zone_name(coord)),
            source: AddressSource::ZoneFallback,
            components: AddressComponents {
                province: Some(PROVINCE_NAME.to_string()),
                ..AddressComponents::default()
            },
        }
    }
}

#[async_trait]
impl AddressStrategy for ZoneFallback {
    fn source(&self) -> AddressSource {
        AddressSource::ZoneFallback
    }

    async fn resolve(&self, coord: Coordinate) -> Result<AddressResult, GeocodeError> {
        Ok(Self::address(coord))
    }
}

/// Runs address strategies in order until one succeeds.
pub struct AddressResolver {
    strategies: Vec<Box<dyn AddressStrategy>>,
}

impl fmt::Debug for AddressResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressResolver")
            .field(
                "stages",
                &self
                    .strategies
                    .iter()
                    .map(|s| s.source())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl AddressResolver {
    /// Creates a resolver from explicit strategies. The zone fallback is
    /// appended.
    #[must_use]
    pub fn new(mut strategies: Vec<Box<dyn AddressStrategy>>) -> Self {
        strategies.push(Box::new(ZoneFallback));
        Self { strategies }
    }

    /// Builds the standard chain: enabled remote services by priority,
    /// then the gazetteer, then the zone fallback.
    ///
    /// Services whose credential is missing are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the service registry cannot be parsed
    /// or the HTTP client cannot be built.
    pub fn from_settings(settings: &GeocoderSettings) -> Result<Self, GeocodeError> {
        let client = nominatim::build_client(&settings.user_agent, settings.timeout)?;
        let mut strategies: Vec<Box<dyn AddressStrategy>> = Vec::new();

        for service in service_registry::enabled_services()? {
            let delay = settings
                .delay
                .unwrap_or_else(|| Duration::from_millis(service.rate_limit_ms()));

            match service.provider {
                ProviderConfig::Nominatim { base_url, .. } => {
                    let base_url = settings.nominatim_url.clone().unwrap_or(base_url);
                    log::info!("Geocoder stage: {} at {base_url}", service.name);
                    strategies.push(Box::new(NominatimGeocoder::new(
                        client.clone(),
                        base_url,
                        delay,
                    )));
                }
                ProviderConfig::LocationIq {
                    base_url,
                    api_key_env,
                    ..
                } => {
                    let api_key = settings.credentials.get(&api_key_env).cloned();
                    match LocationIqGeocoder::new(
                        client.clone(),
                        base_url,
                        &api_key_env,
                        api_key,
                        delay,
                    ) {
                        Ok(geocoder) => {
                            log::info!("Geocoder stage: {}", service.name);
                            strategies.push(Box::new(geocoder));
                        }
                        Err(e) => log::info!("Skipping {}: {e}", service.name),
                    }
                }
            }
        }

        strategies.push(Box::new(Gazetteer));
        Ok(Self::new(strategies))
    }

    /// Number of stages, including the zone fallback.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Always `false`: the zone fallback is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Resolves `coord` to an address. Never fails.
    pub async fn resolve(&self, coord: Coordinate) -> AddressResult {
        for strategy in &self.strategies {
            match strategy.resolve(coord).await {
                Ok(result) if !result.address.trim().is_empty() => {
                    log::debug!(
                        "Resolved ({}, {}) via {}",
                        coord.latitude,
                        coord.longitude,
                        result.source
                    );
                    return result;
                }
                Ok(_) => {
                    log::warn!("{} returned a blank address", strategy.source());
                }
                Err(e) => {
                    log::warn!(
                        "{} failed for ({}, {}): {e}",
                        strategy.source(),
                        coord.latitude,
                        coord.longitude
                    );
                }
            }
        }

        ZoneFallback::address(coord)
    }
}
