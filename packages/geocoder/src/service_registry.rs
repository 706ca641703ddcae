//! Compile-time registry of reverse geocoding service configurations.
//!
//! Each remote provider is defined in a TOML file under `services/`.
//! The registry embeds these at compile time and exposes them via
//! [`all_services`] and [`enabled_services`].

use serde::Deserialize;

use crate::GeocodeError;

/// A geocoding service configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingService {
    /// Unique identifier (e.g., `"nominatim"`, `"locationiq"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this service is active in the resolution chain.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Execution order; lower values run first.
    pub priority: u32,
    /// Provider-specific configuration.
    pub provider: ProviderConfig,
}

/// Provider-specific configuration, tagged by `type` in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// Nominatim / `OpenStreetMap` reverse geocoder.
    Nominatim {
        /// API base URL without the `/reverse` path.
        base_url: String,
        /// Delay before each request in milliseconds.
        rate_limit_ms: u64,
    },
    /// `LocationIQ` reverse geocoder (Nominatim-compatible).
    LocationIq {
        /// API base URL without the `/reverse` path.
        base_url: String,
        /// Environment variable holding the API key.
        api_key_env: String,
        /// Delay before each request in milliseconds.
        #[serde(default)]
        rate_limit_ms: u64,
    },
}

const fn default_true() -> bool {
    true
}

impl GeocodingService {
    /// Returns the provider's base URL regardless of variant.
    #[must_use]
    pub fn base_url(&self) -> &str {
        match &self.provider {
            ProviderConfig::Nominatim { base_url, .. }
            | ProviderConfig::LocationIq { base_url, .. } => base_url,
        }
    }

    /// Returns the configured pre-request delay in milliseconds.
    #[must_use]
    pub const fn rate_limit_ms(&self) -> u64 {
        match &self.provider {
            ProviderConfig::Nominatim { rate_limit_ms, .. }
            | ProviderConfig::LocationIq { rate_limit_ms, .. } => *rate_limit_ms,
        }
    }
}

// ── Compile-time embedded TOML files ────────────────────────────────

const SERVICE_TOMLS: &[(&str, &str)] = &[
    ("nominatim", include_str!("../services/nominatim.toml")),
    ("locationiq", include_str!("../services/locationiq.toml")),
];

#[cfg(test)]
const EXPECTED_SERVICE_COUNT: usize = 2;

/// Returns all geocoding service configurations (enabled and disabled).
///
/// # Errors
///
/// Returns [`GeocodeError::Parse`] if an embedded TOML config is
/// malformed.
pub fn all_services() -> Result<Vec<GeocodingService>, GeocodeError> {
    SERVICE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str).map_err(|e| GeocodeError::Parse {
                message: format!("Failed to parse geocoding service '{name}': {e}"),
            })
        })
        .collect()
}

/// Returns only enabled services, sorted by priority (ascending).
///
/// # Errors
///
/// Returns [`GeocodeError::Parse`] if an embedded TOML config is
/// malformed.
pub fn enabled_services() -> Result<Vec<GeocodingService>, GeocodeError> {
    let mut services: Vec<GeocodingService> =
        all_services()?.into_iter().filter(|s| s.enabled).collect();
    services.sort_by_key(|s| s.priority);
    Ok(services)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn loads_all_services() {
        let services = all_services().unwrap();
        assert_eq!(services.len(), EXPECTED_SERVICE_COUNT);
    }

    #[test]
    fn service_ids_are_unique() {
        let services = all_services().unwrap();
        let mut seen = BTreeSet::new();
        for svc in &services {
            assert!(seen.insert(&svc.id), "Duplicate service ID: {}", svc.id);
        }
    }

    #[test]
    fn all_services_have_required_fields() {
        for svc in &all_services().unwrap() {
            assert!(!svc.id.is_empty(), "Service has empty id");
            assert!(!svc.name.is_empty(), "Service {} has empty name", svc.id);
            assert!(
                !svc.base_url().is_empty(),
                "Service {} has empty base_url",
                svc.id
            );
        }
    }

    #[test]
    fn nominatim_runs_first_at_one_request_per_second() {
        let services = enabled_services().unwrap();
        let first = services.first().unwrap();
        assert_eq!(first.id, "nominatim");
        assert_eq!(first.rate_limit_ms(), 1000);
        for window in services.windows(2) {
            assert!(
                window[0].priority <= window[1].priority,
                "Services not sorted by priority: {} ({}) > {} ({})",
                window[0].id,
                window[0].priority,
                window[1].id,
                window[1].priority
            );
        }
    }

    #[test]
    fn nominatim_provider_carries_only_url_and_rate() {
        let services = all_services().unwrap();
        let nominatim = services.iter().find(|s| s.id == "nominatim").unwrap();
        assert!(matches!(
            &nominatim.provider,
            ProviderConfig::Nominatim { base_url, rate_limit_ms: 1000 }
                if base_url == "https://nominatim.openstreetmap.org"
        ));
    }

    #[test]
    fn locationiq_is_credential_gated() {
        let services = all_services().unwrap();
        let locationiq = services.iter().find(|s| s.id == "locationiq").unwrap();
        assert!(matches!(
            &locationiq.provider,
            ProviderConfig::LocationIq { api_key_env, .. } if api_key_env == "LOCATIONIQ_API_KEY"
        ));
    }
}
