#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reverse geocoding for the landslide risk service.
//!
//! Turns a coordinate into a human-readable Indonesian address using an
//! ordered chain of strategies configured via TOML files in `services/`:
//!
//! 1. **Nominatim / OpenStreetMap** (priority 1): free, 1 req/sec rate
//!    limit, identifying `User-Agent` required.
//! 2. **LocationIQ** (priority 2): Nominatim-compatible, only used when
//!    an API key is configured.
//! 3. **Local gazetteer**: fixed table of known places in the province.
//! 4. **Zone fallback**: coarse geographic zone name, always succeeds.
//!
//! The [`resolver::AddressResolver`] runs the strategies in order and
//! stops at the first success. Remote failures are logged and absorbed,
//! so resolution never fails. Each remote provider is paced by a shared
//! [`throttle::RequestGate`], so concurrent lookups still reach it at the
//! configured rate.

pub mod address;
pub mod gazetteer;
pub mod locationiq;
pub mod nominatim;
pub mod resolver;
pub mod retry;
pub mod service_registry;
pub mod throttle;

#[cfg(test)]
mod test_support;

use async_trait::async_trait;
use landslide_risk_models::{AddressResult, AddressSource, Coordinate};
use thiserror::Error;

pub use resolver::{AddressResolver, GeocoderSettings};

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response or configuration parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// The provider answered but had no usable address for the point.
    #[error("No address found")]
    EmptyAddress,

    /// The provider requires an API key that is not configured.
    #[error("Missing credential: {env_var} is not set")]
    MissingCredential {
        /// Environment variable expected to hold the key.
        env_var: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Non-success HTTP status.
    #[error("HTTP status {status}")]
    Status {
        /// Status code returned by the provider.
        status: u16,
    },
}

/// One stage of the address resolution chain.
#[async_trait]
pub trait AddressStrategy: Send + Sync {
    /// Which stage this strategy reports as the address source.
    fn source(&self) -> AddressSource;

    /// Resolves `coord` to an address.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if this stage cannot produce an address;
    /// the resolver then moves on to the next stage.
    async fn resolve(&self, coord: Coordinate) -> Result<AddressResult, GeocodeError>;
}
