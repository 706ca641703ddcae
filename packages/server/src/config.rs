//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `BIND_ADDR` | `127.0.0.1` |
//! | `PORT` | `8080` |
//! | `REGION_SW_LAT`, `REGION_SW_LNG`, `REGION_NE_LAT`, `REGION_NE_LNG` | Yogyakarta box |
//! | `REGION_BUFFER_DEG` | `0.0` |
//! | `RISK_SEED` | `0` |
//! | `BATCH_SPACING_MS` | `1500` |
//! | `NOMINATIM_URL` | from `services/nominatim.toml` |
//! | `GEOCODER_TIMEOUT_SECS` | `6` |
//! | `GEOCODER_DELAY_MS` | per-service `rate_limit_ms` |
//! | `GEOCODER_USER_AGENT` | crate name and version |
//! | `LOCATIONIQ_API_KEY` | unset (stage skipped) |
//!
//! Unparseable values are logged and replaced by the default.

use std::{fmt::Display, str::FromStr, time::Duration};

use landslide_risk_geocoder::GeocoderSettings;
use landslide_risk_models::BoundingBox;

const DEFAULT_BATCH_SPACING_MS: u64 = 1500;

/// Default spacing between address lookups in a batch.
pub const DEFAULT_BATCH_SPACING: Duration = Duration::from_millis(DEFAULT_BATCH_SPACING_MS);

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind_addr: String,
    /// Port to listen on.
    pub port: u16,
    /// Analysis bounding box.
    pub region: BoundingBox,
    /// Tolerance around [`Self::region`], in degrees.
    pub region_buffer: f64,
    /// Base seed mixed into each request's random generator.
    pub risk_seed: u64,
    /// Pause between address lookups in a batch request.
    pub batch_spacing: Duration,
    /// Remote geocoder overrides.
    pub geocoder: GeocoderSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            region: BoundingBox::YOGYAKARTA,
            region_buffer: 0.0,
            risk_seed: 0,
            batch_spacing: DEFAULT_BATCH_SPACING,
            geocoder: GeocoderSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let region = parse_region(&lookup, defaults.region);
        let region_buffer = parse_or(&lookup, "REGION_BUFFER_DEG", defaults.region_buffer);
        let region_buffer = if region_buffer.is_finite() && region_buffer >= 0.0 {
            region_buffer
        } else {
            log::warn!("REGION_BUFFER_DEG must be a non-negative number, using 0.0");
            defaults.region_buffer
        };

        let mut geocoder = defaults.geocoder;
        geocoder.nominatim_url = lookup("NOMINATIM_URL").filter(|url| !url.trim().is_empty());
        let timeout_secs = parse_or(&lookup, "GEOCODER_TIMEOUT_SECS", geocoder.timeout.as_secs());
        if timeout_secs == 0 {
            log::warn!(
                "GEOCODER_TIMEOUT_SECS must be at least 1, using {}",
                geocoder.timeout.as_secs()
            );
        } else {
            geocoder.timeout = Duration::from_secs(timeout_secs);
        }
        geocoder.delay = lookup("GEOCODER_DELAY_MS")
            .is_some()
            .then(|| Duration::from_millis(parse_or(&lookup, "GEOCODER_DELAY_MS", 1000)));
        if let Some(user_agent) = lookup("GEOCODER_USER_AGENT").filter(|ua| !ua.trim().is_empty())
        {
            geocoder.user_agent = user_agent;
        }
        if let Err(e) = geocoder.load_credentials(&lookup) {
            log::warn!("Failed to load geocoder credentials: {e}");
        }

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse_or(&lookup, "PORT", defaults.port),
            region,
            region_buffer,
            risk_seed: parse_or(&lookup, "RISK_SEED", defaults.risk_seed),
            batch_spacing: Duration::from_millis(parse_or(
                &lookup,
                "BATCH_SPACING_MS",
                DEFAULT_BATCH_SPACING_MS,
            )),
            geocoder,
        }
    }
}

/// Parses `key`, falling back to `default` with a warning.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Invalid {key}={raw:?} ({e}), using {default}");
            default
        }
    }
}

fn parse_region<F>(lookup: &F, default: BoundingBox) -> BoundingBox
where
    F: Fn(&str) -> Option<String>,
{
    let region = BoundingBox::new(
        parse_or(lookup, "REGION_SW_LNG", default.west),
        parse_or(lookup, "REGION_SW_LAT", default.south),
        parse_or(lookup, "REGION_NE_LNG", default.east),
        parse_or(lookup, "REGION_NE_LAT", default.north),
    );

    if region.south < region.north && region.west < region.east {
        region
    } else {
        log::warn!("Region corners are not south-west/north-east ordered, using default region");
        default
    }
}
