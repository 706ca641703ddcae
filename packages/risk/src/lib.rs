#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Landslide risk estimation for the Yogyakarta special region.
//!
//! The pipeline is a chain of pure functions over a [`Coordinate`]:
//!
//! 1. [`validate`] rejects malformed or out-of-region input.
//! 2. [`estimator`] derives elevation, slope, rainfall, land cover, and
//!    soil type from ordered rectangle tables and positional gradients.
//!    Values inside a band are drawn from an injected [`rand::Rng`], so a
//!    seeded generator makes every result reproducible.
//! 3. [`scorer`] combines the profile into a 0-100 score and tier.
//! 4. [`geology`] labels the qualitative hazard zone.
//!
//! [`fallback`] synthesizes a degraded, coordinate-only result for when
//! the full analysis cannot complete.
//!
//! This is a heuristic simulation, not a calibrated geophysical model.

pub mod estimator;
pub mod fallback;
pub mod geology;
pub mod scorer;
pub mod validate;

use landslide_risk_models::{Coordinate, EnvironmentalProfile, RiskAssessment};
use rand::Rng;
use thiserror::Error;

pub use validate::{parse_coordinate, validate};

/// Input rejected before any analysis runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Coordinates missing or not finite numbers.
    #[error("Malformed input: {message}")]
    Malformed {
        /// Description of what was wrong.
        message: String,
    },

    /// Coordinates outside the analysis bounding box.
    #[error("Coordinate ({latitude}, {longitude}) is outside the analysis region")]
    OutOfRegion {
        /// Rejected latitude.
        latitude: f64,
        /// Rejected longitude.
        longitude: f64,
    },
}

/// Errors from the risk pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A derived value violated an invariant.
    #[error("Computation error: {message}")]
    Computation {
        /// Description of the violated invariant.
        message: String,
    },
}

/// Environmental profile and risk assessment for one coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Derived environmental parameters.
    pub profile: EnvironmentalProfile,
    /// Score, tier, and hazard zone.
    pub assessment: RiskAssessment,
}

/// Runs estimation, scoring, and geological classification.
///
/// `coord` is expected to be validated already.
///
/// # Errors
///
/// Returns [`RiskError::Computation`] if a derived parameter is not a
/// finite, non-negative number.
pub fn analyze<R: Rng + ?Sized>(coord: Coordinate, rng: &mut R) -> Result<Analysis, RiskError> {
    let profile = estimator::estimate(coord, rng);
    check_profile(&profile)?;

    let assessment = scorer::score(coord, &profile);
    log::debug!(
        "Analysis at ({}, {}): score={} level={} geology={}",
        coord.latitude,
        coord.longitude,
        assessment.risk_score,
        assessment.risk_level,
        assessment.geological_risk,
    );

    Ok(Analysis {
        profile,
        assessment,
    })
}

fn check_profile(profile: &EnvironmentalProfile) -> Result<(), RiskError> {
    for (name, value) in [
        ("elevation", profile.elevation),
        ("slope", profile.slope),
        ("rainfall", profile.rainfall),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RiskError::Computation {
                message: format!("{name} is {value}"),
            });
        }
    }
    Ok(())
}
