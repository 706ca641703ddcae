//! Degraded, coordinate-only analysis.
//!
//! Used when the full pipeline fails unexpectedly. Only the positional
//! gradient and the fixed rectangle lookups are consulted, band midpoints
//! replace random draws, and the geological label is the diagnostic
//! [`GeologicalRisk::Undetermined`].

use landslide_risk_models::{
    Coordinate, EnvironmentalProfile, GeologicalRisk, RiskAssessment, RiskLevel,
};

use crate::{
    Analysis,
    estimator::{self, round_to_tenth},
    scorer,
};

/// Profile derived from position alone.
#[must_use]
pub fn degraded_profile(coord: Coordinate) -> EnvironmentalProfile {
    let elevation = estimator::gradient_elevation(coord).round();
    let slope = round_to_tenth(estimator::slope_band_for_elevation(elevation).midpoint());
    let rainfall = estimator::rainfall_band(coord.latitude).midpoint().round();

    EnvironmentalProfile {
        elevation,
        slope,
        rainfall,
        land_cover: estimator::land_cover(coord),
        soil_type: estimator::soil_type(coord),
    }
}

/// Degraded analysis for `coord`.
#[must_use]
pub fn degraded_analysis(coord: Coordinate) -> Analysis {
    let profile = degraded_profile(coord);
    let risk_score = scorer::risk_score(coord, &profile);

    Analysis {
        assessment: RiskAssessment {
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            geological_risk: GeologicalRisk::Undetermined,
        },
        profile,
    }
}
