//! Weighted landslide risk score.
//!
//! `score = slope/45·40 + rainfall/300·30 + land cover (≤ 20) + soil (≤ 10)`
//! plus an elevation bonus and a one-off bonus inside historic landslide
//! hotspots, rounded to one decimal place and clamped to `[0, 100]`.

use landslide_risk_geography::{RectRule, first_match, regions};
use landslide_risk_models::{
    Coordinate, EnvironmentalProfile, LandCover, RiskAssessment, RiskLevel, SoilType,
};

use crate::{estimator::round_to_tenth, geology};

/// Weight of the slope factor.
pub const SLOPE_WEIGHT: f64 = 40.0;
/// Weight of the rainfall factor.
pub const RAINFALL_WEIGHT: f64 = 30.0;
/// Weight of the land cover factor.
pub const LAND_COVER_WEIGHT: f64 = 20.0;
/// Weight of the soil factor.
pub const SOIL_WEIGHT: f64 = 10.0;

/// Slope that earns the full slope weight, in degrees.
pub const SLOPE_REFERENCE: f64 = 45.0;
/// Rainfall that earns the full rainfall weight, in mm/month.
pub const RAINFALL_REFERENCE: f64 = 300.0;

/// Bonus for coordinates inside a [`LANDSLIDE_HOTSPOTS`] area.
pub const HOTSPOT_BONUS: f64 = 5.0;

/// Areas with a record of landslides, lahars, or rockfall.
pub const LANDSLIDE_HOTSPOTS: &[RectRule<()>] = &[
    RectRule::new("merapi_hotspot", regions::MERAPI_HOTSPOT, ()),
    RectRule::new("baturagung_ridge", regions::BATURAGUNG_RIDGE, ()),
    RectRule::new("menoreh_hills", regions::MENOREH_HILLS, ()),
];

/// Points for a land cover class; bare land highest, forest lowest.
#[must_use]
pub const fn land_cover_points(land_cover: LandCover) -> f64 {
    match land_cover {
        LandCover::Forest => 4.0,
        LandCover::DenseSettlement => 6.0,
        LandCover::Settlement => 8.0,
        LandCover::Paddy => 10.0,
        LandCover::MixedOpenLand => 16.0,
        LandCover::DryShrub => LAND_COVER_WEIGHT,
    }
}

/// Points for a soil type; limestone clay highest, alluvium lowest.
#[must_use]
pub const fn soil_points(soil_type: SoilType) -> f64 {
    match soil_type {
        SoilType::Grumusol => SOIL_WEIGHT,
        SoilType::Andosol => 8.0,
        SoilType::Mediterranean => 7.0,
        SoilType::Latosol => 5.0,
        SoilType::Alluvial => 3.0,
    }
}

/// Small additive bonus for very high ground.
#[must_use]
pub fn elevation_bonus(elevation: f64) -> f64 {
    if elevation >= 1000.0 {
        5.0
    } else if elevation >= 700.0 {
        3.0
    } else {
        0.0
    }
}

/// Returns [`HOTSPOT_BONUS`] inside a hotspot, otherwise zero.
#[must_use]
pub fn hotspot_bonus(coord: Coordinate) -> f64 {
    if first_match(LANDSLIDE_HOTSPOTS, coord).is_some() {
        HOTSPOT_BONUS
    } else {
        0.0
    }
}

/// Weighted score of the profile alone, before the location bonus.
#[must_use]
pub fn weighted_score(profile: &EnvironmentalProfile) -> f64 {
    let slope = profile.slope / SLOPE_REFERENCE * SLOPE_WEIGHT;
    let rainfall = profile.rainfall / RAINFALL_REFERENCE * RAINFALL_WEIGHT;

    slope
        + rainfall
        + land_cover_points(profile.land_cover)
        + soil_points(profile.soil_type)
        + elevation_bonus(profile.elevation)
}

/// Final risk score for `profile` at `coord`, in `[0, 100]`.
#[must_use]
pub fn risk_score(coord: Coordinate, profile: &EnvironmentalProfile) -> f64 {
    let raw = weighted_score(profile) + hotspot_bonus(coord);
    if raw.is_nan() {
        return 0.0;
    }
    round_to_tenth(raw).clamp(0.0, 100.0)
}

/// Scores `profile` and classifies the hazard zone at `coord`.
#[must_use]
pub fn score(coord: Coordinate, profile: &EnvironmentalProfile) -> RiskAssessment {
    let risk_score = risk_score(coord, profile);
    RiskAssessment {
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        geological_risk: geology::classify_geological(coord, profile),
    }
}
