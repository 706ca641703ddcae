//! Qualitative geological hazard zones.

use landslide_risk_geography::{RectRule, first_match, regions};
use landslide_risk_models::{Coordinate, EnvironmentalProfile, GeologicalRisk};

use crate::scorer::LANDSLIDE_HOTSPOTS;

/// Areas with moderate ground-movement potential regardless of slope.
pub const MODERATE_HAZARD_AREAS: &[RectRule<()>] = &[
    RectRule::new("sleman_foothills", regions::SLEMAN_FOOTHILLS, ()),
    RectRule::new("wonosari_plateau", regions::WONOSARI_PLATEAU, ()),
    RectRule::new("imogiri_hills", regions::IMOGIRI_HILLS, ()),
    RectRule::new("sentolo_hills", regions::SENTOLO_HILLS, ()),
];

/// Slope above which any location is a high-hazard zone.
const HIGH_HAZARD_SLOPE: f64 = 30.0;
/// Slope above which elevated ground is a moderate-hazard zone.
const MODERATE_HAZARD_SLOPE: f64 = 15.0;
/// Elevation above which [`MODERATE_HAZARD_SLOPE`] applies.
const MODERATE_HAZARD_ELEVATION: f64 = 200.0;

/// Labels the hazard zone of `coord` given its profile.
#[must_use]
pub fn classify_geological(coord: Coordinate, profile: &EnvironmentalProfile) -> GeologicalRisk {
    if regions::MERAPI_FLANK.contains(coord)
        || first_match(LANDSLIDE_HOTSPOTS, coord).is_some()
        || profile.slope > HIGH_HAZARD_SLOPE
    {
        return GeologicalRisk::HighHazard;
    }

    if (profile.slope > MODERATE_HAZARD_SLOPE && profile.elevation > MODERATE_HAZARD_ELEVATION)
        || first_match(MODERATE_HAZARD_AREAS, coord).is_some()
    {
        return GeologicalRisk::ModerateHazard;
    }

    GeologicalRisk::Stable
}
