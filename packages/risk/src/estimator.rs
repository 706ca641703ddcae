//! Environmental parameter estimation.
//!
//! Each parameter is looked up in an ordered table of named rectangles
//! (first match wins) and falls back to a positional rule. Rectangle rules
//! yield a [`Band`]; the concrete value is drawn from the caller's RNG, so
//! the estimator is reproducible under a seeded generator. Land cover and
//! soil type never touch the RNG.
//!
//! Draw order per call to [`estimate`] is elevation, slope, rainfall.

use landslide_risk_geography::{RectRule, first_match, regions};
use landslide_risk_models::{Coordinate, EnvironmentalProfile, LandCover, SoilType};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Base elevation of the positional gradient, in meters.
pub const BASE_ELEVATION: f64 = 150.0;
/// Elevation gained from the southern to the northern edge of the region.
pub const NORTH_GRADIENT: f64 = 400.0;
/// Elevation gained from the western to the eastern edge of the region.
pub const EAST_GRADIENT: f64 = 200.0;
/// Steepest slope ever reported, in degrees.
pub const MAX_SLOPE: f64 = 45.0;

const GRADIENT_SOUTH: f64 = -8.20;
const GRADIENT_LAT_SPAN: f64 = 0.70;
const GRADIENT_WEST: f64 = 110.10;
const GRADIENT_LNG_SPAN: f64 = 0.60;

/// An inclusive value range sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Band {
    /// Creates a band.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draws a value from the band.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }

    /// Center of the band.
    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Named elevation areas, in meters.
pub const ELEVATION_RULES: &[RectRule<Band>] = &[
    RectRule::new("merapi_flank", regions::MERAPI_FLANK, Band::new(800.0, 1500.0)),
    RectRule::new("yogyakarta_core", regions::YOGYAKARTA_CORE, Band::new(100.0, 150.0)),
    RectRule::new("southern_karst", regions::SOUTHERN_KARST, Band::new(300.0, 500.0)),
    RectRule::new("menoreh_hills", regions::MENOREH_HILLS, Band::new(350.0, 750.0)),
];

/// Steep areas whose slope ignores elevation, in degrees.
pub const STEEP_SLOPE_RULES: &[RectRule<Band>] = &[
    RectRule::new("merapi_flank", regions::MERAPI_FLANK, Band::new(30.0, 45.0)),
    RectRule::new("baturagung_ridge", regions::BATURAGUNG_RIDGE, Band::new(25.0, 40.0)),
    RectRule::new("menoreh_hills", regions::MENOREH_HILLS, Band::new(25.0, 40.0)),
];

/// Land cover by named area.
pub const LAND_COVER_RULES: &[RectRule<LandCover>] = &[
    RectRule::new("yogyakarta_core", regions::YOGYAKARTA_CORE, LandCover::DenseSettlement),
    RectRule::new("merapi_flank", regions::MERAPI_FLANK, LandCover::Forest),
    RectRule::new("southern_karst", regions::SOUTHERN_KARST, LandCover::DryShrub),
    RectRule::new("sleman_suburbs", regions::SLEMAN_SUBURBS, LandCover::Settlement),
    RectRule::new("agricultural_belt", regions::AGRICULTURAL_BELT, LandCover::Paddy),
];

/// Soil type by geology.
pub const SOIL_RULES: &[RectRule<SoilType>] = &[
    RectRule::new("merapi_flank", regions::MERAPI_FLANK, SoilType::Andosol),
    RectRule::new("southern_karst", regions::SOUTHERN_KARST, SoilType::Grumusol),
    RectRule::new("western_hills", regions::WESTERN_HILLS, SoilType::Mediterranean),
    RectRule::new("central_plain", regions::CENTRAL_PLAIN, SoilType::Latosol),
    RectRule::new("river_plain", regions::SOUTHERN_RIVER_PLAIN, SoilType::Alluvial),
];

/// Builds the per-request generator for `coord`.
///
/// The seed mixes the coordinate's bit pattern with `base_seed`, so the
/// same point always produces the same profile for a given base seed.
#[must_use]
pub fn seeded_rng(coord: Coordinate, base_seed: u64) -> StdRng {
    let seed = base_seed
        ^ coord.latitude.to_bits().rotate_left(17)
        ^ coord.longitude.to_bits().wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(seed)
}

/// Derives the full environmental profile of `coord`.
pub fn estimate<R: Rng + ?Sized>(coord: Coordinate, rng: &mut R) -> EnvironmentalProfile {
    let elevation = elevation(coord, rng);
    let slope = slope(coord, elevation, rng);
    let rainfall = rainfall(coord, rng);

    EnvironmentalProfile {
        elevation,
        slope,
        rainfall,
        land_cover: land_cover(coord),
        soil_type: soil_type(coord),
    }
}

/// Elevation in whole meters.
pub fn elevation<R: Rng + ?Sized>(coord: Coordinate, rng: &mut R) -> f64 {
    first_match(ELEVATION_RULES, coord)
        .map_or_else(|| gradient_elevation(coord), |rule| rule.value.sample(rng))
        .round()
}

/// Unrounded elevation from the north-south and west-east gradients.
#[must_use]
pub fn gradient_elevation(coord: Coordinate) -> f64 {
    let north = ((coord.latitude - GRADIENT_SOUTH) / GRADIENT_LAT_SPAN).clamp(0.0, 1.0);
    let east = ((coord.longitude - GRADIENT_WEST) / GRADIENT_LNG_SPAN).clamp(0.0, 1.0);
    north.mul_add(NORTH_GRADIENT, east.mul_add(EAST_GRADIENT, BASE_ELEVATION))
}

/// Slope band for an elevation when no steep area applies.
#[must_use]
pub fn slope_band_for_elevation(elevation: f64) -> Band {
    if elevation > 500.0 {
        Band::new(25.0, 45.0)
    } else if elevation > 200.0 {
        Band::new(10.0, 25.0)
    } else {
        Band::new(2.0, 8.0)
    }
}

/// Slope band for `coord`, honoring steep-area overrides.
#[must_use]
pub fn slope_band(coord: Coordinate, elevation: f64) -> Band {
    first_match(STEEP_SLOPE_RULES, coord)
        .map_or_else(|| slope_band_for_elevation(elevation), |rule| rule.value)
}

/// Slope in degrees, one decimal place, within `[0, 45]`.
pub fn slope<R: Rng + ?Sized>(coord: Coordinate, elevation: f64, rng: &mut R) -> f64 {
    round_to_tenth(slope_band(coord, elevation).sample(rng).clamp(0.0, MAX_SLOPE))
}

/// Monthly rainfall band by latitude.
#[must_use]
pub fn rainfall_band(latitude: f64) -> Band {
    if latitude > -7.65 {
        Band::new(240.0, 300.0)
    } else if latitude < -7.95 {
        Band::new(180.0, 240.0)
    } else {
        Band::new(130.0, 160.0)
    }
}

/// Monthly rainfall in whole millimeters.
pub fn rainfall<R: Rng + ?Sized>(coord: Coordinate, rng: &mut R) -> f64 {
    rainfall_band(coord.latitude).sample(rng).round()
}

/// Land cover class of `coord`.
#[must_use]
pub fn land_cover(coord: Coordinate) -> LandCover {
    first_match(LAND_COVER_RULES, coord).map_or_else(LandCover::default, |rule| rule.value)
}

/// Soil type of `coord`.
#[must_use]
pub fn soil_type(coord: Coordinate) -> SoilType {
    first_match(SOIL_RULES, coord).map_or_else(SoilType::default, |rule| rule.value)
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
