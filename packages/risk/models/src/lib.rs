#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared domain types for landslide risk analysis.
//!
//! Everything here is created, computed, and discarded within a single
//! analysis request: the input [`Coordinate`], the derived
//! [`EnvironmentalProfile`] and [`RiskAssessment`], and the resolved
//! [`AddressResult`]. Category enums serialize to the Indonesian labels
//! shown by the map UI.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Fixed province suffix appended to every composed address.
pub const PROVINCE_NAME: &str = "Daerah Istimewa Yogyakarta";

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` when both components are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl BoundingBox {
    /// The analysis region: Daerah Istimewa Yogyakarta.
    pub const YOGYAKARTA: Self = Self::new(110.10, -8.20, 110.70, -7.50);

    /// Creates a new bounding box from the given coordinates.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Returns this box grown by `buffer` degrees on every side.
    #[must_use]
    pub fn buffered(&self, buffer: f64) -> Self {
        Self {
            west: self.west - buffer,
            south: self.south - buffer,
            east: self.east + buffer,
            north: self.north + buffer,
        }
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.south..=self.north).contains(&coord.latitude)
            && (self.west..=self.east).contains(&coord.longitude)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::YOGYAKARTA
    }
}

/// Land cover class.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum LandCover {
    /// Forest and shrub on high volcanic slopes.
    #[serde(rename = "Hutan dan Semak")]
    #[strum(serialize = "Hutan dan Semak")]
    Forest,
    /// Dense urban settlement.
    #[serde(rename = "Permukiman Padat")]
    #[strum(serialize = "Permukiman Padat")]
    DenseSettlement,
    /// Suburban settlement.
    #[serde(rename = "Permukiman")]
    #[strum(serialize = "Permukiman")]
    Settlement,
    /// Irrigated paddy and dry fields.
    #[serde(rename = "Sawah dan Tegalan")]
    #[strum(serialize = "Sawah dan Tegalan")]
    Paddy,
    /// Dry shrub land over bare karst.
    #[serde(rename = "Lahan Kering Semak")]
    #[strum(serialize = "Lahan Kering Semak")]
    DryShrub,
    /// Mixed open land.
    #[default]
    #[serde(rename = "Lahan Terbuka Campur")]
    #[strum(serialize = "Lahan Terbuka Campur")]
    MixedOpenLand,
}

/// Soil type.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum SoilType {
    /// Volcanic andosol on the Merapi flank.
    #[serde(rename = "Andosol (Vulkanik)")]
    #[strum(serialize = "Andosol (Vulkanik)")]
    Andosol,
    /// Red latosol of the central plain.
    #[default]
    #[serde(rename = "Latosol")]
    #[strum(serialize = "Latosol")]
    Latosol,
    /// Limestone clay grumusol of the southern karst.
    #[serde(rename = "Grumusol (Liat Kapur)")]
    #[strum(serialize = "Grumusol (Liat Kapur)")]
    Grumusol,
    /// Mediterranean soil of the western hills.
    #[serde(rename = "Mediteran")]
    #[strum(serialize = "Mediteran")]
    Mediterranean,
    /// River plain alluvium.
    #[serde(rename = "Aluvial")]
    #[strum(serialize = "Aluvial")]
    Alluvial,
}

/// Risk tier, ordered `Low < Medium < High`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    /// Score below [`RiskLevel::MEDIUM_THRESHOLD`].
    Low,
    /// Score in `[MEDIUM_THRESHOLD, HIGH_THRESHOLD)`.
    Medium,
    /// Score at or above [`RiskLevel::HIGH_THRESHOLD`].
    High,
}

impl RiskLevel {
    /// Lowest score classified as [`RiskLevel::Medium`].
    pub const MEDIUM_THRESHOLD: f64 = 35.0;
    /// Lowest score classified as [`RiskLevel::High`].
    pub const HIGH_THRESHOLD: f64 = 65.0;

    /// Buckets a risk score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Qualitative geological hazard zone.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum GeologicalRisk {
    /// High-hazard zone.
    #[serde(rename = "Zona Rawan Tinggi")]
    #[strum(serialize = "Zona Rawan Tinggi")]
    HighHazard,
    /// Moderate-hazard zone.
    #[serde(rename = "Zona Rawan Sedang")]
    #[strum(serialize = "Zona Rawan Sedang")]
    ModerateHazard,
    /// Relatively stable zone.
    #[serde(rename = "Zona Relatif Stabil")]
    #[strum(serialize = "Zona Relatif Stabil")]
    Stable,
    /// Diagnostic label used when the full analysis could not complete.
    #[serde(rename = "Zona DIY (analisis terbatas)")]
    #[strum(serialize = "Zona DIY (analisis terbatas)")]
    Undetermined,
}

/// Environmental parameters derived from a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalProfile {
    /// Meters above sea level.
    pub elevation: f64,
    /// Degrees, 0-45.
    pub slope: f64,
    /// Millimeters per month.
    pub rainfall: f64,
    /// Land cover class.
    pub land_cover: LandCover,
    /// Soil type.
    pub soil_type: SoilType,
}

/// Result of scoring an [`EnvironmentalProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Weighted score in `[0, 100]`.
    pub risk_score: f64,
    /// Tier derived from `risk_score`.
    pub risk_level: RiskLevel,
    /// Qualitative hazard zone.
    pub geological_risk: GeologicalRisk,
}

/// Which stage of the address resolver produced an address.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AddressSource {
    /// Primary remote reverse geocoder (Nominatim).
    PrimaryGeocoder,
    /// Secondary, credential-gated remote reverse geocoder.
    SecondaryGeocoder,
    /// Built-in table of named places.
    LocalGazetteer,
    /// Coarse geographic zone; always available.
    ZoneFallback,
}

impl AddressSource {
    /// Returns `true` for the remote geocoder stages.
    #[must_use]
    pub const fn is_remote(self) -> bool {
        matches!(self, Self::PrimaryGeocoder | Self::SecondaryGeocoder)
    }
}

/// Structured, partially populated address fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponents {
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road: Option<String>,
    /// Hamlet (dusun).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hamlet: Option<String>,
    /// Neighbourhood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbourhood: Option<String>,
    /// Village (desa / kelurahan).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    /// Suburb.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    /// District (kecamatan).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_district: Option<String>,
    /// City, town, or regency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

/// A resolved, human-readable address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResult {
    /// Composed address string; never empty.
    pub address: String,
    /// Stage that produced the address.
    pub source: AddressSource,
    /// Structured fields backing `address`.
    pub components: AddressComponents,
}
