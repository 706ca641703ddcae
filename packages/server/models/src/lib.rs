#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the landslide risk server.
//!
//! These types are serialized to JSON for the REST API consumed by the
//! map UI. They are separate from the domain types so the wire contract
//! can evolve independently.

use chrono::{DateTime, Utc};
use landslide_risk_models::{
    AddressComponents, AddressResult, AddressSource, EnvironmentalProfile, GeologicalRisk,
    LandCover, RiskAssessment, RiskLevel, SoilType,
};
use serde::{Deserialize, Serialize};

/// Maximum number of points accepted by the batch endpoint.
pub const MAX_BATCH_POINTS: usize = 25;

/// Body of `POST /risk`.
///
/// Both fields are optional at the wire level so a missing coordinate is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRiskRequest {
    /// Latitude (WGS84).
    pub latitude: Option<f64>,
    /// Longitude (WGS84).
    pub longitude: Option<f64>,
}

/// Resolved address with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAddressDetails {
    /// Full composed address.
    pub full: String,
    /// Structured fields.
    pub components: AddressComponents,
    /// Resolution stage that produced the address.
    pub source: AddressSource,
}

impl From<AddressResult> for ApiAddressDetails {
    fn from(result: AddressResult) -> Self {
        Self {
            full: result.address,
            components: result.components,
            source: result.source,
        }
    }
}

/// Analysis result returned by `POST /risk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRiskResponse {
    /// Elevation in metres.
    pub elevation: f64,
    /// Slope in degrees.
    pub slope: f64,
    /// Monthly rainfall in millimetres.
    pub rainfall: f64,
    /// Land cover class label.
    pub land_cover: LandCover,
    /// Soil type label.
    pub soil_type: SoilType,
    /// Risk tier.
    pub risk_level: RiskLevel,
    /// Risk score, 0-100.
    pub risk_score: f64,
    /// Geological hazard zone label.
    pub geological_risk: GeologicalRisk,
    /// Human-readable address.
    pub address: String,
    /// Confidence in the result, 0-100.
    pub accuracy: u8,
    /// When the analysis was produced.
    pub timestamp: DateTime<Utc>,
    /// Address with structured fields and source.
    pub address_details: ApiAddressDetails,
    /// Hazard description of the named zone containing the point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_description: Option<String>,
}

impl ApiRiskResponse {
    /// Assembles a response from the analysis parts.
    #[must_use]
    pub fn new(
        profile: EnvironmentalProfile,
        assessment: RiskAssessment,
        address: AddressResult,
        accuracy: u8,
    ) -> Self {
        Self {
            elevation: profile.elevation,
            slope: profile.slope,
            rainfall: profile.rainfall,
            land_cover: profile.land_cover,
            soil_type: profile.soil_type,
            risk_level: assessment.risk_level,
            risk_score: assessment.risk_score,
            geological_risk: assessment.geological_risk,
            address: address.address.clone(),
            accuracy,
            timestamp: Utc::now(),
            address_details: address.into(),
            zone_description: None,
        }
    }

    /// Attaches the zone's hazard description.
    #[must_use]
    pub fn with_zone_description(mut self, description: Option<&str>) -> Self {
        self.zone_description = description.map(String::from);
        self
    }
}

/// Error body for 4xx and 5xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Degraded result, only on internal failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_data: Option<ApiRiskResponse>,
}

impl ApiError {
    /// Error without fallback data.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fallback_data: None,
        }
    }

    /// Error carrying a degraded result.
    #[must_use]
    pub fn with_fallback(error: impl Into<String>, fallback: ApiRiskResponse) -> Self {
        Self {
            error: error.into(),
            fallback_data: Some(fallback),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Always `"ok"`.
    pub status: String,
    /// Server time.
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /risk/batch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBatchRequest {
    /// Points to analyse, at most [`MAX_BATCH_POINTS`].
    pub points: Vec<ApiRiskRequest>,
}

/// Outcome for one batch point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBatchItem {
    /// Requested latitude, if given.
    pub latitude: Option<f64>,
    /// Requested longitude, if given.
    pub longitude: Option<f64>,
    /// Analysis result on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ApiRiskResponse>,
    /// Error message on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of `POST /risk/batch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBatchResponse {
    /// One entry per requested point, in request order.
    pub results: Vec<ApiBatchItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ApiRiskResponse {
        ApiRiskResponse::new(
            EnvironmentalProfile {
                elevation: 120.0,
                slope: 5.2,
                rainfall: 145.0,
                land_cover: LandCover::DenseSettlement,
                soil_type: SoilType::Latosol,
            },
            RiskAssessment {
                risk_score: 24.6,
                risk_level: RiskLevel::Low,
                geological_risk: GeologicalRisk::Stable,
            },
            AddressResult {
                address: "Kota Yogyakarta, Daerah Istimewa Yogyakarta".to_string(),
                source: AddressSource::ZoneFallback,
                components: AddressComponents::default(),
            },
            75,
        )
    }

    #[test]
    fn response_uses_camel_case_and_display_labels() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["landCover"], "Permukiman Padat");
        assert_eq!(json["soilType"], "Latosol");
        assert_eq!(json["riskLevel"], "low");
        assert_eq!(json["geologicalRisk"], "Zona Relatif Stabil");
        assert_eq!(json["accuracy"], 75);
        assert_eq!(json["addressDetails"]["source"], "zone-fallback");
        assert_eq!(json["address"], json["addressDetails"]["full"]);
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn zone_description_is_serialized_only_when_known() {
        let plain = serde_json::to_value(sample()).unwrap();
        assert!(plain.get("zoneDescription").is_none());

        let described = serde_json::to_value(
            sample().with_zone_description(Some("Zona Relatif Aman - Dataran rendah, risiko rendah")),
        )
        .unwrap();
        assert_eq!(
            described["zoneDescription"],
            "Zona Relatif Aman - Dataran rendah, risiko rendah"
        );
    }

    #[test]
    fn fallback_data_is_omitted_when_absent() {
        let plain = serde_json::to_value(ApiError::new("bad input")).unwrap();
        assert_eq!(plain, serde_json::json!({ "error": "bad input" }));

        let degraded = serde_json::to_value(ApiError::with_fallback("boom", sample())).unwrap();
        assert_eq!(degraded["fallbackData"]["accuracy"], 75);
    }

    #[test]
    fn request_fields_are_optional() {
        let request: ApiRiskRequest = serde_json::from_str(r#"{ "latitude": -7.8 }"#).unwrap();
        assert_eq!(request.latitude, Some(-7.8));
        assert_eq!(request.longitude, None);
    }
}
