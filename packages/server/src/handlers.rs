//! HTTP handler functions for the landslide risk API.

use actix_web::{HttpRequest, HttpResponse, error::BlockingError, web};
use chrono::Utc;
use landslide_risk::{Analysis, RiskError, estimator, fallback, parse_coordinate, validate};
use landslide_risk_geocoder::resolver::ZoneFallback;
use landslide_risk_geography::{classify_zone, heatmap::HEATMAP_ZONES};
use landslide_risk_models::{AddressSource, Coordinate};
use landslide_risk_server_models::{
    ApiBatchItem, ApiBatchRequest, ApiBatchResponse, ApiError, ApiHealth, ApiRiskRequest,
    ApiRiskResponse, MAX_BATCH_POINTS,
};
use thiserror::Error;

use crate::AppState;

/// Accuracy when the address came from a remote geocoder.
pub const REMOTE_ACCURACY: u8 = 85;
/// Accuracy when the address came from the gazetteer.
pub const GAZETTEER_ACCURACY: u8 = 80;
/// Accuracy when only the zone name was available.
pub const ZONE_ACCURACY: u8 = 75;
/// Accuracy of degraded `fallbackData`.
pub const FALLBACK_ACCURACY: u8 = 70;

/// Failure after validation passed.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The risk pipeline rejected its own output.
    #[error(transparent)]
    Risk(#[from] RiskError),

    /// The blocking pool dropped the computation.
    #[error("Risk computation was cancelled: {0}")]
    Blocking(#[from] BlockingError),
}

/// Confidence for a result whose address came from `source`.
#[must_use]
pub const fn accuracy_for(source: AddressSource) -> u8 {
    if source.is_remote() {
        return REMOTE_ACCURACY;
    }
    match source {
        AddressSource::LocalGazetteer => GAZETTEER_ACCURACY,
        _ => ZONE_ACCURACY,
    }
}

/// `GET /risk`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

/// `GET /risk/zones`
///
/// Returns the static heat-map zones overlaid on the map.
pub async fn zones() -> HttpResponse {
    HttpResponse::Ok().json(HEATMAP_ZONES)
}

/// `POST /risk`
///
/// Validates the coordinate, then runs the estimation pipeline on the
/// blocking pool while the address is resolved.
pub async fn analyze(state: web::Data<AppState>, body: web::Json<ApiRiskRequest>) -> HttpResponse {
    let coord = match validated(&state, *body) {
        Ok(coord) => coord,
        Err(e) => {
            log::warn!("Rejected analysis request: {e}");
            return HttpResponse::BadRequest().json(ApiError::new(e.to_string()));
        }
    };

    match analyze_point(&state, coord).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!(
                "Analysis failed at ({}, {}): {e}",
                coord.latitude,
                coord.longitude
            );
            HttpResponse::InternalServerError().json(ApiError::with_fallback(
                "Failed to analyze location",
                fallback_response(coord),
            ))
        }
    }
}

/// `POST /risk/batch`
///
/// Analyses up to [`MAX_BATCH_POINTS`] points in order, pausing between
/// address lookups to stay under the remote geocoders' rate limits.
pub async fn batch(state: web::Data<AppState>, body: web::Json<ApiBatchRequest>) -> HttpResponse {
    let points = body.into_inner().points;

    if points.is_empty() || points.len() > MAX_BATCH_POINTS {
        return HttpResponse::BadRequest().json(ApiError::new(format!(
            "points must contain between 1 and {MAX_BATCH_POINTS} coordinates"
        )));
    }

    log::info!("Batch analysis of {} points", points.len());

    let mut results = Vec::with_capacity(points.len());
    for (i, point) in points.into_iter().enumerate() {
        if i > 0 && !state.config.batch_spacing.is_zero() {
            tokio::time::sleep(state.config.batch_spacing).await;
        }

        let (result, error) = match validated(&state, point) {
            Ok(coord) => match analyze_point(&state, coord).await {
                Ok(response) => (Some(response), None),
                Err(e) => {
                    log::error!("Batch item {i} failed: {e}");
                    (Some(fallback_response(coord)), None)
                }
            },
            Err(e) => (None, Some(e.to_string())),
        };
        results.push(ApiBatchItem {
            latitude: point.latitude,
            longitude: point.longitude,
            result,
            error,
        });
    }

    HttpResponse::Ok().json(ApiBatchResponse { results })
}

/// Maps JSON extractor failures (wrong types, bad syntax) to 400.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let message = format!("Malformed input: {err}");
    log::warn!("{message}");
    let response = HttpResponse::BadRequest().json(ApiError::new(message));
    actix_web::error::InternalError::from_response(err, response).into()
}

fn validated(
    state: &AppState,
    request: ApiRiskRequest,
) -> Result<Coordinate, landslide_risk::ValidationError> {
    let coord = parse_coordinate(request.latitude, request.longitude)?;
    validate(coord, &state.config.region, state.config.region_buffer)
}

/// Runs estimation and address resolution concurrently and assembles the
/// response once both are done.
async fn analyze_point(
    state: &AppState,
    coord: Coordinate,
) -> Result<ApiRiskResponse, AnalysisError> {
    let seed = state.config.risk_seed;
    let estimation = web::block(move || {
        let mut rng = estimator::seeded_rng(coord, seed);
        landslide_risk::analyze(coord, &mut rng)
    });

    let (analysis, address) =
        futures::future::join(estimation, state.resolver.resolve(coord)).await;
    let Analysis {
        profile,
        assessment,
    } = analysis??;

    let accuracy = accuracy_for(address.source);
    Ok(ApiRiskResponse::new(profile, assessment, address, accuracy)
        .with_zone_description(zone_description(coord)))
}

/// Hazard description of the named zone containing `coord`.
fn zone_description(coord: Coordinate) -> Option<&'static str> {
    classify_zone(coord).map(|zone| zone.description())
}

/// Degraded, coordinate-only response.
#[must_use]
pub fn fallback_response(coord: Coordinate) -> ApiRiskResponse {
    let Analysis {
        profile,
        assessment,
    } = fallback::degraded_analysis(coord);
    ApiRiskResponse::new(
        profile,
        assessment,
        ZoneFallback::address(coord),
        FALLBACK_ACCURACY,
    )
    .with_zone_description(zone_description(coord))
}
