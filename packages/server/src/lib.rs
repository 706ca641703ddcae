#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for landslide risk analysis.
//!
//! Serves the analysis endpoint the map UI calls on every click, plus a
//! health check, the static risk heat-map zones, and a rate-limited batch
//! endpoint. Routes are mounted both at the root and under `/api`.
//!
//! Each request is independent: the estimator runs on the blocking pool
//! with its own seeded generator while the address resolver walks its
//! geocoder chain, and the response is assembled once both finish.

pub mod config;
pub mod handlers;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use landslide_risk_geocoder::{AddressResolver, GeocodeError};
use thiserror::Error;

pub use config::ServerConfig;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    /// Runtime configuration.
    pub config: ServerConfig,
    /// Address resolution chain.
    pub resolver: AddressResolver,
}

impl AppState {
    /// Builds the state and its geocoder chain from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the geocoder chain cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, GeocodeError> {
        let resolver = AddressResolver::from_settings(&config.geocoder)?;
        Ok(Self { config, resolver })
    }
}

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding or running the HTTP server failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The geocoder chain could not be built.
    #[error(transparent)]
    Geocoder(#[from] GeocodeError),
}

/// Registers the API routes on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
        .route("/risk", web::post().to(handlers::analyze))
        .route("/risk", web::get().to(handlers::health))
        .route("/risk/zones", web::get().to(handlers::zones))
        .route("/risk/batch", web::post().to(handlers::batch));
}

/// Starts the landslide risk API server.
///
/// Reads [`ServerConfig`] from the environment, builds the geocoder
/// chain, and runs the Actix-Web HTTP server. The caller provides the
/// async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns [`ServerError`] if the geocoder chain cannot be built or the
/// HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> Result<(), ServerError> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ServerConfig::from_env();
    log::debug!("Configuration: {config:?}");

    let bind_addr = config.bind_addr.clone();
    let port = config.port;

    log::info!("Building geocoder chain...");
    let state = web::Data::new(AppState::new(config)?);
    log::info!("Address stages: {:?}", state.resolver);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
            .service(web::scope("/api").configure(configure))
    })
    .bind((bind_addr, port))?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::{http::StatusCode, test as actix_test};
    use landslide_risk_geocoder::GeocoderSettings;
    use landslide_risk_server_models::{ApiBatchResponse, ApiError, ApiRiskResponse};

    use super::*;

    /// State whose remote geocoders point at a closed local port.
    fn offline_state() -> web::Data<AppState> {
        let config = ServerConfig {
            batch_spacing: Duration::ZERO,
            geocoder: GeocoderSettings {
                nominatim_url: Some("http://127.0.0.1:9".to_string()),
                timeout: Duration::from_secs(2),
                delay: Some(Duration::ZERO),
                ..GeocoderSettings::default()
            },
            ..ServerConfig::default()
        };
        web::Data::new(AppState::new(config).unwrap())
    }

    macro_rules! app {
        () => {
            actix_test::init_service(
                App::new()
                    .app_data(offline_state())
                    .configure(configure)
                    .service(web::scope("/api").configure(configure)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn health_check_reports_ok() {
        let app = app!();
        let req = actix_test::TestRequest::get().uri("/risk").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn out_of_region_is_bad_request() {
        let app = app!();
        let req = actix_test::TestRequest::post()
            .uri("/risk")
            .set_json(serde_json::json!({ "latitude": 0.0, "longitude": 0.0 }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ApiError = actix_test::read_body_json(resp).await;
        assert!(body.error.contains("outside"));
        assert!(body.fallback_data.is_none());
    }

    #[actix_web::test]
    async fn malformed_input_is_bad_request() {
        let app = app!();
        for payload in [
            serde_json::json!({ "latitude": "abc", "longitude": 110.37 }),
            serde_json::json!({ "latitude": -7.79 }),
        ] {
            let req = actix_test::TestRequest::post()
                .uri("/risk")
                .set_json(&payload)
                .to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");

            let body: serde_json::Value = actix_test::read_body_json(resp).await;
            assert!(body["error"].is_string(), "{payload}");
        }
    }

    #[actix_web::test]
    async fn unreachable_geocoders_still_return_an_address() {
        let app = app!();
        let req = actix_test::TestRequest::post()
            .uri("/api/risk")
            .set_json(serde_json::json!({ "latitude": -7.79, "longitude": 110.37 }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: ApiRiskResponse = actix_test::read_body_json(resp).await;
        assert!(!body.address.is_empty());
        assert_eq!(
            body.address_details.source,
            landslide_risk_models::AddressSource::LocalGazetteer
        );
        assert_eq!(body.accuracy, handlers::GAZETTEER_ACCURACY);
        assert_eq!(body.risk_level, landslide_risk_models::RiskLevel::Low);
        assert_eq!(
            body.zone_description.as_deref(),
            Some(landslide_risk_geography::GeoZone::YogyakartaCity.description())
        );
    }

    #[actix_web::test]
    async fn unnamed_area_has_no_zone_description() {
        let app = app!();
        let req = actix_test::TestRequest::post()
            .uri("/risk")
            .set_json(serde_json::json!({ "latitude": -7.78, "longitude": 110.60 }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(body.get("zoneDescription").is_none());
        assert_eq!(body["addressDetails"]["source"], "zone-fallback");
    }

    #[actix_web::test]
    async fn merapi_flank_is_high_risk() {
        let app = app!();
        let req = actix_test::TestRequest::post()
            .uri("/risk")
            .set_json(serde_json::json!({ "latitude": -7.58, "longitude": 110.45 }))
            .to_request();
        let body: ApiRiskResponse = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.risk_level, landslide_risk_models::RiskLevel::High);
        assert!(body.elevation > 500.0);
        assert!(body.slope > 25.0);
    }

    #[actix_web::test]
    async fn same_coordinate_gives_same_profile() {
        let app = app!();
        let mut responses = Vec::new();
        for _ in 0..2 {
            let req = actix_test::TestRequest::post()
                .uri("/risk")
                .set_json(serde_json::json!({ "latitude": -8.10, "longitude": 110.50 }))
                .to_request();
            let body: ApiRiskResponse = actix_test::call_and_read_body_json(&app, req).await;
            responses.push(body);
        }
        assert!((responses[0].risk_score - responses[1].risk_score).abs() < f64::EPSILON);
        assert!((responses[0].elevation - responses[1].elevation).abs() < f64::EPSILON);
    }

    #[actix_web::test]
    async fn zones_are_served() {
        let app = app!();
        let req = actix_test::TestRequest::get().uri("/api/risk/zones").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        let zones = body.as_array().unwrap();
        assert_eq!(
            zones.len(),
            landslide_risk_geography::heatmap::HEATMAP_ZONES.len()
        );
        assert!(zones.iter().all(|z| z["coordinates"].is_array()));
    }

    #[actix_web::test]
    async fn batch_reports_each_point() {
        let app = app!();
        let req = actix_test::TestRequest::post()
            .uri("/risk/batch")
            .set_json(serde_json::json!({
                "points": [
                    { "latitude": -7.79, "longitude": 110.37 },
                    { "latitude": 0.0, "longitude": 0.0 }
                ]
            }))
            .to_request();
        let body: ApiBatchResponse = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.results.len(), 2);
        assert!(body.results[0].result.is_some());
        assert!(body.results[0].error.is_none());
        assert!(body.results[1].result.is_none());
        assert!(body.results[1].error.is_some());
    }

    #[actix_web::test]
    async fn oversized_batch_is_rejected() {
        let app = app!();
        let points: Vec<_> = (0..26)
            .map(|_| serde_json::json!({ "latitude": -7.79, "longitude": 110.37 }))
            .collect();
        let req = actix_test::TestRequest::post()
            .uri("/risk/batch")
            .set_json(serde_json::json!({ "points": points }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn accuracy_ranks_address_sources() {
        use landslide_risk_models::AddressSource;

        assert_eq!(handlers::accuracy_for(AddressSource::PrimaryGeocoder), 85);
        assert_eq!(handlers::accuracy_for(AddressSource::SecondaryGeocoder), 85);
        assert_eq!(handlers::accuracy_for(AddressSource::LocalGazetteer), 80);
        assert_eq!(handlers::accuracy_for(AddressSource::ZoneFallback), 75);
    }

    #[test]
    fn fallback_data_is_degraded() {
        let coord = landslide_risk_models::Coordinate::new(-7.79, 110.37);
        let fallback = handlers::fallback_response(coord);
        assert_eq!(fallback.accuracy, handlers::FALLBACK_ACCURACY);
        assert_eq!(
            fallback.geological_risk,
            landslide_risk_models::GeologicalRisk::Undetermined
        );
        assert_eq!(
            fallback.address,
            "Kota Yogyakarta, Daerah Istimewa Yogyakarta"
        );
    }
}
