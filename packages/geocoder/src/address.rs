//! Address parsing and composition.
//!
//! Reverse geocoders answer with an OSM-style `address` object. This
//! module pulls the fields the map UI cares about into
//! [`AddressComponents`] and joins them into a hierarchical Indonesian
//! address, street first:
//!
//! `Jalan Malioboro, Dusun X, Desa Y, Kecamatan Z, Yogyakarta,
//! Daerah Istimewa Yogyakarta, Kode Pos 55271`

use landslide_risk_models::{AddressComponents, PROVINCE_NAME};

use crate::GeocodeError;

/// Extracts address components from a reverse geocoding response body.
///
/// `city` falls back to `town` then `county`. The province is always
/// [`PROVINCE_NAME`].
///
/// # Errors
///
/// * [`GeocodeError::EmptyAddress`] if the body carries an `error` key or
///   no usable locality fields
/// * [`GeocodeError::Parse`] if the body is not a JSON object
pub fn parse_reverse_response(
    body: &serde_json::Value,
) -> Result<AddressComponents, GeocodeError> {
    let object = body.as_object().ok_or_else(|| GeocodeError::Parse {
        message: "Reverse geocoding response is not an object".to_string(),
    })?;

    if let Some(error) = object.get("error") {
        log::debug!("Reverse geocoder returned error: {error}");
        return Err(GeocodeError::EmptyAddress);
    }

    let Some(address) = object.get("address") else {
        return Err(GeocodeError::EmptyAddress);
    };

    let field = |key: &str| -> Option<String> {
        address[key]
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    let components = AddressComponents {
        road: field("road"),
        hamlet: field("hamlet"),
        neighbourhood: field("neighbourhood"),
        village: field("village"),
        suburb: field("suburb"),
        city_district: field("city_district"),
        city: field("city")
            .or_else(|| field("town"))
            .or_else(|| field("county")),
        province: Some(PROVINCE_NAME.to_string()),
        postcode: field("postcode"),
    };

    if !has_locality(&components) {
        return Err(GeocodeError::EmptyAddress);
    }

    Ok(components)
}

/// Returns `true` if any field below the province is present.
fn has_locality(components: &AddressComponents) -> bool {
    [
        &components.road,
        &components.hamlet,
        &components.neighbourhood,
        &components.village,
        &components.suburb,
        &components.city_district,
        &components.city,
        &components.postcode,
    ]
    .iter()
    .any(|part| part.is_some())
}

/// Composes a geocoder result into a hierarchical address string.
///
/// Missing parts are skipped. The province suffix is always present.
#[must_use]
pub fn compose(components: &AddressComponents) -> String {
    let parts = [
        components.road.as_deref().map(street),
        components.hamlet.as_deref().map(|hamlet| format!("Dusun {hamlet}")),
        components.neighbourhood.clone(),
        components.village.as_deref().map(|village| format!("Desa {village}")),
        components.suburb.clone(),
        components
            .city_district
            .as_deref()
            .map(|district| format!("Kecamatan {district}")),
        components.city.clone(),
        Some(PROVINCE_NAME.to_string()),
        components
            .postcode
            .as_deref()
            .map(|postcode| format!("Kode Pos {postcode}")),
    ];

    join_parts(parts)
}

/// Prefixes `road` with "Jalan" unless OSM already named it so.
fn street(road: &str) -> String {
    if road.starts_with("Jalan ") || road.starts_with("Jl.") || road.starts_with("Jl ") {
        road.to_string()
    } else {
        format!("Jalan {road}")
    }
}

/// Joins the present parts with `", "`.
pub(crate) fn join_parts<I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    parts.into_iter().flatten().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nominatim_reverse_result() {
        let body = serde_json::json!({
            "place_id": 123,
            "display_name": "Jalan Malioboro, Sosromenduran, Gedong Tengen, Yogyakarta",
            "address": {
                "road": "Jalan Malioboro",
                "village": "Sosromenduran",
                "city_district": "Gedong Tengen",
                "city": "Yogyakarta",
                "state": "Daerah Istimewa Yogyakarta",
                "postcode": "55271",
                "country": "Indonesia"
            }
        });
        let components = parse_reverse_response(&body).unwrap();
        assert_eq!(components.road.as_deref(), Some("Jalan Malioboro"));
        assert_eq!(components.city.as_deref(), Some("Yogyakarta"));
        assert_eq!(components.province.as_deref(), Some(PROVINCE_NAME));
        assert_eq!(components.postcode.as_deref(), Some("55271"));
    }

    #[test]
    fn falls_back_to_town_then_county() {
        let town = serde_json::json!({ "address": { "town": "Wates" } });
        assert_eq!(
            parse_reverse_response(&town).unwrap().city.as_deref(),
            Some("Wates")
        );

        let county = serde_json::json!({ "address": { "county": "Gunungkidul" } });
        assert_eq!(
            parse_reverse_response(&county).unwrap().city.as_deref(),
            Some("Gunungkidul")
        );
    }

    #[test]
    fn error_body_is_empty_address() {
        let body = serde_json::json!({ "error": "Unable to geocode" });
        assert!(matches!(
            parse_reverse_response(&body),
            Err(GeocodeError::EmptyAddress)
        ));
    }

    #[test]
    fn address_without_locality_is_empty() {
        let body = serde_json::json!({
            "address": { "state": "Daerah Istimewa Yogyakarta", "country": "Indonesia" }
        });
        assert!(matches!(
            parse_reverse_response(&body),
            Err(GeocodeError::EmptyAddress)
        ));

        let blank = serde_json::json!({ "address": { "road": "  " } });
        assert!(matches!(
            parse_reverse_response(&blank),
            Err(GeocodeError::EmptyAddress)
        ));
    }

    #[test]
    fn non_object_body_is_parse_error() {
        let body = serde_json::json!([]);
        assert!(matches!(
            parse_reverse_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }

    #[test]
    fn composes_hierarchy_in_order() {
        let components = AddressComponents {
            road: Some("Kaliurang".to_string()),
            hamlet: Some("Ngipiksari".to_string()),
            village: Some("Hargobinangun".to_string()),
            city_district: Some("Pakem".to_string()),
            city: Some("Sleman".to_string()),
            postcode: Some("55582".to_string()),
            ..AddressComponents::default()
        };
        assert_eq!(
            compose(&components),
            "Jalan Kaliurang, Dusun Ngipiksari, Desa Hargobinangun, Kecamatan Pakem, \
             Sleman, Daerah Istimewa Yogyakarta, Kode Pos 55582"
        );
    }

    #[test]
    fn does_not_double_the_street_prefix() {
        let components = AddressComponents {
            road: Some("Jalan Malioboro".to_string()),
            ..AddressComponents::default()
        };
        assert_eq!(
            compose(&components),
            "Jalan Malioboro, Daerah Istimewa Yogyakarta"
        );
    }

    #[test]
    fn composes_province_only_when_empty() {
        assert_eq!(compose(&AddressComponents::default()), PROVINCE_NAME);
    }
}
