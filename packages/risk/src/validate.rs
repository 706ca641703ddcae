//! Coordinate validation.

use landslide_risk_models::{BoundingBox, Coordinate};

use crate::ValidationError;

/// Builds a coordinate from optional request fields.
///
/// # Errors
///
/// Returns [`ValidationError::Malformed`] if either field is missing or
/// not a finite number.
pub fn parse_coordinate(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Coordinate, ValidationError> {
    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        return Err(ValidationError::Malformed {
            message: "latitude and longitude are required".to_string(),
        });
    };

    let coord = Coordinate::new(latitude, longitude);
    if !coord.is_finite() {
        return Err(ValidationError::Malformed {
            message: "latitude and longitude must be finite numbers".to_string(),
        });
    }
    Ok(coord)
}

/// Passes `coord` through if it lies inside `bbox` grown by `buffer`
/// degrees on every side.
///
/// # Errors
///
/// Returns [`ValidationError::Malformed`] for non-finite input and
/// [`ValidationError::OutOfRegion`] when either axis falls outside the
/// buffered box.
pub fn validate(
    coord: Coordinate,
    bbox: &BoundingBox,
    buffer: f64,
) -> Result<Coordinate, ValidationError> {
    if !coord.is_finite() {
        return Err(ValidationError::Malformed {
            message: "latitude and longitude must be finite numbers".to_string(),
        });
    }

    if bbox.buffered(buffer).contains(coord) {
        Ok(coord)
    } else {
        Err(ValidationError::OutOfRegion {
            latitude: coord.latitude,
            longitude: coord.longitude,
        })
    }
}
