//! Lat/lng rectangles and ordered first-match rule tables.

use landslide_risk_models::Coordinate;

/// An axis-aligned lat/lng rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRect {
    /// Southern edge.
    pub min_lat: f64,
    /// Northern edge.
    pub max_lat: f64,
    /// Western edge.
    pub min_lng: f64,
    /// Eastern edge.
    pub max_lng: f64,
}

impl GeoRect {
    /// Creates a rectangle from its latitude and longitude spans.
    #[must_use]
    pub const fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.latitude >= self.min_lat
            && coord.latitude <= self.max_lat
            && coord.longitude >= self.min_lng
            && coord.longitude <= self.max_lng
    }
}

/// A named rectangle carrying a value, one row of a lookup table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectRule<T> {
    /// Human-readable name of the area.
    pub name: &'static str,
    /// Area covered by the rule.
    pub rect: GeoRect,
    /// Value produced when the rule matches.
    pub value: T,
}

impl<T> RectRule<T> {
    /// Creates a rule.
    #[must_use]
    pub const fn new(name: &'static str, rect: GeoRect, value: T) -> Self {
        Self { name, rect, value }
    }
}

/// Returns the first rule in `rules` whose rectangle contains `coord`.
///
/// Tables are evaluated strictly in order, so overlapping rectangles
/// always resolve to the one listed first.
#[must_use]
pub fn first_match<T>(rules: &[RectRule<T>], coord: Coordinate) -> Option<&RectRule<T>> {
    rules.iter().find(|rule| rule.rect.contains(coord))
}
