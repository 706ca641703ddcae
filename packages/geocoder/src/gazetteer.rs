//! Built-in gazetteer of known places in the province.
//!
//! Used when both remote geocoders fail. Landmarks and districts are
//! listed before the regencies that contain them so the most specific
//! place wins.

use async_trait::async_trait;
use landslide_risk_geography::{GeoRect, RectRule, first_match};
use landslide_risk_models::{
    AddressComponents, AddressResult, AddressSource, Coordinate, PROVINCE_NAME,
};

use crate::{AddressStrategy, GeocodeError, address::join_parts};

/// Address fields of a known place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Place {
    /// Street, for landmarks.
    pub road: Option<&'static str>,
    /// Village or area.
    pub village: Option<&'static str>,
    /// District (kecamatan) or regency label.
    pub city_district: Option<&'static str>,
    /// City or regency.
    pub city: Option<&'static str>,
    /// Postal code.
    pub postcode: &'static str,
}

impl Place {
    const fn new(postcode: &'static str) -> Self {
        Self {
            road: None,
            village: None,
            city_district: None,
            city: None,
            postcode,
        }
    }

    const fn road(mut self, road: &'static str) -> Self {
        self.road = Some(road);
        self
    }

    const fn village(mut self, village: &'static str) -> Self {
        self.village = Some(village);
        self
    }

    const fn district(mut self, district: &'static str) -> Self {
        self.city_district = Some(district);
        self
    }

    const fn city(mut self, city: &'static str) -> Self {
        self.city = Some(city);
        self
    }

    /// Converts to owned address components.
    #[must_use]
    pub fn components(&self) -> AddressComponents {
        AddressComponents {
            road: self.road.map(String::from),
            village: self.village.map(String::from),
            city_district: self.city_district.map(String::from),
            city: self.city.map(String::from),
            province: Some(PROVINCE_NAME.to_string()),
            postcode: Some(self.postcode.to_string()),
            ..AddressComponents::default()
        }
    }
}

/// Known places, most specific first.
pub const PLACES: &[RectRule<Place>] = &[
    RectRule::new(
        "Tugu Yogyakarta",
        GeoRect::new(-7.783, -7.782, 110.367, 110.368),
        Place::new("55133")
            .road("Jalan Margo Utomo")
            .district("Jetis")
            .city("Yogyakarta"),
    ),
    RectRule::new(
        "Alun-Alun Utara",
        GeoRect::new(-7.802, -7.800, 110.363, 110.365),
        Place::new("55122")
            .road("Alun-Alun Utara")
            .district("Gedong Tengen")
            .city("Yogyakarta"),
    ),
    RectRule::new(
        "Kaliurang",
        GeoRect::new(-7.600, -7.590, 110.430, 110.440),
        Place::new("55583")
            .village("Kaliurang")
            .district("Cangkringan")
            .city("Sleman"),
    ),
    RectRule::new(
        "Depok",
        GeoRect::new(-7.765, -7.745, 110.370, 110.395),
        Place::new("55281").district("Depok").city("Sleman"),
    ),
    RectRule::new(
        "Kasihan",
        GeoRect::new(-7.850, -7.830, 110.320, 110.340),
        Place::new("55181").district("Kasihan").city("Bantul"),
    ),
    RectRule::new(
        "Wonosari",
        GeoRect::new(-7.970, -7.950, 110.550, 110.570),
        Place::new("55811").district("Wonosari").city("Gunungkidul"),
    ),
    RectRule::new(
        "Wates",
        GeoRect::new(-7.870, -7.850, 110.140, 110.160),
        Place::new("55611").district("Wates").city("Kulon Progo"),
    ),
    RectRule::new(
        "Kota Yogyakarta",
        GeoRect::new(-7.85, -7.75, 110.35, 110.42),
        Place::new("55111").city("Yogyakarta"),
    ),
    RectRule::new(
        "Sleman",
        GeoRect::new(-7.75, -7.55, 110.35, 110.42),
        Place::new("55511").district("Sleman"),
    ),
    RectRule::new(
        "Bantul",
        GeoRect::new(-7.95, -7.75, 110.30, 110.40),
        Place::new("55711").district("Bantul"),
    ),
    RectRule::new(
        "Gunungkidul",
        GeoRect::new(-8.20, -7.95, 110.40, 110.60),
        Place::new("55811").district("Gunungkidul"),
    ),
    RectRule::new(
        "Kulon Progo",
        GeoRect::new(-7.95, -7.75, 110.10, 110.30),
        Place::new("55611").district("Kulon Progo"),
    ),
];

/// Composes a gazetteer entry: road, place name (unless it repeats the
/// district), district, city, province, postcode.
#[must_use]
pub fn compose(name: &str, place: &Place) -> String {
    let named = (Some(name) != place.city_district).then_some(name);

    join_parts([
        place.road.map(String::from),
        named.map(String::from),
        place.city_district.map(String::from),
        place.city.map(String::from),
        Some(PROVINCE_NAME.to_string()),
        Some(format!("Kode Pos {}", place.postcode)),
    ])
}

/// Looks `coord` up in [`PLACES`].
#[must_use]
pub fn lookup(coord: Coordinate) -> Option<AddressResult> {
    first_match(PLACES, coord).map(|rule| AddressResult {
        address: compose(rule.name, &rule.value),
        source: AddressSource::LocalGazetteer,
        components: rule.value.components(),
    })
}

/// Gazetteer stage of the resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gazetteer;

#[async_trait]
impl AddressStrategy for Gazetteer {
    fn source(&self) -> AddressSource {
        AddressSource::LocalGazetteer
    }

    async fn resolve(&self, coord: Coordinate) -> Result<AddressResult, GeocodeError> {
        lookup(coord).ok_or(GeocodeError::EmptyAddress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmarks_win_over_enclosing_city() {
        let tugu = lookup(Coordinate::new(-7.7825, 110.3675)).unwrap();
        assert_eq!(
            tugu.address,
            "Jalan Margo Utomo, Tugu Yogyakarta, Jetis, Yogyakarta, \
             Daerah Istimewa Yogyakarta, Kode Pos 55133"
        );
        assert_eq!(tugu.source, AddressSource::LocalGazetteer);
        assert_eq!(tugu.components.road.as_deref(), Some("Jalan Margo Utomo"));
    }

    #[test]
    fn name_equal_to_district_is_not_repeated() {
        let depok = lookup(Coordinate::new(-7.755, 110.38)).unwrap();
        assert_eq!(
            depok.address,
            "Depok, Sleman, Daerah Istimewa Yogyakarta, Kode Pos 55281"
        );
    }

    #[test]
    fn falls_through_to_regency() {
        let city = lookup(Coordinate::new(-7.79, 110.37)).unwrap();
        assert_eq!(
            city.address,
            "Kota Yogyakarta, Yogyakarta, Daerah Istimewa Yogyakarta, Kode Pos 55111"
        );
    }

    #[test]
    fn every_entry_is_reachable() {
        let probes = [
            ("Tugu Yogyakarta", (-7.7825, 110.3675)),
            ("Alun-Alun Utara", (-7.801, 110.364)),
            ("Kaliurang", (-7.595, 110.435)),
            ("Depok", (-7.755, 110.38)),
            ("Kasihan", (-7.84, 110.33)),
            ("Wonosari", (-7.96, 110.56)),
            ("Wates", (-7.86, 110.15)),
            ("Kota Yogyakarta", (-7.80, 110.39)),
            ("Sleman", (-7.65, 110.38)),
            ("Bantul", (-7.90, 110.35)),
            ("Gunungkidul", (-8.08, 110.50)),
            ("Kulon Progo", (-7.85, 110.20)),
        ];
        assert_eq!(probes.len(), PLACES.len());
        for (name, (lat, lng)) in probes {
            let hit = first_match(PLACES, Coordinate::new(lat, lng)).unwrap();
            assert_eq!(hit.name, name, "({lat}, {lng})");
        }
    }

    #[test]
    fn unknown_places_miss() {
        assert!(lookup(Coordinate::new(-7.52, 110.65)).is_none());
    }

    #[tokio::test]
    async fn strategy_reports_miss_as_empty_address() {
        let result = Gazetteer.resolve(Coordinate::new(-7.52, 110.65)).await;
        assert!(matches!(result, Err(GeocodeError::EmptyAddress)));
    }
}
