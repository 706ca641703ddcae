//! Coarse administrative zones.
//!
//! The zone is the last-resort address and is always available: a
//! coordinate outside every zone rectangle still gets a positional label.

use landslide_risk_models::Coordinate;
use strum_macros::{AsRefStr, Display};

use crate::{GeoRect, RectRule, first_match, regions};

/// A named geographic zone of the province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum GeoZone {
    /// Upper slopes of Merapi in northern Sleman.
    #[strum(serialize = "Lereng Gunung Merapi")]
    MerapiSlope,
    /// Kota Yogyakarta.
    #[strum(serialize = "Kota Yogyakarta")]
    YogyakartaCity,
    /// Central Sleman.
    #[strum(serialize = "Kawasan Sleman Tengah")]
    CentralSleman,
    /// Kulon Progo regency.
    #[strum(serialize = "Kabupaten Kulon Progo")]
    KulonProgo,
    /// Eastern Gunungkidul karst.
    #[strum(serialize = "Kawasan Karst Gunungkidul")]
    GunungkidulKarst,
    /// Bantul regency.
    #[strum(serialize = "Kabupaten Bantul")]
    Bantul,
}

impl GeoZone {
    /// One-line hazard description for the zone.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MerapiSlope => "Zona Rawan Tinggi - Kawasan rawan longsor dan lahar",
            Self::YogyakartaCity => "Zona Relatif Aman - Dataran rendah, risiko rendah",
            Self::CentralSleman => {
                "Zona Waspada - Perbukitan dengan potensi gerakan tanah sedang"
            }
            Self::KulonProgo => "Zona Waspada - Perbukitan dengan risiko gerakan tanah",
            Self::GunungkidulKarst => "Zona Rawan Tinggi - Batuan kapur rawan longsor",
            Self::Bantul => "Zona Waspada - Dataran bergelombang dengan risiko sedang",
        }
    }
}

/// Zone lookup table, in priority order.
pub const ZONE_RULES: &[RectRule<GeoZone>] = &[
    RectRule::new(
        "merapi",
        GeoRect::new(-7.65, -7.50, 110.38, 110.70),
        GeoZone::MerapiSlope,
    ),
    RectRule::new("kota", regions::YOGYAKARTA_CORE, GeoZone::YogyakartaCity),
    RectRule::new(
        "sleman",
        GeoRect::new(-7.76, -7.50, 110.25, 110.70),
        GeoZone::CentralSleman,
    ),
    RectRule::new(
        "kulon_progo",
        GeoRect::new(-8.20, -7.50, 110.10, 110.25),
        GeoZone::KulonProgo,
    ),
    RectRule::new(
        "gunungkidul",
        GeoRect::new(-8.20, -7.80, 110.45, 110.70),
        GeoZone::GunungkidulKarst,
    ),
    RectRule::new(
        "bantul",
        GeoRect::new(-8.20, -7.76, 110.25, 110.45),
        GeoZone::Bantul,
    ),
];

/// Returns the zone containing `coord`, if any.
#[must_use]
pub fn classify_zone(coord: Coordinate) -> Option<GeoZone> {
    first_match(ZONE_RULES, coord).map(|rule| rule.value)
}

/// Returns a human-readable zone name; never empty.
#[must_use]
pub fn zone_name(coord: Coordinate) -> String {
    classify_zone(coord).map_or_else(
        || format!("Lokasi di {:.4}, {:.4}", coord.latitude, coord.longitude),
        |zone| zone.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_representative_points() {
        let cases = [
            ((-7.58, 110.45), GeoZone::MerapiSlope),
            ((-7.79, 110.37), GeoZone::YogyakartaCity),
            ((-7.72, 110.40), GeoZone::CentralSleman),
            ((-7.86, 110.15), GeoZone::KulonProgo),
            ((-8.10, 110.50), GeoZone::GunungkidulKarst),
            ((-7.95, 110.33), GeoZone::Bantul),
        ];
        for ((lat, lng), expected) in cases {
            assert_eq!(
                classify_zone(Coordinate::new(lat, lng)),
                Some(expected),
                "({lat}, {lng})"
            );
        }
    }

    #[test]
    fn unmatched_points_get_positional_name() {
        let name = zone_name(Coordinate::new(-7.78, 110.60));
        assert_eq!(name, "Lokasi di -7.7800, 110.6000");
    }

    #[test]
    fn zone_names_are_never_empty() {
        for lat_step in 0..=14 {
            for lng_step in 0..=12 {
                let coord = Coordinate::new(
                    -8.20 + f64::from(lat_step) * 0.05,
                    110.10 + f64::from(lng_step) * 0.05,
                );
                assert!(!zone_name(coord).is_empty());
            }
        }
    }

    #[test]
    fn every_zone_has_a_description() {
        for rule in ZONE_RULES {
            assert!(rule.value.description().starts_with("Zona"));
        }
    }
}
