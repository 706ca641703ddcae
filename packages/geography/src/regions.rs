//! Canonical named regions of Daerah Istimewa Yogyakarta.
//!
//! Boundaries are coarse rectangles traced from the provincial
//! topographic and soil maps. They are shared by the parameter
//! estimator, the scorer's hotspot bonus, and the geological classifier.

use crate::GeoRect;

/// Upper flank of Gunung Merapi.
pub const MERAPI_FLANK: GeoRect = GeoRect::new(-7.62, -7.50, 110.38, 110.55);

/// Historic landslide and lahar area on the Merapi flank (Cangkringan).
pub const MERAPI_HOTSPOT: GeoRect = GeoRect::new(-7.62, -7.55, 110.42, 110.48);

/// Kota Yogyakarta urban core.
pub const YOGYAKARTA_CORE: GeoRect = GeoRect::new(-7.83, -7.76, 110.34, 110.42);

/// Southern karst hills (Pegunungan Sewu, Gunungkidul).
pub const SOUTHERN_KARST: GeoRect = GeoRect::new(-8.20, -7.98, 110.35, 110.70);

/// Baturagung ridge on the eastern karst escarpment.
pub const BATURAGUNG_RIDGE: GeoRect = GeoRect::new(-8.15, -8.05, 110.45, 110.55);

/// Menoreh hills on the western border (Kulon Progo).
pub const MENOREH_HILLS: GeoRect = GeoRect::new(-7.85, -7.70, 110.10, 110.18);

/// Suburban ring north of the city (Depok, Gamping, Mlati).
pub const SLEMAN_SUBURBS: GeoRect = GeoRect::new(-7.76, -7.70, 110.32, 110.45);

/// Irrigated agricultural belt of Sleman and Bantul.
pub const AGRICULTURAL_BELT: GeoRect = GeoRect::new(-7.98, -7.62, 110.18, 110.55);

/// Central volcanic plain.
pub const CENTRAL_PLAIN: GeoRect = GeoRect::new(-7.80, -7.62, 110.30, 110.55);

/// Western and south-western hills.
pub const WESTERN_HILLS: GeoRect = GeoRect::new(-7.95, -7.65, 110.10, 110.25);

/// Opak and Progo lowland river plain.
pub const SOUTHERN_RIVER_PLAIN: GeoRect = GeoRect::new(-8.05, -7.80, 110.18, 110.42);

/// Central Sleman foothills.
pub const SLEMAN_FOOTHILLS: GeoRect = GeoRect::new(-7.68, -7.60, 110.35, 110.42);

/// Western Gunungkidul around Wonosari.
pub const WONOSARI_PLATEAU: GeoRect = GeoRect::new(-8.05, -7.95, 110.35, 110.45);

/// Southern Bantul hills around Imogiri.
pub const IMOGIRI_HILLS: GeoRect = GeoRect::new(-7.92, -7.85, 110.35, 110.42);

/// Eastern Kulon Progo around Sentolo.
pub const SENTOLO_HILLS: GeoRect = GeoRect::new(-7.85, -7.80, 110.18, 110.25);
