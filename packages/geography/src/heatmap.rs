//! Static landslide risk heat-map overlay.
//!
//! Polygons the map UI draws over the basemap, summarizing the known
//! high, medium, and low risk areas of the province.

use landslide_risk_models::RiskLevel;
use serde::Serialize;

/// One heat-map polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapZone {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Tier of the zone.
    pub risk_level: RiskLevel,
    /// Representative score of the zone.
    pub risk_score: u8,
    /// Closed ring of `[lat, lng]` vertices.
    pub coordinates: &'static [[f64; 2]],
    /// Approximate resident population.
    pub population: u32,
    /// Area in square kilometers.
    pub area: f64,
}

/// All heat-map zones, high risk first.
pub const HEATMAP_ZONES: &[HeatmapZone] = &[
    HeatmapZone {
        id: "high-1",
        name: "Lereng Merapi - Sleman Utara",
        risk_level: RiskLevel::High,
        risk_score: 88,
        coordinates: &[
            [-7.55, 110.42],
            [-7.55, 110.48],
            [-7.60, 110.48],
            [-7.60, 110.45],
            [-7.62, 110.45],
            [-7.62, 110.42],
            [-7.55, 110.42],
        ],
        population: 12_500,
        area: 38.5,
    },
    HeatmapZone {
        id: "high-2",
        name: "Gunungkidul Timur - Pegunungan Baturagung",
        risk_level: RiskLevel::High,
        risk_score: 82,
        coordinates: &[
            [-8.05, 110.45],
            [-8.05, 110.55],
            [-8.15, 110.55],
            [-8.15, 110.50],
            [-8.12, 110.50],
            [-8.12, 110.45],
            [-8.05, 110.45],
        ],
        population: 18_000,
        area: 95.2,
    },
    HeatmapZone {
        id: "high-3",
        name: "Kulon Progo Barat - Perbukitan Menoreh",
        risk_level: RiskLevel::High,
        risk_score: 79,
        coordinates: &[
            [-7.70, 110.10],
            [-7.70, 110.18],
            [-7.80, 110.18],
            [-7.80, 110.15],
            [-7.85, 110.15],
            [-7.85, 110.10],
            [-7.70, 110.10],
        ],
        population: 9_500,
        area: 67.8,
    },
    HeatmapZone {
        id: "medium-1",
        name: "Sleman Tengah - Perbukitan",
        risk_level: RiskLevel::Medium,
        risk_score: 64,
        coordinates: &[
            [-7.60, 110.35],
            [-7.60, 110.42],
            [-7.68, 110.42],
            [-7.68, 110.38],
            [-7.65, 110.38],
            [-7.65, 110.35],
            [-7.60, 110.35],
        ],
        population: 45_000,
        area: 88.3,
    },
    HeatmapZone {
        id: "medium-2",
        name: "Gunungkidul Barat - Wonosari",
        risk_level: RiskLevel::Medium,
        risk_score: 58,
        coordinates: &[
            [-7.95, 110.35],
            [-7.95, 110.45],
            [-8.05, 110.45],
            [-8.05, 110.40],
            [-8.02, 110.40],
            [-8.02, 110.35],
            [-7.95, 110.35],
        ],
        population: 52_000,
        area: 120.7,
    },
    HeatmapZone {
        id: "medium-3",
        name: "Bantul Selatan - Imogiri",
        risk_level: RiskLevel::Medium,
        risk_score: 62,
        coordinates: &[
            [-7.85, 110.35],
            [-7.85, 110.42],
            [-7.92, 110.42],
            [-7.92, 110.38],
            [-7.90, 110.38],
            [-7.90, 110.35],
            [-7.85, 110.35],
        ],
        population: 38_000,
        area: 75.4,
    },
    HeatmapZone {
        id: "medium-4",
        name: "Kulon Progo Timur - Sentolo",
        risk_level: RiskLevel::Medium,
        risk_score: 55,
        coordinates: &[
            [-7.80, 110.18],
            [-7.80, 110.25],
            [-7.85, 110.25],
            [-7.85, 110.22],
            [-7.83, 110.22],
            [-7.83, 110.18],
            [-7.80, 110.18],
        ],
        population: 32_000,
        area: 58.9,
    },
    HeatmapZone {
        id: "low-1",
        name: "Kota Yogyakarta - Pusat Kota",
        risk_level: RiskLevel::Low,
        risk_score: 22,
        coordinates: &[
            [-7.78, 110.36],
            [-7.78, 110.40],
            [-7.82, 110.40],
            [-7.82, 110.37],
            [-7.80, 110.37],
            [-7.80, 110.36],
            [-7.78, 110.36],
        ],
        population: 380_000,
        area: 28.7,
    },
    HeatmapZone {
        id: "low-2",
        name: "Sleman Selatan - Depok",
        risk_level: RiskLevel::Low,
        risk_score: 28,
        coordinates: &[
            [-7.68, 110.38],
            [-7.68, 110.42],
            [-7.75, 110.42],
            [-7.75, 110.40],
            [-7.72, 110.40],
            [-7.72, 110.38],
            [-7.68, 110.38],
        ],
        population: 220_000,
        area: 65.2,
    },
    HeatmapZone {
        id: "low-3",
        name: "Bantul Utara - Kasihan",
        risk_level: RiskLevel::Low,
        risk_score: 25,
        coordinates: &[
            [-7.82, 110.37],
            [-7.82, 110.42],
            [-7.85, 110.42],
            [-7.85, 110.39],
            [-7.83, 110.39],
            [-7.83, 110.37],
            [-7.82, 110.37],
        ],
        population: 150_000,
        area: 45.8,
    },
    HeatmapZone {
        id: "low-4",
        name: "Sleman Barat - Gamping",
        risk_level: RiskLevel::Low,
        risk_score: 32,
        coordinates: &[
            [-7.75, 110.30],
            [-7.75, 110.35],
            [-7.80, 110.35],
            [-7.80, 110.32],
            [-7.77, 110.32],
            [-7.77, 110.30],
            [-7.75, 110.30],
        ],
        population: 95_000,
        area: 42.3,
    },
    HeatmapZone {
        id: "low-5",
        name: "Bantul Timur - Piyungan",
        risk_level: RiskLevel::Low,
        risk_score: 34,
        coordinates: &[
            [-7.82, 110.42],
            [-7.82, 110.48],
            [-7.85, 110.48],
            [-7.85, 110.45],
            [-7.84, 110.45],
            [-7.84, 110.42],
            [-7.82, 110.42],
        ],
        population: 68_000,
        area: 52.6,
    },
];
