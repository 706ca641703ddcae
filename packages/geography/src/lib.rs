#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Table-driven geography for the Yogyakarta analysis region.
//!
//! Every lookup in the risk pipeline is a walk over an ordered table of
//! named lat/lng rectangles ([`rect::RectRule`]) where the first
//! containing rule wins. This crate owns the rectangle primitive, the
//! canonical named regions shared by the estimator and classifier, the
//! coarse administrative zones used as the last-resort address, and the
//! static risk heat-map overlay served to the map UI.
//!
//! All tables are `const` data: immutable for the life of the process and
//! safe to read from any number of concurrent requests.

pub mod heatmap;
pub mod rect;
pub mod regions;
pub mod zone;

pub use rect::{GeoRect, RectRule, first_match};
pub use zone::{GeoZone, classify_zone, zone_name};
