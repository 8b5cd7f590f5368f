//! Derived-metrics layer for a hockey analytics dashboard: pure, stateless
//! transforms from raw stat rows into the percentiles, tiers, composite
//! scores, chemistry lookups, and chart axes the UI displays.

pub mod chemistry;
pub mod composite;
pub mod goalie;
pub mod heat;
pub mod normalize;
pub mod params;
pub mod payload;
pub mod percentile;
pub mod rankings;
pub mod rates;
pub mod rows;
pub mod sample_feed;
pub mod tiers;
