//! Provider-driven muhurta computations and the window search.
//!
//! This crate provides:
//! - Single-instant snapshots from any [`muhurta_ephem::PositionProvider`]
//! - Daily panchanga with tithi/nakshatra/yoga/karana end times
//! - A generic step-and-bisect boundary finder for discrete classifications
//! - The parallel multi-day window search with ranking and failure policy
//! - TOML-loadable engine configuration

pub mod boundary;
pub mod config;
pub mod context;
pub mod engine;
pub mod engine_types;
pub mod error;
pub mod panchang;
#[cfg(test)]
mod test_support;

pub use boundary::{BoundaryConfig, BoundaryFinder};
pub use config::{FailurePolicy, SearchConfig};
pub use context::{DayContext, local_instant, muhurta_at, solar_day, sun_moon};
pub use engine::MuhurtaSearchEngine;
pub use engine_types::{
    DAY_MAX_RESULTS, DEFAULT_GRANULARITY_MINUTES, DEFAULT_MAX_RESULTS, OptimizationResult,
    OptimizedWindow, SearchParams, SkippedDate,
};
pub use error::SearchError;
pub use panchang::{
    DailyPanchanga, daily_choghadiya, daily_horas, karana_end, nakshatra_end, panchanga_for_date,
    tithi_end, yoga_end,
};
