//! Astronomical position provider contract for the muhurta engine.
//!
//! This crate provides:
//! - The [`PositionProvider`] trait: sidereal longitudes and sunrise/sunset
//! - [`CachedProvider`], a concurrent memoizing wrapper shared across a search
//! - [`AnalyticEphemeris`], a closed-form low-precision Sun/Moon provider
//! - Julian Date helpers for `chrono` UTC instants
//!
//! Every provider is `Send + Sync` and treated as pure: the same query
//! always yields the same answer.

pub mod analytic;
pub mod body;
pub mod cache;
pub mod error;
pub mod julian;
pub mod location;
pub mod provider;

pub use analytic::AnalyticEphemeris;
pub use body::{ALL_BODIES, Body};
pub use cache::{CacheStats, CachedProvider};
pub use error::EphemerisError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, centuries_since_j2000, date_midnight_jd,
    instant_to_jd, jd_to_instant,
};
pub use location::GeoLocation;
pub use provider::{PositionProvider, SunTimes};
