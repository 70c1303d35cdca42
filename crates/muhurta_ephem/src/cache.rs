//! Concurrent memoization for provider queries.
//!
//! Provider answers are pure functions of their arguments, so a search can
//! share one cache across all worker threads. Keys use the instant's Unix
//! nanoseconds and the bit patterns of the location coordinates; two
//! queries hit the same entry only when their inputs are bit-identical.
//! Errors are never cached.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;

use crate::body::Body;
use crate::error::EphemerisError;
use crate::location::GeoLocation;
use crate::provider::{PositionProvider, SunTimes};

/// Hit/miss telemetry of a [`CachedProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

type SunKey = (NaiveDate, (u64, u64, u64));

/// Memoizing wrapper around any [`PositionProvider`].
///
/// `CachedProvider` is [`Send`] + [`Sync`] whenever the inner provider is,
/// and concurrent readers never block each other on distinct keys.
pub struct CachedProvider<P> {
    inner: P,
    longitudes: DashMap<(Body, i64), f64>,
    sun_times: DashMap<SunKey, SunTimes>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<P: PositionProvider> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            longitudes: DashMap::new(),
            sun_times: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Number of memoized entries (longitudes + sun times).
    pub fn len(&self) -> usize {
        self.longitudes.len() + self.sun_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all memoized entries and reset the counters.
    pub fn clear(&self) {
        self.longitudes.clear();
        self.sun_times.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    fn record(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl<P: PositionProvider> PositionProvider for CachedProvider<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let Some(nanos) = instant.timestamp_nanos_opt() else {
            return self.inner.longitude(body, instant);
        };
        let key = (body, nanos);
        if let Some(lon) = self.longitudes.get(&key) {
            self.record(true);
            return Ok(*lon);
        }
        self.record(false);
        let lon = self.inner.longitude(body, instant)?;
        self.longitudes.insert(key, lon);
        Ok(lon)
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SunTimes, EphemerisError> {
        let key = (date, location.cache_key());
        if let Some(st) = self.sun_times.get(&key) {
            self.record(true);
            return Ok(*st);
        }
        self.record(false);
        let st = self.inner.sunrise_sunset(date, location)?;
        self.sun_times.insert(key, st);
        Ok(st)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::AtomicUsize;

    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl PositionProvider for CountingProvider {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if body == Body::Saturn {
                return Err(EphemerisError::unavailable("Saturn", "not modelled"));
            }
            Ok((instant.timestamp() as f64 / 3600.0).rem_euclid(360.0))
        }

        fn sunrise_sunset(
            &self,
            date: NaiveDate,
            _location: &GeoLocation,
        ) -> Result<SunTimes, EphemerisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let rise = date.and_hms_opt(6, 0, 0).unwrap().and_utc();
            let set = date.and_hms_opt(18, 0, 0).unwrap().and_utc();
            Ok(SunTimes::new(rise, set))
        }
    }

    fn provider() -> CachedProvider<CountingProvider> {
        CachedProvider::new(CountingProvider {
            calls: AtomicUsize::new(0),
        })
    }

    #[test]
    fn second_longitude_query_hits() {
        let p = provider();
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let a = p.longitude(Body::Moon, t).unwrap();
        let b = p.longitude(Body::Moon, t).unwrap();
        assert_eq!(a, b);
        assert_eq!(p.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(p.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn bodies_are_cached_separately() {
        let p = provider();
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        p.longitude(Body::Sun, t).unwrap();
        p.longitude(Body::Moon, t).unwrap();
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let p = provider();
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(p.longitude(Body::Saturn, t).is_err());
        assert!(p.longitude(Body::Saturn, t).is_err());
        assert_eq!(p.inner().calls.load(Ordering::SeqCst), 2);
        assert!(p.is_empty());
    }

    #[test]
    fn sun_times_cached_per_location() {
        let p = provider();
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let delhi = GeoLocation::new(28.6139, 77.209, 0.0);
        let mumbai = GeoLocation::new(19.076, 72.8777, 0.0);
        p.sunrise_sunset(date, &delhi).unwrap();
        p.sunrise_sunset(date, &delhi).unwrap();
        p.sunrise_sunset(date, &mumbai).unwrap();
        assert_eq!(p.inner().calls.load(Ordering::SeqCst), 2);
        assert_eq!(p.stats().hits, 1);
    }

    #[test]
    fn clear_resets() {
        let p = provider();
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        p.longitude(Body::Sun, t).unwrap();
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.stats(), CacheStats::default());
    }

    #[test]
    fn cached_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CachedProvider<CountingProvider>>();
    }
}
