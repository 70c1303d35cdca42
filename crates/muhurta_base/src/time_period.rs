//! Half-open time intervals over instants and over local time of day.
//!
//! [`TimePeriod`] is an absolute `[start, end)` interval of UTC instants; it
//! never wraps because instants are totally ordered. [`TimeOfDayRange`] is a
//! local wall-clock range that may cross midnight (`end < start`).

use chrono::{DateTime, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MuhurtaError;

/// Half-open interval `[start, end)` of UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimePeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimePeriod {
    /// Interval from `start` to `end`; `end` must not precede `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, MuhurtaError> {
        if end < start {
            return Err(MuhurtaError::InvalidInput("period end precedes start"));
        }
        Ok(Self { start, end })
    }

    /// True when `start <= t < end`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// True when the two intervals share at least one instant.
    pub fn overlaps(&self, other: &TimePeriod) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Split into `n` equal consecutive parts.
    ///
    /// Boundary `i` lies at `start + span * i / n` (integer nanoseconds), so
    /// neighbours share endpoints exactly and the last part ends at `end`.
    pub fn split(&self, n: u32) -> Result<Vec<TimePeriod>, MuhurtaError> {
        if n == 0 {
            return Err(MuhurtaError::InvalidInput("cannot split into zero parts"));
        }
        let span = self
            .duration()
            .num_nanoseconds()
            .ok_or(MuhurtaError::InvalidInput("period too long to split"))?;
        let boundary = |i: u32| -> DateTime<Utc> {
            if i == n {
                return self.end;
            }
            let offset = i128::from(span) * i128::from(i) / i128::from(n);
            // offset <= span, which already fits in i64
            self.start + TimeDelta::nanoseconds(offset as i64)
        };
        Ok((0..n)
            .map(|i| TimePeriod {
                start: boundary(i),
                end: boundary(i + 1),
            })
            .collect())
    }

    /// The 1-based `slot` of `n` equal parts.
    pub fn slot(&self, n: u32, slot: u32) -> Result<TimePeriod, MuhurtaError> {
        if slot == 0 || slot > n {
            return Err(MuhurtaError::InvalidInput("slot out of range"));
        }
        let parts = self.split(n)?;
        Ok(parts[(slot - 1) as usize])
    }
}

/// Local time-of-day range, possibly crossing midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeOfDayRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeOfDayRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// True when the range crosses local midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Half-open membership `[start, end)`, wrapping past midnight.
    pub fn contains(&self, t: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= t && t < self.end
        } else {
            t >= self.start || t < self.end
        }
    }

    /// Closed membership `[start, end]`, wrapping past midnight.
    pub fn contains_inclusive(&self, t: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= t && t <= self.end
        } else {
            t >= self.start || t <= self.end
        }
    }
}
