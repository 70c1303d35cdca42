//! Engine configuration: knobs that are not part of a single query.
//!
//! Loaded from TOML; every field is optional and falls back to its default.
//!
//! ```toml
//! failure_policy = "skip_date"
//! worker_threads = 4
//! stop_after_excellent = true
//! boundary_step_minutes = 5
//! boundary_horizon_hours = 72
//! boundary_precision_minutes = 1
//! ```

use std::path::Path;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryConfig;
use crate::error::SearchError;

/// What the window search does when one date cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Fail the whole search with the first date error.
    #[default]
    AbortSearch,
    /// Drop the date, record it in the result and continue.
    SkipDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub failure_policy: FailurePolicy,
    /// Size of the per-engine worker pool; 0 uses the rayon default.
    pub worker_threads: usize,
    /// Stop scanning once `max_results` excellent windows are in hand.
    pub stop_after_excellent: bool,
    pub boundary_step_minutes: u32,
    pub boundary_horizon_hours: u32,
    pub boundary_precision_minutes: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::AbortSearch,
            worker_threads: 0,
            stop_after_excellent: false,
            boundary_step_minutes: 5,
            boundary_horizon_hours: 72,
            boundary_precision_minutes: 1,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.boundary_step_minutes == 0 {
            return Err(SearchError::InvalidConfig(
                "boundary_step_minutes must be > 0",
            ));
        }
        if self.boundary_precision_minutes == 0 {
            return Err(SearchError::InvalidConfig(
                "boundary_precision_minutes must be > 0",
            ));
        }
        if self.boundary_precision_minutes > self.boundary_step_minutes {
            return Err(SearchError::InvalidConfig(
                "boundary_precision_minutes must not exceed boundary_step_minutes",
            ));
        }
        if u64::from(self.boundary_horizon_hours) * 60 < u64::from(self.boundary_step_minutes) {
            return Err(SearchError::InvalidConfig(
                "boundary_horizon_hours must cover at least one step",
            ));
        }
        Ok(())
    }

    /// Boundary search settings derived from the `boundary_*` fields.
    pub fn boundary(&self) -> BoundaryConfig {
        BoundaryConfig {
            step: TimeDelta::minutes(i64::from(self.boundary_step_minutes)),
            horizon: TimeDelta::hours(i64::from(self.boundary_horizon_hours)),
            precision: TimeDelta::minutes(i64::from(self.boundary_precision_minutes)),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, SearchError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| SearchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SearchError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = SearchConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.failure_policy, FailurePolicy::AbortSearch);
        assert_eq!(c.boundary(), BoundaryConfig::default());
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(
            SearchConfig::from_toml_str("").unwrap(),
            SearchConfig::default()
        );
    }

    #[test]
    fn partial_toml() {
        let c = SearchConfig::from_toml_str(
            "failure_policy = \"skip_date\"\nworker_threads = 2\nstop_after_excellent = true\n",
        )
        .unwrap();
        assert_eq!(c.failure_policy, FailurePolicy::SkipDate);
        assert_eq!(c.worker_threads, 2);
        assert!(c.stop_after_excellent);
        assert_eq!(c.boundary_step_minutes, 5);
    }

    #[test]
    fn unknown_policy_is_parse_error() {
        let r = SearchConfig::from_toml_str("failure_policy = \"retry\"");
        assert!(matches!(r, Err(SearchError::Config(_))));
    }

    #[test]
    fn rejects_zero_step() {
        let r = SearchConfig::from_toml_str("boundary_step_minutes = 0");
        assert!(matches!(r, Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_precision_above_step() {
        let c = SearchConfig {
            boundary_precision_minutes: 10,
            ..SearchConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn missing_file_is_config_error() {
        let r = SearchConfig::from_toml_file("/nonexistent/muhurta.toml");
        assert!(matches!(r, Err(SearchError::Config(_))));
    }
}
