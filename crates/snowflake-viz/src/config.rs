//! Settings shared by the binaries.

use std::env;
use std::str::FromStr;

use snowflake_tour::{BoundingRegion, Explorer};
use thiserror::Error;

/// Environment variable overriding [`TourConfig::seed`].
pub const SEED_VAR: &str = "SNOWFLAKE_SEED";
/// Environment variable overriding [`TourConfig::max_points`].
pub const MAX_POINTS_VAR: &str = "SNOWFLAKE_MAX_POINTS";
/// Environment variable overriding [`TourConfig::max_depth`]; `none` disables the limit.
pub const MAX_DEPTH_VAR: &str = "SNOWFLAKE_MAX_DEPTH";
/// Environment variable overriding [`TourConfig::log_level`].
pub const LOG_VAR: &str = "SNOWFLAKE_LOG";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },

    #[error("region must have positive width and height")]
    EmptyRegion,
}

/// Parameters for sampling and ordering one tour.
#[derive(Debug, Clone, PartialEq)]
pub struct TourConfig {
    pub width: f64,
    pub height: f64,
    /// Exclusive upper bound on the number of sampled points.
    pub max_points: usize,
    pub seed: u64,
    /// Decimal places kept in sampled coordinates.
    pub precision: u32,
    /// Depth limit for the explorer; `None` explores without a limit.
    pub max_depth: Option<usize>,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            max_points: 200,
            seed: 0,
            precision: 2,
            max_depth: Some(128),
            log_level: "info".to_string(),
        }
    }
}

impl TourConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|var| env::var(var).ok())
    }

    /// Applies overrides looked up by variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(value) = lookup(SEED_VAR) {
            self.seed = parse(SEED_VAR, &value)?;
        }
        if let Some(value) = lookup(MAX_POINTS_VAR) {
            self.max_points = parse(MAX_POINTS_VAR, &value)?;
        }
        if let Some(value) = lookup(MAX_DEPTH_VAR) {
            self.max_depth = if value.trim().eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse(MAX_DEPTH_VAR, &value)?)
            };
        }
        if let Some(value) = lookup(LOG_VAR) {
            self.log_level = value;
        }
        Ok(self)
    }

    /// Sets the region size.
    pub fn with_region(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the exclusive upper bound on the point count.
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Sets the number of decimal places kept in sampled coordinates.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the explorer's depth limit; `None` removes it.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the search region.
    pub fn region(&self) -> Result<BoundingRegion, ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::EmptyRegion);
        }
        Ok(BoundingRegion::new(self.width, self.height))
    }

    /// Returns an explorer honoring the depth limit.
    pub fn explorer(&self) -> Explorer {
        match self.max_depth {
            Some(depth) => Explorer::with_max_depth(depth),
            None => Explorer::new(),
        }
    }
}

fn parse<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn no_overrides_keeps_defaults() {
        let config = TourConfig::default().with_overrides(|_| None).unwrap();
        assert_eq!(config, TourConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = TourConfig::default()
            .with_overrides(lookup_from(&[
                (SEED_VAR, "42"),
                (MAX_POINTS_VAR, " 17 "),
                (MAX_DEPTH_VAR, "none"),
                (LOG_VAR, "debug"),
            ]))
            .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.max_points, 17);
        assert_eq!(config.max_depth, None);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.explorer().max_depth(), None);
    }

    #[test]
    fn bad_override_is_reported() {
        let err = TourConfig::default()
            .with_overrides(lookup_from(&[(MAX_DEPTH_VAR, "deep")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: MAX_DEPTH_VAR,
                value: "deep".to_string(),
            }
        );
    }

    #[test]
    fn builder_and_region() {
        let config = TourConfig::new()
            .with_region(40.0, 20.0)
            .with_seed(9)
            .with_max_points(5)
            .with_precision(3)
            .with_max_depth(Some(32));

        let region = config.region().unwrap();
        assert_eq!(region.width(), 40.0);
        assert_eq!(region.height(), 20.0);
        assert_eq!(config.explorer().max_depth(), Some(32));

        assert_eq!(
            TourConfig::new().with_region(0.0, 10.0).region(),
            Err(ConfigError::EmptyRegion)
        );
    }
}
