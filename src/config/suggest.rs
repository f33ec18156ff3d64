//! Suggestion configuration module.

use super::{ConfigResult, Validate};
use crate::distance::DistanceMetric;
use crate::error::config::ConfigError;
use crate::suggest::SuggestOptions;
use serde::{Deserialize, Serialize};

/// Suggestion engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Edit-distance metric used to rank candidates
    pub metric: DistanceMetric,

    /// Largest edit distance a candidate may have
    pub max_distance: usize,

    /// Maximum number of suggestions returned (unset means all)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            metric: DistanceMetric::default(),
            max_distance: 2,
            max_results: None,
        }
    }
}

impl Validate for SuggestConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_distance > 16 {
            return Err(ConfigError::ValueOutOfRange {
                key: "suggest.max_distance".to_string(),
                message: "must be at most 16".to_string(),
            });
        }

        if self.max_results == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_results must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }
}

impl From<&SuggestConfig> for SuggestOptions {
    fn from(config: &SuggestConfig) -> Self {
        SuggestOptions::new()
            .metric(config.metric)
            .max_distance(config.max_distance)
            .max_results(config.max_results)
    }
}
