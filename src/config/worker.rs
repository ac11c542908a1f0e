//! Worker configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound on concurrently running jobs
pub const MAX_CONCURRENT_JOBS_LIMIT: usize = 256;

/// Job worker configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WorkerConfig {
    /// Jobs running on the blocking pool at once
    #[serde(default = "default_max_concurrent_jobs")]
    pub max_concurrent_jobs: usize,
}

impl WorkerConfig {
    /// Validate worker configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_concurrent_jobs == 0 || self.max_concurrent_jobs > MAX_CONCURRENT_JOBS_LIMIT {
            return Err(ValidationError::InvalidConcurrency {
                max: MAX_CONCURRENT_JOBS_LIMIT,
                actual: self.max_concurrent_jobs,
            });
        }
        Ok(())
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_jobs: default_max_concurrent_jobs(),
        }
    }
}

fn default_max_concurrent_jobs() -> usize {
    8
}
