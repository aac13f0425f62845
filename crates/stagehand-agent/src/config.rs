//! Configuration for the action loop.

use serde::{Deserialize, Serialize};

/// Knobs for one task execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Maximum number of model turns per task.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Settle delay after each executed action, in milliseconds.
    #[serde(default = "default_wait_between_actions_ms")]
    pub wait_between_actions_ms: u64,

    /// Maximum attempts per model call.
    #[serde(default = "default_model_retry_attempts")]
    pub model_retry_attempts: u32,

    /// Base delay for exponential backoff between model call attempts,
    /// in milliseconds.
    #[serde(default = "default_model_retry_base_delay_ms")]
    pub model_retry_base_delay_ms: u64,

    /// Per-attempt model call timeout, in milliseconds.
    #[serde(default = "default_model_timeout_ms")]
    pub model_timeout_ms: u64,
}

fn default_max_steps() -> usize {
    20
}

fn default_wait_between_actions_ms() -> u64 {
    500
}

fn default_model_retry_attempts() -> u32 {
    3
}

fn default_model_retry_base_delay_ms() -> u64 {
    1000
}

fn default_model_timeout_ms() -> u64 {
    180_000
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            wait_between_actions_ms: default_wait_between_actions_ms(),
            model_retry_attempts: default_model_retry_attempts(),
            model_retry_base_delay_ms: default_model_retry_base_delay_ms(),
            model_timeout_ms: default_model_timeout_ms(),
        }
    }
}
