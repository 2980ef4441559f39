//! Generation and session limits.

use config::ConfigError;
use serde::Deserialize;

/// Limits applied to a single generation cycle.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of raw phone tokens accepted per request.
    #[serde(default = "default_max_numbers")]
    pub max_numbers: usize,

    /// Maximum number of handles in one selection.
    #[serde(default = "default_max_handles")]
    pub max_handles: usize,

    /// Maximum `count` for the range input method.
    #[serde(default = "default_max_range_count")]
    pub max_range_count: u32,
}

const fn default_max_numbers() -> usize {
    10_000
}

const fn default_max_handles() -> usize {
    500
}

const fn default_max_range_count() -> u32 {
    100
}

impl GenerationConfig {
    /// Validate the generation limits.
    ///
    /// # Errors
    ///
    /// Returns an error if any limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_numbers == 0 {
            return Err(ConfigError::Message(
                "generation.max_numbers cannot be 0".to_string(),
            ));
        }
        if self.max_handles == 0 {
            return Err(ConfigError::Message(
                "generation.max_handles cannot be 0".to_string(),
            ));
        }
        if self.max_range_count == 0 {
            return Err(ConfigError::Message(
                "generation.max_range_count cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_numbers: default_max_numbers(),
            max_handles: default_max_handles(),
            max_range_count: default_max_range_count(),
        }
    }
}

/// Session lifetime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Idle time in seconds after which a session is discarded.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,

    /// Maximum number of live sessions.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Maximum number of custom handles per session.
    #[serde(default = "default_max_custom_handles")]
    pub max_custom_handles: usize,

    /// Number of history records kept per session; older ones are dropped.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

const fn default_idle_timeout() -> u64 {
    60 * 60 // 1 hour
}

const fn default_max_sessions() -> usize {
    1024
}

const fn default_max_custom_handles() -> usize {
    100
}

const fn default_max_history() -> usize {
    100
}

impl SessionConfig {
    /// Validate the session configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout or capacity is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.idle_timeout == 0 {
            return Err(ConfigError::Message(
                "session.idle_timeout cannot be 0".to_string(),
            ));
        }
        if self.max_sessions == 0 {
            return Err(ConfigError::Message(
                "session.max_sessions cannot be 0".to_string(),
            ));
        }
        if self.max_custom_handles == 0 {
            return Err(ConfigError::Message(
                "session.max_custom_handles cannot be 0".to_string(),
            ));
        }
        if self.max_history == 0 {
            return Err(ConfigError::Message(
                "session.max_history cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout: default_idle_timeout(),
            max_sessions: default_max_sessions(),
            max_custom_handles: default_max_custom_handles(),
            max_history: default_max_history(),
        }
    }
}
