use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_TARGET_SCORE: u32 = 21;
pub const DEFAULT_TURN_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_AI_THINK_TIME: Duration = Duration::from_millis(500);

/// Settings a collaborator supplies when it creates a game session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Cumulative score that ends the game.
    pub target_score: u32,
    /// How long a human seat may think before the autopilot plays for it.
    #[serde(rename = "turn_timeout_secs", deserialize_with = "secs")]
    pub turn_timeout: Duration,
    /// Delay before an automated seat plays.
    #[serde(rename = "ai_think_ms", deserialize_with = "millis")]
    pub ai_think_time: Duration,
    /// Fixed game seed; `None` draws one from the OS per session.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            turn_timeout: DEFAULT_TURN_TIMEOUT,
            ai_think_time: DEFAULT_AI_THINK_TIME,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `CHKOBBA_TARGET_SCORE`, `CHKOBBA_TURN_TIMEOUT_SECS`,
    /// `CHKOBBA_AI_THINK_MS` and `CHKOBBA_SEED` when they are set.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(v) = parsed_var::<u32>("CHKOBBA_TARGET_SCORE")? {
            config.target_score = v;
        }
        if let Some(v) = parsed_var::<u64>("CHKOBBA_TURN_TIMEOUT_SECS")? {
            config.turn_timeout = Duration::from_secs(v);
        }
        if let Some(v) = parsed_var::<u64>("CHKOBBA_AI_THINK_MS")? {
            config.ai_think_time = Duration::from_millis(v);
        }
        config.seed = parsed_var::<u64>("CHKOBBA_SEED")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.target_score == 0 {
            return Err(AppError::config("target_score must be at least 1"));
        }
        if self.turn_timeout.is_zero() {
            return Err(AppError::config("turn_timeout must be positive"));
        }
        if self.ai_think_time >= self.turn_timeout {
            return Err(AppError::config(format!(
                "ai_think_time ({:?}) must be shorter than turn_timeout ({:?})",
                self.ai_think_time, self.turn_timeout
            )));
        }
        Ok(())
    }
}

/// Parse an optional environment variable; present but malformed is an error.
fn parsed_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has invalid value '{raw}'"
            ))
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(AppError::config(format!(
            "Environment variable '{name}' is not valid unicode"
        ))),
    }
}

fn secs<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
    u64::deserialize(d).map(Duration::from_secs)
}

fn millis<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
    u64::deserialize(d).map(Duration::from_millis)
}
