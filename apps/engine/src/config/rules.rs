use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable '{name}' has invalid value '{value}'")]
    InvalidVar { name: &'static str, value: String },
    #[error("invalid rules: {0}")]
    Invalid(String),
}

/// Table rules for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// First team to reach this many points wins.
    pub winning_score: u8,
    /// Dealer takes the up-card (and discards) when it is ordered up.
    pub dealer_picks_up: bool,
    /// How many times a strategy is re-asked after an invalid decision.
    pub max_decision_retries: u8,
    /// Rounds (including aborted ones) allowed before the game is abandoned.
    pub round_limit: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            winning_score: 10,
            dealer_picks_up: true,
            max_decision_retries: 3,
            round_limit: 500,
        }
    }
}

impl GameRules {
    /// Defaults overridden by `EUCHRE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let rules = Self {
            winning_score: parsed_var(&lookup, "EUCHRE_WINNING_SCORE")?
                .unwrap_or(defaults.winning_score),
            dealer_picks_up: parsed_var(&lookup, "EUCHRE_DEALER_PICKS_UP")?
                .unwrap_or(defaults.dealer_picks_up),
            max_decision_retries: parsed_var(&lookup, "EUCHRE_MAX_DECISION_RETRIES")?
                .unwrap_or(defaults.max_decision_retries),
            round_limit: parsed_var(&lookup, "EUCHRE_ROUND_LIMIT")?.unwrap_or(defaults.round_limit),
        };
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.winning_score == 0 {
            return Err(ConfigError::Invalid("winning_score must be at least 1".into()));
        }
        if self.round_limit == 0 {
            return Err(ConfigError::Invalid("round_limit must be at least 1".into()));
        }
        Ok(())
    }
}

/// Unset means `None`; set but unparsable is an error.
fn parsed_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { name, value: raw }),
    }
}
