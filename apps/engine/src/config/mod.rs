pub mod rules;

pub use rules::{ConfigError, GameRules};
