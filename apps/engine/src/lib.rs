#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use ai::{create_ai, AiConfig, AiError, AiPlayer};
pub use config::{ConfigError, GameRules};
pub use errors::{DomainError, ValidationKind};
pub use services::game_flow::{
    GameEvent, GameFlow, GameFlowError, GameObserver, GameResult, NoopObserver, Players,
    RecordingObserver, RoundSummary,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
