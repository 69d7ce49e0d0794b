//! Strategy registry: the built-in `AiPlayer`s, looked up by name.
//!
//! Names and versions are stable identifiers (they end up in simulator
//! output). Factories read what they need from an [`AiConfig`]: a seeded
//! player must repeat its choices for the same seed, and strategies without
//! randomness ignore it.

use crate::ai::{AiConfig, AiPlayer, AlwaysAccept, Heuristic, RandomPlayer};

pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AiConfig) -> Box<dyn AiPlayer>,
}

impl AiFactory {
    /// `name@version`, as recorded alongside results.
    pub fn label(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

static AI_FACTORIES: [AiFactory; 3] = [
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: |config| Box::new(RandomPlayer::new(config.seed())),
    },
    AiFactory {
        name: AlwaysAccept::NAME,
        version: AlwaysAccept::VERSION,
        make: |_| Box::new(AlwaysAccept::new()),
    },
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: |config| Box::new(Heuristic::from_config(config)),
    },
];

/// Every built-in strategy, in a fixed order.
pub fn registered_ais() -> &'static [AiFactory] {
    &AI_FACTORIES
}

/// Lookup ignoring ASCII case, so `heuristic` and `Heuristic` both resolve.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    AI_FACTORIES
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}
