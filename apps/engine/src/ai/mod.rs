//! AI player module - decision strategies for the four seats.
//!
//! - `AiPlayer`: the capability the controller calls for every decision
//! - `RandomPlayer`, `AlwaysAccept`, `Heuristic`: built-in strategies
//! - `registry`: lookup of strategies by name

mod always_accept;
mod config;
mod heuristic;
mod random;
pub mod registry;
#[cfg(test)]
mod test_support;
mod trait_def;

pub use always_accept::AlwaysAccept;
pub use config::AiConfig;
pub use heuristic::Heuristic;
pub use random::RandomPlayer;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI by registry name with an optional JSON config.
///
/// Returns None if `name` is not registered.
pub fn create_ai(name: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let factory = registry::by_name(name)?;
    Some((factory.make)(&AiConfig::from_json(config)))
}
