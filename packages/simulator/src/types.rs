//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game, written as each game finishes.
    Jsonl,
    /// A single JSON array written when the run ends.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    Detailed,
}

/// Strategy choice for one seat, mapped onto the engine's AI registry.
#[derive(Debug, Clone, ValueEnum)]
pub enum AiType {
    Random,
    AlwaysAccept,
    Heuristic,
}

impl AiType {
    pub fn name(&self) -> &'static str {
        match self {
            AiType::Random => "RandomPlayer", // Actual name in registry
            AiType::AlwaysAccept => "AlwaysAccept",
            AiType::Heuristic => "Heuristic",
        }
    }
}
