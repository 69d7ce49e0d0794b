//! Error handling for the Euchre engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
