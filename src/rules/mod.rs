//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal intents for each state
//! - How intents produce the next state
//! - Win conditions

pub mod engine;

pub use engine::{EndReason, GameResult, RulesEngine, Transition};
