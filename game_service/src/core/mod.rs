//! Core game logic

pub mod rules;

pub use rules::RuleSet;
