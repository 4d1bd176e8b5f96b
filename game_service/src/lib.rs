//! Game service: the resolution engine
//!
//! Resolves a pair of choices to a round outcome via an immutable rules
//! table, exposed over a thin HTTP surface.

pub mod core;
pub mod error;
pub mod web;

pub use self::core::RuleSet;
pub use error::{GameServiceError, GameServiceResult};
