//! Core ledger logic

pub mod ledger;

pub use ledger::ScoreLedger;
