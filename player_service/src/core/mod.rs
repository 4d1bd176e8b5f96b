//! Core orchestration logic

pub mod facts;
pub mod round;

pub use facts::FactCorpus;
pub use round::RoundOrchestrator;
