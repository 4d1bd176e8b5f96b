//! Shared types for the FunGame services
//!
//! Contains only truly shared types for inter-service communication: the
//! game enums, the wire request/response shapes, and the tracing setup used
//! by every binary. Service-internal types (rules table, ledger, fun facts)
//! are kept in their respective services.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
