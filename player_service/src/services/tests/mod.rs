//! In-crate tests for the orchestration flow, driven by mocked dependencies

mod round;
