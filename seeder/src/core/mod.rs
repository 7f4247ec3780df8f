//! Deterministic, pure logic shared by the seeder.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod invariants;
pub mod mode;
pub mod preview;
pub mod render;
pub mod report;
pub mod repository;
pub mod task;
