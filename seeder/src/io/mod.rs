//! I/O helpers for seeder commands.

pub mod catalog;
pub mod config;
pub mod export;
pub mod github;
pub mod tracker;
