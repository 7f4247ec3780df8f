//! Bulk issue seeding for a fixed task catalog.
//!
//! Every catalog task either becomes one tracker issue, one entry of a JSON
//! export, or one line of a dry-run preview. The crate keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic logic (rendering, reports, invariants,
//!   mode selection). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (catalog and config files, export,
//!   the tracker HTTP client).
//!
//! Orchestration modules ([`submit`], [`cli`]) coordinate core logic with I/O.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod submit;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
