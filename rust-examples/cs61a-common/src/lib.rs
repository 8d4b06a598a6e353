//! # CS61A Common Utilities
//!
//! Shared pieces for the CS61A Rust exercises: the error type, logging setup,
//! configuration, and a write-once memo table.
//!
//! ## Modules
//!
//! - [`error`]: `Error` and `Result` used across the exercise crates
//! - [`logging`]: `tracing` subscriber setup for binaries and tests
//! - [`config`]: TOML configuration with defaults for every section
//! - [`memo`]: Write-once memoization table backed by `im::OrdMap`
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: caches are owned values, never module-level globals
//! 2. **Iteration over recursion**: exercises that recurse in the textbook are
//!    driven by loops or explicit stacks here
//! 3. **Defined failure**: out-of-domain input returns `Error::InvalidArgument`

pub mod config;
pub mod error;
pub mod logging;
pub mod memo;

// Re-export main types for convenience
pub use config::{CacheScope, Config, CountStrategy};
pub use error::{Error, Result};
pub use memo::MemoTable;
