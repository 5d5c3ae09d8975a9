//! Runa syntax toolkit: command-line frontend over the `runa_syntax` crate.
//!
//! The library surface here is the CLI itself; editor integrations should
//! depend on `runa_syntax` (and `runa_core` for vocabulary) directly.

pub mod cli;
