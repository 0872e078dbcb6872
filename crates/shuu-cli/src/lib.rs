//! SHUU CLI library.
//!
//! Command implementations for the `shuu` binary. Each command computes a
//! serializable output first and only then prints it, so the same results
//! back both the colored and the `--json` modes.

pub mod commands;
