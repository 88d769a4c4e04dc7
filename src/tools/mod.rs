//! The tools module provides helper functions for the command line side of the crate.
//!
//! The tools are:
//! - cli: Command line interface and user settable options.
//!
pub mod cli;
