//! The tools module provides the helpers around the lz77 codec.
//!
//! The tools are:
//! - cli: Command line interface for lz77.
//!
pub mod cli;
