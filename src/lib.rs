//! Blockfall (workspace facade crate).
//!
//! Re-exports the simulation, input, renderer and shared types under one
//! name, and hosts the file-backed configuration used by the binary.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
