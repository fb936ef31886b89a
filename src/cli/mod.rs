//! CLI module - argument definitions

pub mod args;

pub use args::*;
