//! Varprof: Dataset Profiling Library
//!
//! A library for profiling labeled tabular datasets before credit-scoring
//! model development: column classification, distribution charts against a
//! binary target, missing value rates and category frequency statistics.

pub mod cli;
pub mod profile;
pub mod report;
pub mod utils;
