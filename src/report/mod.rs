//! Report module - chart rendering, index pages and run summaries

pub mod chart;
pub mod export;
pub mod index;
pub mod summary;

pub use chart::*;
pub use export::*;
pub use index::*;
pub use summary::*;
