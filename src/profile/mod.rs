//! Profile module - the statistical operations over a labeled dataset

pub mod bins;
pub mod categorical;
pub mod classify;
pub(crate) mod columns;
pub mod loader;
pub mod missing;
pub mod numeric;
pub mod window;

pub use bins::*;
pub use categorical::*;
pub use classify::*;
pub use loader::*;
pub use missing::*;
pub use numeric::*;
pub use window::*;
