//! Regression loss statistics between a reference and an obtained x/y dataset.
//!
//! ```text
//!   load_file ─► check_consistent ─► calculate_losses ─► render
//! ```

pub mod data;
pub mod error;
pub mod metrics;
pub mod report;

pub use data::check::check_consistent;
pub use data::loader::load_file;
pub use data::model::{Dataset, Range};
pub use error::{Error, Result};
pub use metrics::{calculate_losses, Losses};
pub use report::{render, DEFAULT_PRECISION};
