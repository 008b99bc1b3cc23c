//! This module contains the measured EDM limit hierarchy.
//!
//! It includes the closed [`System`] tag, the per-system conversion table, the [`EdmLimit`]
//! value object that exposes derived bounds, and batch summaries for reporting many limits
//! at once.

pub mod conversion;
mod limit;
mod summary;
mod system;

pub use limit::EdmLimit;
pub use summary::{LimitSummary, summarize};
pub use system::System;
