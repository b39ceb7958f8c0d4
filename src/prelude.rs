//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use submission::prelude::*;
//! ```

pub use crate::config::SubmissionConfig;
pub use crate::data::{SubmissionRow, SubmissionTable};
pub use crate::error::SubmissionError;
pub use crate::prediction::Prediction;
pub use crate::reader::read_submission;
pub use crate::writer::{save_submission, save_submission_with};
