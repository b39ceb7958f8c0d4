//! Submission: write model predictions as scoring-ready CSV files.
//!
//! A submission pairs a synthesized 1-based `Id` with each prediction, in
//! input order, and writes the result as comma-separated text. The default
//! layout keeps a leading unnamed zero-based row-index column, matching the
//! files existing scoring pipelines already consume.
//!
//! # Quick Start
//!
//! ```
//! use submission::prelude::*;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("submission.csv");
//!
//! save_submission(&path, [0, 1, 1, 0]).unwrap();
//!
//! let table = read_submission(&path).unwrap();
//! assert_eq!(table.n_rows(), 4);
//! assert_eq!(table.ids().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! ```
//!
//! # Modules
//!
//! - [`prediction`]: Scalar prediction values and their text rendering
//! - [`data`]: `SubmissionTable` pairing Ids with predictions
//! - [`config`]: Output layout options (index column, float precision)
//! - [`writer`]: Writing submission files
//! - [`reader`]: Reading submission files back with layout checks
//! - [`error`]: Error type and `Result` alias

pub mod config;
pub mod data;
pub mod error;
pub mod prediction;
pub mod prelude;
pub mod reader;
pub mod writer;

pub use config::SubmissionConfig;
pub use data::SubmissionTable;
pub use error::{Result, SubmissionError};
pub use prediction::Prediction;
pub use reader::read_submission;
pub use writer::{save_submission, save_submission_with};
