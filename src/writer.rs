//! Submission file writer.
//!
//! Output layout with the default [`SubmissionConfig`]:
//!
//! ```text
//! ,Id,prediction
//! 0,1,<predictions[0]>
//! 1,2,<predictions[1]>
//! ```
//!
//! The destination is truncated and rewritten in full on every call. There
//! is no temp-file rename, so a failed write can leave a partial file, and
//! concurrent writers to one path race last-writer-wins.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::SubmissionConfig;
use crate::data::SubmissionTable;
use crate::error::{Result, SubmissionError};
use crate::prediction::Prediction;

/// Writes `predictions` to `path` as a submission CSV with the default layout.
///
/// Any existing file at `path` is overwritten. An empty sequence produces a
/// header-only file.
///
/// # Errors
///
/// Returns [`SubmissionError::Io`] if the file cannot be created (missing
/// parent directory, permission denied) and [`SubmissionError::Csv`] if
/// writing fails part way.
///
/// # Examples
///
/// ```
/// use submission::save_submission;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("out.csv");
/// save_submission(&path, [0, 1, 1, 0]).unwrap();
///
/// let contents = std::fs::read_to_string(&path).unwrap();
/// assert_eq!(contents, ",Id,prediction\n0,1,0\n1,2,1\n2,3,1\n3,4,0\n");
/// ```
pub fn save_submission<P, I, T>(path: P, predictions: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = T>,
    T: Into<Prediction>,
{
    save_submission_with(path, predictions, &SubmissionConfig::default())
}

/// Writes `predictions` to `path` using an explicit configuration.
///
/// # Errors
///
/// Same as [`save_submission`].
pub fn save_submission_with<P, I, T>(
    path: P,
    predictions: I,
    config: &SubmissionConfig,
) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = T>,
    T: Into<Prediction>,
{
    SubmissionTable::from_predictions(predictions).save(path, config)
}

impl SubmissionTable {
    /// Writes the table to `path`, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Io`] if the file cannot be created and
    /// [`SubmissionError::Csv`] if writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P, config: &SubmissionConfig) -> Result<()> {
        let path = path.as_ref();
        debug!(
            path = %path.display(),
            rows = self.n_rows(),
            write_index = config.write_index,
            "Writing submission"
        );

        let file = File::create(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Cannot open submission destination");
            SubmissionError::io(path, e)
        })?;

        self.write_csv(file, config)
    }

    /// Serializes the table as CSV into any writer.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Csv`] if the underlying writer fails.
    pub fn write_csv<W: Write>(&self, writer: W, config: &SubmissionConfig) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        wtr.write_record(config.header())?;

        for row in self.rows() {
            let id = row.id.to_string();
            let value = row.prediction.render(config.float_precision);
            if config.write_index {
                let index = row.index.to_string();
                wtr.write_record([index.as_str(), id.as_str(), value.as_str()])?;
            } else {
                wtr.write_record([id.as_str(), value.as_str()])?;
            }
        }

        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Renders the table as a CSV string.
    ///
    /// # Errors
    ///
    /// Only fails if CSV encoding fails, which an in-memory buffer does not.
    pub fn to_csv_string(&self, config: &SubmissionConfig) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf, config)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
