//! Submission file reader.
//!
//! Loads a file written by [`crate::writer`] back into a
//! [`SubmissionTable`], checking that the layout still holds: a known
//! header, a zero-based index column (when present) and gap-free 1-based
//! `Id`s.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::data::{SubmissionTable, ID_COLUMN, PREDICTION_COLUMN};
use crate::error::{Result, SubmissionError};
use crate::prediction::Prediction;

/// Reads a submission file from `path`.
///
/// Both layouts are accepted: `,Id,prediction` (with the leading index
/// column) and `Id,prediction`.
///
/// # Errors
///
/// - [`SubmissionError::Io`] if the file cannot be opened
/// - [`SubmissionError::UnexpectedHeader`] if the header is not a submission header
/// - [`SubmissionError::MalformedRow`] if an index or `Id` is out of sequence
/// - [`SubmissionError::Csv`] if a row has the wrong number of fields
pub fn read_submission<P: AsRef<Path>>(path: P) -> Result<SubmissionTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SubmissionError::io(path, e))?;
    let table = read_csv(file)?;
    debug!(path = %path.display(), rows = table.n_rows(), "Read submission");
    Ok(table)
}

/// Reads a submission table from any reader.
///
/// # Errors
///
/// Same as [`read_submission`], minus the open failure.
pub fn read_csv<R: Read>(reader: R) -> Result<SubmissionTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?;
    let has_index = match headers.iter().collect::<Vec<_>>().as_slice() {
        ["", id, pred] if *id == ID_COLUMN && *pred == PREDICTION_COLUMN => true,
        [id, pred] if *id == ID_COLUMN && *pred == PREDICTION_COLUMN => false,
        found => {
            return Err(SubmissionError::UnexpectedHeader {
                expected: format!(",{ID_COLUMN},{PREDICTION_COLUMN}"),
                found: found.join(","),
            })
        }
    };
    let id_col = usize::from(has_index);

    let mut predictions = Vec::new();
    // Line 1 is the header
    let mut line = 2;

    for result in reader.records() {
        let record = result?;
        let position = predictions.len();

        if has_index {
            let index = parse_field::<usize>(&record, 0, "index", line)?;
            if index != position {
                return Err(SubmissionError::malformed_row(
                    line,
                    format!("index {index} out of sequence, expected {position}"),
                ));
            }
        }

        let id = parse_field::<u64>(&record, id_col, ID_COLUMN, line)?;
        let expected_id = position as u64 + 1;
        if id != expected_id {
            return Err(SubmissionError::malformed_row(
                line,
                format!("Id {id} out of sequence, expected {expected_id}"),
            ));
        }

        let value = record.get(id_col + 1).ok_or_else(|| {
            SubmissionError::malformed_row(line, format!("missing {PREDICTION_COLUMN} field"))
        })?;
        predictions.push(Prediction::parse(value));
        line += 1;
    }

    Ok(SubmissionTable::from_predictions(predictions))
}

fn parse_field<T: std::str::FromStr>(
    record: &csv::StringRecord,
    col: usize,
    name: &str,
    line: usize,
) -> Result<T> {
    let raw = record
        .get(col)
        .ok_or_else(|| SubmissionError::malformed_row(line, format!("missing {name} field")))?;
    raw.trim().parse::<T>().map_err(|_| {
        SubmissionError::malformed_row(line, format!("{name} '{raw}' is not an integer"))
    })
}
