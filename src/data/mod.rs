//! `SubmissionTable`: the Id/prediction table written to a submission file.
//!
//! The table owns the predictions only; `Id` is derived from row position
//! (1-based) so it is gap-free and strictly increasing by construction.

use crate::prediction::Prediction;

/// Name of the synthesized identifier column.
pub const ID_COLUMN: &str = "Id";

/// Name of the prediction column.
pub const PREDICTION_COLUMN: &str = "prediction";

/// A two-column submission table with `Id` and `prediction` columns.
///
/// # Examples
///
/// ```
/// use submission::data::SubmissionTable;
///
/// let table = SubmissionTable::from_predictions([0, 1, 1, 0]);
/// assert_eq!(table.n_rows(), 4);
/// assert_eq!(table.ids().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionTable {
    predictions: Vec<Prediction>,
}

/// One row of a [`SubmissionTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmissionRow<'a> {
    /// Zero-based positional index (the unnamed leading column).
    pub index: usize,
    /// One-based identifier.
    pub id: u64,
    /// Prediction for this row.
    pub prediction: &'a Prediction,
}

impl SubmissionTable {
    /// Builds a table from predictions in their original order.
    pub fn from_predictions<I, T>(predictions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Prediction>,
    {
        Self {
            predictions: predictions.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.predictions.len()
    }

    /// Returns true when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Returns the column names in output order.
    #[must_use]
    pub fn column_names(&self) -> [&'static str; 2] {
        [ID_COLUMN, PREDICTION_COLUMN]
    }

    /// Returns the `Id` column: `1..=n_rows`.
    pub fn ids(&self) -> impl Iterator<Item = u64> {
        1..=self.predictions.len() as u64
    }

    /// Returns the `prediction` column.
    #[must_use]
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    /// Returns a row by zero-based index, if present.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<SubmissionRow<'_>> {
        self.predictions.get(index).map(|prediction| SubmissionRow {
            index,
            id: index as u64 + 1,
            prediction,
        })
    }

    /// Returns an iterator over rows in output order.
    pub fn rows(&self) -> impl Iterator<Item = SubmissionRow<'_>> {
        self.predictions
            .iter()
            .enumerate()
            .map(|(index, prediction)| SubmissionRow {
                index,
                id: index as u64 + 1,
                prediction,
            })
    }

    /// Consumes the table, returning the predictions.
    #[must_use]
    pub fn into_predictions(self) -> Vec<Prediction> {
        self.predictions
    }
}

impl<T: Into<Prediction>> FromIterator<T> for SubmissionTable {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_predictions(iter)
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
