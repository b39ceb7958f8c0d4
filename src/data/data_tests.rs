pub(crate) use super::*;

#[test]
fn test_from_predictions_preserves_order() {
    let table = SubmissionTable::from_predictions(vec![3, 1, 2]);
    assert_eq!(
        table.predictions(),
        &[Prediction::Int(3), Prediction::Int(1), Prediction::Int(2)]
    );
}

#[test]
fn test_ids_are_one_based_and_gap_free() {
    let table = SubmissionTable::from_predictions(["a", "b", "c", "d", "e"]);
    let ids: Vec<u64> = table.ids().collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_empty_table() {
    let table = SubmissionTable::from_predictions(Vec::<f64>::new());
    assert!(table.is_empty());
    assert_eq!(table.n_rows(), 0);
    assert_eq!(table.ids().count(), 0);
    assert_eq!(table.rows().count(), 0);
    assert!(table.row(0).is_none());
}

#[test]
fn test_column_names() {
    let table = SubmissionTable::default();
    assert_eq!(table.column_names(), ["Id", "prediction"]);
}

#[test]
fn test_rows_pair_index_id_and_prediction() {
    let table = SubmissionTable::from_predictions([0.5, 0.25]);
    let rows: Vec<_> = table.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].index, 0);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].prediction, &Prediction::Float(0.5));
    assert_eq!(rows[1].index, 1);
    assert_eq!(rows[1].id, 2);
    assert_eq!(rows[1].prediction, &Prediction::Float(0.25));
}

#[test]
fn test_row_lookup() {
    let table = SubmissionTable::from_predictions([true, false]);
    let row = table.row(1).expect("row 1 exists");
    assert_eq!(row.id, 2);
    assert_eq!(row.prediction, &Prediction::Bool(false));
    assert!(table.row(2).is_none());
}

#[test]
fn test_collect_from_iterator() {
    let table: SubmissionTable = (0..4).map(|i| i % 2).collect();
    assert_eq!(table.n_rows(), 4);
    assert_eq!(table.into_predictions()[3], Prediction::Int(1));
}

#[test]
fn test_mixed_sources_convert() {
    let labels = vec!["cat".to_string(), "dog".to_string()];
    let table = SubmissionTable::from_predictions(&labels);
    assert_eq!(table.predictions()[1].as_label(), Some("dog"));
}
