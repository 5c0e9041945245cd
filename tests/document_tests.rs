use rustmatrix::json::{JsonToValueConverter, ValueToJsonConverter};
use rustmatrix::{MatrixDocument, MatrixError, RowKey, TableRenderer, Value};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const RGB_DOCUMENT: &str = r#"{
    "schema": {
        "count": 3,
        "kind": "integer",
        "allowed_keys": ["red", "green", "blue"],
        "strict": true
    },
    "rows": [
        {"name": "m1", "values": {"red": 2, "green": 1, "blue": 4}},
        {"name": "m2", "values": {"red": 2, "green": 3, "blue": 4}}
    ],
    "coefficients": {"red": 0.5, "green": 0.5, "blue": 1.0}
}"#;

#[test]
fn test_document_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("matrix.json");
    fs::write(&path, RGB_DOCUMENT).unwrap();

    let document = MatrixDocument::from_path(&path).unwrap();
    let table = document.build_table().unwrap();
    assert_eq!(table.row_count(), 2);

    let scores = table.compute_potential(&document.coefficients).unwrap();
    assert!((scores.get(&"m2".into()).unwrap() - 2.0).abs() < 1e-9);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = MatrixDocument::from_path(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, MatrixError::Io(_)));
}

#[test]
fn test_malformed_json_is_json_error() {
    let err = MatrixDocument::from_json_str("{\"schema\": ").unwrap_err();
    assert!(matches!(err, MatrixError::Json(_)));
}

#[test]
fn test_strict_document_propagates_validation_error() {
    let document = MatrixDocument::from_json_str(
        r#"{
            "schema": {"count": 2, "kind": "integer"},
            "rows": [{"values": {"a": 1, "b": 2, "c": 3}}]
        }"#,
    )
    .unwrap();

    let err = document.build_table().unwrap_err();
    assert!(matches!(err, MatrixError::Shape { expected: 2, actual: 3 }));
}

#[test]
fn test_lenient_document_skips_bad_rows() {
    let document = MatrixDocument::from_json_str(
        r#"{
            "schema": {"count": 2, "kind": "string", "strict": false},
            "rows": [
                {"values": {"a": "x", "b": 2}},
                {"values": {"a": "only"}},
                {"values": {"a": "y", "b": "z"}}
            ]
        }"#,
    )
    .unwrap();

    let table = document.build_table().unwrap();
    let keys: Vec<_> = table.keys().cloned().collect();
    assert_eq!(keys, vec![RowKey::Index(0), RowKey::Index(1)]);
    assert_eq!(table.line(&RowKey::Index(0)).unwrap().len(), 1);
}

#[test]
fn test_object_rows_round_trip_through_snapshot() {
    let document = MatrixDocument::from_json_str(
        r#"{
            "schema": {"count": 1, "kind": "object", "class": "Point"},
            "rows": [{"name": "origin", "values": {"at": {"$class": "Point", "x": 0, "y": 0}}}]
        }"#,
    )
    .unwrap();

    let table = document.build_table().unwrap();
    assert_eq!(
        table.to_json(),
        json!([{"name": "origin", "values": {"at": {"$class": "Point", "x": 0, "y": 0}}}])
    );
}

#[test]
fn test_converters_are_inverse_for_plain_values() {
    let original = json!({"list": [1, 2.5, "three", false, null]});
    let value = JsonToValueConverter::convert(&original["list"]);
    assert!(matches!(value, Value::Array(ref items) if items.len() == 5));
    assert_eq!(ValueToJsonConverter::convert(&value), original["list"]);
}

#[test]
fn test_render_nested_arrays() {
    let document = MatrixDocument::from_json_str(
        r#"{
            "schema": {"count": 1, "kind": "array"},
            "rows": [{"name": "r", "values": {"tags": [1, [2, 3]]}}]
        }"#,
    )
    .unwrap();
    let table = document.build_table().unwrap();

    let rendered = TableRenderer::new(8).render(&table);
    let expected = [
        "         | tags",
        "---------+---------",
        "r        | array(2)",
        "    tags:",
        "        [0] => 1",
        "        [1] => array(2)",
        "            [0] => 2",
        "            [1] => 3",
    ]
    .join("\n")
        + "\n";
    assert_eq!(rendered, expected);
    assert_eq!(rendered, TableRenderer::new(8).render(&table));
}

#[test]
fn test_max_index_name_is_stored_without_overflow() {
    let document = MatrixDocument::from_json_str(
        r#"{
            "schema": {"count": 1, "kind": "integer"},
            "rows": [
                {"name": 18446744073709551615, "values": {"x": 1}},
                {"name": "after", "values": {"x": 2}}
            ]
        }"#,
    )
    .unwrap();

    let mut table = document.build_table().unwrap();
    assert!(table.contains_key(&RowKey::Index(usize::MAX)));
    assert_eq!(table.row_count(), 2);

    let err = table.add_row(rustmatrix::row([("x", 3)]), None).unwrap_err();
    assert!(matches!(err, MatrixError::IndexExhausted(_)));
}
