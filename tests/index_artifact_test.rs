use std::sync::Arc;

use tempfile::TempDir;

use sedum::{IndexBuilder, InvertedIndex, Result, SearchEngine, SedumError};

fn build_index() -> Result<InvertedIndex> {
    let mut builder = IndexBuilder::with_standard_analyzer();
    builder.add_document("Sunflower", "yellow petals, two colours in one plant");
    builder.add_document("Poppy", "red petals and a green stem");
    builder.build()
}

#[test]
fn test_artifact_round_trip_preserves_search_behavior() -> Result<()> {
    let index = build_index()?;
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("index.json");
    index.to_file(&path)?;

    let loaded = InvertedIndex::from_file(&path)?;
    assert_eq!(loaded.doc_count(), index.doc_count());
    assert_eq!(loaded.term_count(), index.term_count());

    let original = SearchEngine::with_defaults(Arc::new(index));
    let reloaded = SearchEngine::with_defaults(Arc::new(loaded));
    for raw in ["yellow", "+petals -red", "\"two colours\""] {
        let a = original.search(raw)?;
        let b = reloaded.search(raw)?;
        assert_eq!(a, b, "artifact round trip changed results for {raw:?}");
    }
    Ok(())
}

#[test]
fn test_missing_artifact_is_io_error() {
    let err = InvertedIndex::from_file("/nonexistent/index.json").unwrap_err();
    assert!(matches!(err, SedumError::Io(_)));
}

#[test]
fn test_malformed_artifact_is_json_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("index.json");
    std::fs::write(&path, "{ not valid json").unwrap();
    let err = InvertedIndex::from_file(&path).unwrap_err();
    assert!(matches!(err, SedumError::Json(_)));
}

#[test]
fn test_inconsistent_artifact_is_index_error() {
    // A posting that points at a document the artifact does not contain.
    let artifact = r#"{
        "docs": [
            {"id": 0, "title": "Only", "content": "yellow", "token_count": 1}
        ],
        "postings": {
            "yellow": [{"doc": 9, "tf": 1, "positions": [0]}]
        }
    }"#;
    let err = InvertedIndex::from_json(artifact).unwrap_err();
    assert!(matches!(err, SedumError::Index(_)));
}

#[test]
fn test_artifact_format_is_stable() -> Result<()> {
    // An artifact written by hand in the documented shape loads and
    // searches.
    let artifact = r#"{
        "docs": [
            {"id": 0, "title": "First", "content": "two colours", "token_count": 2},
            {"id": 1, "title": "Second", "content": "one colour", "token_count": 2}
        ],
        "postings": {
            "two": [{"doc": 0, "tf": 1, "positions": [0]}],
            "colours": [{"doc": 0, "tf": 1, "positions": [1]}],
            "one": [{"doc": 1, "tf": 1, "positions": [0]}],
            "colour": [{"doc": 1, "tf": 1, "positions": [1]}]
        }
    }"#;
    let engine = SearchEngine::with_defaults(Arc::new(InvertedIndex::from_json(artifact)?));
    let report = engine.search("\"two colours\"")?;
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].title, "First");
    Ok(())
}
