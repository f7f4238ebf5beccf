//! Catalog loading from disk

use std::io::Write;
use storefront_core::StorefrontError;
use storefront_recs::{hybrid_recommendation, Catalog};

#[test]
fn test_load_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "products": [
                {{"id": "a", "price": 1.0}},
                {{"id": "b", "price": 2.0}}
            ],
            "purchase_history": {{"u1": ["a", "b"], "u2": ["a"]}}
        }}"#
    )
    .unwrap();

    let catalog = Catalog::from_json_file(file.path()).unwrap();
    assert_eq!(catalog.products().len(), 2);

    let recs = hybrid_recommendation("u2", Some("a"), &catalog, 5);
    assert_eq!(recs[0].product_id, "b");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Catalog::from_json_file("/nonexistent/catalog.json").unwrap_err();
    assert!(matches!(err, StorefrontError::IoError(_)));
}

#[test]
fn test_duplicate_ids_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"products": [{{"id": "a"}}, {{"id": "a"}}]}}"#).unwrap();

    let err = Catalog::from_json_file(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate product id: a");
}
