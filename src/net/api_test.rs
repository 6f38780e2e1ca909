use futures::executor::block_on;

use super::*;

#[test]
fn content_endpoint_joins_base_and_key() {
    assert_eq!(
        content_endpoint("/api/content", "nst_content_CBSE_10_Physics_ch1"),
        "/api/content/nst_content_CBSE_10_Physics_ch1"
    );
}

#[test]
fn null_and_empty_bodies_mean_absent() {
    assert!(is_absent_body("null"));
    assert!(is_absent_body("  \n"));
    assert!(!is_absent_body(r#"{"price":10}"#));
}

#[test]
fn not_found_status_is_absent_record() {
    assert!(matches!(status_error(404), Ok(None)));
    assert!(matches!(status_error(503), Err(StoreError::Status(503))));
}

#[test]
fn store_uses_configured_base_url() {
    let settings = EditorSettings {
        remote_base_url: "https://docs.example.test/content".to_owned(),
        ..EditorSettings::default()
    };
    assert_eq!(HttpContentStore::new(&settings).base_url(), "https://docs.example.test/content");
}

#[cfg(not(feature = "csr"))]
#[test]
fn store_is_unavailable_outside_browser() {
    let store = HttpContentStore::new(&EditorSettings::default());
    assert!(matches!(block_on(store.get("k")), Err(StoreError::Unavailable)));
    assert!(matches!(block_on(store.put("k", "{}")), Err(StoreError::Unavailable)));
}
