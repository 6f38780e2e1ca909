#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn get_misses_outside_browser() {
    assert_eq!(BrowserLocalStore.get("nst_content_CBSE_10_Physics_ch1"), None);
}

#[test]
fn set_reports_unavailable_outside_browser() {
    let err = BrowserLocalStore.set("k", "{}").unwrap_err();
    assert!(matches!(err, StoreError::Unavailable));
}
