//! Editor settings for the current build target.
//!
//! Browser builds cannot read the process environment, so the WASM bundle
//! captures `CONTENT_*` variables at compile time; native builds read
//! them at runtime.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use content::EditorSettings;

/// Resolve settings for this build.
pub fn editor_settings() -> EditorSettings {
    #[cfg(feature = "csr")]
    {
        EditorSettings::from_lookup(build_time_var)
    }
    #[cfg(not(feature = "csr"))]
    {
        EditorSettings::from_env()
    }
}

#[cfg(any(test, feature = "csr"))]
fn build_time_var(name: &str) -> Option<String> {
    match name {
        "CONTENT_REMOTE_BASE_URL" => option_env!("CONTENT_REMOTE_BASE_URL"),
        "CONTENT_DEFAULT_ULTRA_PRICE" => option_env!("CONTENT_DEFAULT_ULTRA_PRICE"),
        "CONTENT_NOTICE_TIMEOUT_MS" => option_env!("CONTENT_NOTICE_TIMEOUT_MS"),
        _ => None,
    }
    .map(str::to_owned)
}
