//! Whole-page browser actions: navigation for recovery buttons and confirmation prompts.
//!
//! Browser-only; native test builds no-op.

/// Reload the whole application.
pub fn reload_page() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                leptos::logging::warn!("page reload failed: {e:?}");
            }
        }
    }
}

/// Step back one entry in browser history.
pub fn history_back() {
    #[cfg(feature = "csr")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}

/// Ask the user to confirm `message`. Native builds have nobody to ask and
/// answer yes.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_none_or(|w| w.confirm_with_message(message).unwrap_or(true))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}
