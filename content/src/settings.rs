//! Editor settings resolved from named variables.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

pub const DEFAULT_REMOTE_BASE_URL: &str = "/api/content";
pub const DEFAULT_ULTRA_PRICE: i64 = 10;
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    /// Base URL of the remote document store; records live at `{base}/{key}`.
    pub remote_base_url: String,
    /// Price given to a record created for a chapter with no stored data.
    pub default_ultra_price: i64,
    /// How long save/import notices stay on screen.
    pub notice_timeout_ms: u32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            remote_base_url: DEFAULT_REMOTE_BASE_URL.to_owned(),
            default_ultra_price: DEFAULT_ULTRA_PRICE,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl EditorSettings {
    /// Build settings from a variable lookup.
    ///
    /// Optional:
    /// - `CONTENT_REMOTE_BASE_URL`: default `/api/content`
    /// - `CONTENT_DEFAULT_ULTRA_PRICE`: default 10
    /// - `CONTENT_NOTICE_TIMEOUT_MS`: default 3000
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let remote_base_url = lookup("CONTENT_REMOTE_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REMOTE_BASE_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        Self {
            remote_base_url,
            default_ultra_price: parse_or(&lookup, "CONTENT_DEFAULT_ULTRA_PRICE", DEFAULT_ULTRA_PRICE),
            notice_timeout_ms: parse_or(&lookup, "CONTENT_NOTICE_TIMEOUT_MS", DEFAULT_NOTICE_TIMEOUT_MS),
        }
    }

    /// Build settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
