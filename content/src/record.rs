//! Persisted chapter content bundle.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON documents already stored by earlier clients
//! (camelCase keys), and unknown keys are carried through untouched so a
//! wholesale overwrite on save never drops data this editor does not know.
//!
//! Older clients wrote loosely typed values (fractional prices, numeric
//! strings, short option lists). Those decode leniently instead of failing
//! the whole document; the weekly test bank is never edited here and is kept
//! as raw JSON.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Stored in place of an answer index that could not be read as an integer.
pub const INVALID_ANSWER: i64 = -1;

/// One entry of a chapter's video playlist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// One multiple-choice question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqItem {
    #[serde(default)]
    pub question: String,
    #[serde(default, deserialize_with = "deserialize_options")]
    pub options: [String; OPTION_COUNT],
    /// Zero-based index into `options`. Legacy documents can hold values
    /// outside `0..OPTION_COUNT`; see [`McqItem::answer_index`].
    #[serde(default = "invalid_answer", deserialize_with = "deserialize_answer")]
    pub correct_answer: i64,
    #[serde(default)]
    pub explanation: String,
}

impl McqItem {
    /// A question with empty text, four empty options, and the first option marked correct.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// The correct option index, or `None` when the stored value does not
    /// address one of the options.
    #[must_use]
    pub fn answer_index(&self) -> Option<usize> {
        usize::try_from(self.correct_answer)
            .ok()
            .filter(|idx| *idx < OPTION_COUNT)
    }
}

/// Everything stored for one chapter, addressed by its content key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultra_pdf_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_video_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_video_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_notes_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_notes_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_opt_integer")]
    pub video_credits_cost: Option<i64>,
    /// Ultra PDF price in credits.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_opt_integer")]
    pub price: Option<i64>,
    #[serde(default)]
    pub video_playlist: Vec<VideoEntry>,
    #[serde(default)]
    pub manual_mcq_data: Vec<McqItem>,
    /// Weekly test questions, preserved as stored.
    #[serde(default)]
    pub weekly_test_mcq_data: Vec<Value>,
    /// Keys written by other tools; preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentRecord {
    /// The record created the first time a chapter with no stored data is opened.
    #[must_use]
    pub fn with_default_price(price: i64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    /// Serialize to the JSON document written to both stores.
    ///
    /// # Errors
    ///
    /// Returns an error if a preserved `extra` value cannot be serialized.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a stored JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a JSON object with the expected field types.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn invalid_answer() -> i64 {
    INVALID_ANSWER
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn float_to_integer(f: f64) -> Option<i64> {
    (f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64).then_some(f as i64)
}

fn integer_from_number(number: &serde_json::Number) -> Option<i64> {
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    number.as_f64().filter(|f| f.fract() == 0.0).and_then(float_to_integer)
}

/// Nearest integer; prices and credit costs typed as `12.5` round to `13`.
fn rounded_integer(number: &serde_json::Number) -> Option<i64> {
    number.as_i64().or_else(|| number.as_f64().map(f64::round).and_then(float_to_integer))
}

/// Answer indices written by older clients may be `null` (a serialized NaN),
/// a numeric string, or a float. Anything unreadable becomes [`INVALID_ANSWER`].
fn deserialize_answer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match value {
        Value::Number(number) => integer_from_number(&number),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(parsed.unwrap_or(INVALID_ANSWER))
}

/// Optional integer that never fails the document: floats round, numeric
/// strings parse, and anything else is dropped with a warning.
fn deserialize_opt_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Null => return Ok(None),
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::Number(number) => rounded_integer(number),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(f64::round).and_then(float_to_integer))
        }
        _ => None,
    };
    if parsed.is_none() {
        log::warn!("dropping unreadable integer value {value}");
    }
    Ok(parsed)
}

/// Exactly [`OPTION_COUNT`] options: short lists are padded with empty
/// strings, non-string entries are stringified, extras are dropped.
fn deserialize_options<'de, D>(deserializer: D) -> Result<[String; OPTION_COUNT], D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let mut options: [String; OPTION_COUNT] = Default::default();
    let Value::Array(items) = value else {
        log::warn!("question options are not a list; using empty options");
        return Ok(options);
    };
    if items.len() > OPTION_COUNT {
        log::warn!("question has {} options; keeping the first {OPTION_COUNT}", items.len());
    }
    for (slot, item) in options.iter_mut().zip(items) {
        *slot = match item {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        };
    }
    Ok(options)
}
