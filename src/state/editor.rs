//! Editor chrome state: tabs, loading/saving flags, transient notices.
//!
//! DESIGN
//! ======
//! Notices carry a sequence number so a dismissal timer started for an older
//! notice never hides a newer one.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use content::{ImportError, ImportReport, LoadSource, SaveOutcome};

/// Tabs of the content editor, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorTab {
    #[default]
    Pdf,
    Video,
    Notes,
    Mcq,
}

impl EditorTab {
    pub const ALL: [Self; 4] = [Self::Pdf, Self::Video, Self::Notes, Self::Mcq];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Video => "VIDEO",
            Self::Notes => "NOTES",
            Self::Mcq => "MCQ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    /// BEM modifier for the notice banner.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "editor-notice--success",
            Self::Warning => "editor-notice--warning",
            Self::Error => "editor-notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn from_save(outcome: &SaveOutcome) -> Self {
        let kind = match outcome {
            SaveOutcome::Saved => NoticeKind::Success,
            SaveOutcome::SaveFailed { stored_locally: true, .. } => NoticeKind::Warning,
            SaveOutcome::SaveFailed { stored_locally: false, .. } => NoticeKind::Error,
        };
        Self {
            kind,
            text: outcome.message(),
        }
    }

    /// Notice for an import attempt; a blank paste produces none.
    pub fn from_import(result: &Result<ImportReport, ImportError>) -> Option<Self> {
        match result {
            Err(ImportError::Empty) => None,
            Err(e @ ImportError::NoTabs) => Some(Self {
                kind: NoticeKind::Error,
                text: e.to_string(),
            }),
            Ok(report) if report.imported() == 0 => {
                let skipped = report.skipped.len();
                let rows = if skipped == 1 { "row" } else { "rows" };
                Some(Self {
                    kind: NoticeKind::Error,
                    text: format!("No questions imported ({skipped} {rows} skipped)"),
                })
            }
            Ok(report) => Some(Self {
                kind: if report.skipped.is_empty() { NoticeKind::Success } else { NoticeKind::Warning },
                text: report.summary(),
            }),
        }
    }
}

/// Presentation state for one open editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub tab: EditorTab,
    pub loading: bool,
    pub saving: bool,
    pub load_source: Option<LoadSource>,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            tab: EditorTab::Pdf,
            loading: true,
            saving: false,
            load_source: None,
            notice: None,
            notice_seq: 0,
        }
    }
}

impl EditorState {
    /// Show `notice`, replacing any current one. Returns its sequence number.
    pub fn push_notice(&mut self, notice: Notice) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(notice);
        self.notice_seq
    }

    /// Hide the notice only if it is still the one numbered `seq`.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }

    pub fn finish_loading(&mut self, source: LoadSource) {
        self.loading = false;
        self.load_source = Some(source);
    }

    /// Hint shown under the heading about where the record came from.
    pub fn source_hint(&self) -> Option<&'static str> {
        match self.load_source? {
            LoadSource::Remote => None,
            LoadSource::Local => Some("Loaded from this device; the remote copy was unavailable."),
            LoadSource::Default => Some("No saved content yet for this chapter."),
            LoadSource::Unreadable => {
                Some("Saved content for this chapter could not be read. Saving is disabled so it is not overwritten.")
            }
        }
    }

    /// Save is offered once loading finished, no save is in flight, and the
    /// loaded record may be written back.
    pub fn can_save(&self) -> bool {
        !self.loading && !self.saving && self.load_source.is_some_and(LoadSource::allows_save)
    }
}

/// Prompt shown before closing an editor with unsaved changes.
pub const DISCARD_PROMPT: &str = "Discard unsaved changes to this chapter?";

/// Whether a close request should go ahead. Clean sessions close at once;
/// dirty ones ask `confirm` first.
pub fn should_close<F>(dirty: bool, confirm: F) -> bool
where
    F: FnOnce(&str) -> bool,
{
    !dirty || confirm(DISCARD_PROMPT)
}

/// Parse a credits input; blank or unparsable input clears the value.
pub fn parse_credits(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Heading for the editor modal.
pub fn editor_title(chapter_title: &str) -> String {
    format!("Edit Content: {chapter_title}")
}
