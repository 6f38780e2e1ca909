//! In-memory editing state for one open content editor.
//!
//! DESIGN
//! ======
//! A loaded record is split into three editable parts: the scalar config
//! (links, notes, prices, untouched banks, unknown keys), the video playlist,
//! and the manual MCQ bank. `to_record` puts them back together for saving.
//! Transient inputs (new video title/url, pasted import text) are owned here
//! too, so the UI never has to read them back out of the DOM.
//!
//! Every index-addressed edit validates its indices and leaves the session
//! untouched on error.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::import::{ImportError, ImportReport, parse_tsv};
use crate::record::{ContentRecord, McqItem, OPTION_COUNT, VideoEntry};

/// Link fields editable on the PDF and VIDEO tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkField {
    FreePdf,
    PremiumPdf,
    UltraPdf,
    FreeVideo,
    PremiumVideo,
}

/// Which notes document is being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotesTier {
    Free,
    Premium,
}

/// A single-field change to one question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum McqEdit {
    Question(String),
    CorrectAnswer(usize),
    Explanation(String),
}

/// Rejected edit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("question {index} does not exist ({len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },
    #[error("option {index} does not exist (questions have {OPTION_COUNT} options)")]
    OptionOutOfRange { index: usize },
    #[error("answer {index} does not address an option")]
    AnswerOutOfRange { index: usize },
    #[error("video {index} does not exist ({len} videos)")]
    VideoOutOfRange { index: usize, len: usize },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorSession {
    config: ContentRecord,
    playlist: Vec<VideoEntry>,
    mcqs: Vec<McqItem>,
    video_draft: VideoEntry,
    import_text: String,
    dirty: bool,
}

impl EditorSession {
    /// Split a loaded record into editable state.
    #[must_use]
    pub fn from_record(mut record: ContentRecord) -> Self {
        let playlist = std::mem::take(&mut record.video_playlist);
        let mcqs = std::mem::take(&mut record.manual_mcq_data);
        Self {
            config: record,
            playlist,
            mcqs,
            ..Self::default()
        }
    }

    /// Reassemble the record to persist.
    #[must_use]
    pub fn to_record(&self) -> ContentRecord {
        ContentRecord {
            video_playlist: self.playlist.clone(),
            manual_mcq_data: self.mcqs.clone(),
            ..self.config.clone()
        }
    }

    /// Whether anything changed since load or the last [`Self::mark_saved`].
    #[must_use]
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    // ---- config -------------------------------------------------------

    #[must_use]
    pub fn link(&self, field: LinkField) -> &str {
        match field {
            LinkField::FreePdf => self.config.free_link.as_deref(),
            LinkField::PremiumPdf => self.config.premium_link.as_deref(),
            LinkField::UltraPdf => self.config.ultra_pdf_link.as_deref(),
            LinkField::FreeVideo => self.config.free_video_link.as_deref(),
            LinkField::PremiumVideo => self.config.premium_video_link.as_deref(),
        }
        .unwrap_or_default()
    }

    /// Set a link; an empty value clears the field.
    pub fn set_link(&mut self, field: LinkField, value: String) {
        *self.link_slot_mut(field) = non_empty(value);
        self.dirty = true;
    }

    #[must_use]
    pub fn notes(&self, tier: NotesTier) -> &str {
        match tier {
            NotesTier::Free => self.config.free_notes_html.as_deref(),
            NotesTier::Premium => self.config.premium_notes_html.as_deref(),
        }
        .unwrap_or_default()
    }

    pub fn set_notes(&mut self, tier: NotesTier, html: String) {
        let slot = match tier {
            NotesTier::Free => &mut self.config.free_notes_html,
            NotesTier::Premium => &mut self.config.premium_notes_html,
        };
        *slot = non_empty(html);
        self.dirty = true;
    }

    #[must_use]
    pub fn price(&self) -> Option<i64> {
        self.config.price
    }

    pub fn set_price(&mut self, price: Option<i64>) {
        self.config.price = price;
        self.dirty = true;
    }

    #[must_use]
    pub fn video_credits_cost(&self) -> Option<i64> {
        self.config.video_credits_cost
    }

    pub fn set_video_credits_cost(&mut self, cost: Option<i64>) {
        self.config.video_credits_cost = cost;
        self.dirty = true;
    }

    fn link_slot_mut(&mut self, field: LinkField) -> &mut Option<String> {
        match field {
            LinkField::FreePdf => &mut self.config.free_link,
            LinkField::PremiumPdf => &mut self.config.premium_link,
            LinkField::UltraPdf => &mut self.config.ultra_pdf_link,
            LinkField::FreeVideo => &mut self.config.free_video_link,
            LinkField::PremiumVideo => &mut self.config.premium_video_link,
        }
    }

    // ---- playlist -----------------------------------------------------

    #[must_use]
    pub fn playlist(&self) -> &[VideoEntry] {
        &self.playlist
    }

    #[must_use]
    pub fn video_draft(&self) -> &VideoEntry {
        &self.video_draft
    }

    pub fn set_video_draft_title(&mut self, title: String) {
        self.video_draft.title = title;
    }

    pub fn set_video_draft_url(&mut self, url: String) {
        self.video_draft.url = url;
    }

    /// Append the drafted video when both title and url are filled in.
    /// Clears the draft and returns `true` on success.
    pub fn add_video_from_draft(&mut self) -> bool {
        let title = self.video_draft.title.trim();
        let url = self.video_draft.url.trim();
        if title.is_empty() || url.is_empty() {
            return false;
        }
        self.playlist.push(VideoEntry {
            title: title.to_owned(),
            url: url.to_owned(),
        });
        self.video_draft = VideoEntry::default();
        self.dirty = true;
        true
    }

    /// # Errors
    ///
    /// Returns [`EditError::VideoOutOfRange`] when `index` is past the end.
    pub fn remove_video(&mut self, index: usize) -> Result<VideoEntry, EditError> {
        if index >= self.playlist.len() {
            return Err(EditError::VideoOutOfRange {
                index,
                len: self.playlist.len(),
            });
        }
        self.dirty = true;
        Ok(self.playlist.remove(index))
    }

    // ---- MCQ bank -----------------------------------------------------

    #[must_use]
    pub fn mcqs(&self) -> &[McqItem] {
        &self.mcqs
    }

    #[must_use]
    pub fn mcq(&self, index: usize) -> Option<&McqItem> {
        self.mcqs.get(index)
    }

    /// Append a blank question; returns its index.
    pub fn add_mcq(&mut self) -> usize {
        self.mcqs.push(McqItem::blank());
        self.dirty = true;
        self.mcqs.len() - 1
    }

    /// # Errors
    ///
    /// Returns [`EditError::QuestionOutOfRange`] when `index` is past the end.
    pub fn delete_mcq(&mut self, index: usize) -> Result<McqItem, EditError> {
        self.check_question(index)?;
        self.dirty = true;
        Ok(self.mcqs.remove(index))
    }

    /// Apply a single-field edit to question `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::QuestionOutOfRange`] for a bad question index and
    /// [`EditError::AnswerOutOfRange`] for an answer that is not an option index.
    pub fn update_mcq(&mut self, index: usize, edit: McqEdit) -> Result<(), EditError> {
        self.check_question(index)?;
        let item = &mut self.mcqs[index];
        match edit {
            McqEdit::Question(text) => item.question = text,
            McqEdit::CorrectAnswer(answer) => {
                item.correct_answer = i64::try_from(answer)
                    .ok()
                    .filter(|_| answer < OPTION_COUNT)
                    .ok_or(EditError::AnswerOutOfRange { index: answer })?;
            }
            McqEdit::Explanation(text) => item.explanation = text,
        }
        self.dirty = true;
        Ok(())
    }

    /// Replace option `option` of question `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::QuestionOutOfRange`] or [`EditError::OptionOutOfRange`].
    pub fn update_mcq_option(&mut self, index: usize, option: usize, value: String) -> Result<(), EditError> {
        self.check_question(index)?;
        let slot = self.mcqs[index]
            .options
            .get_mut(option)
            .ok_or(EditError::OptionOutOfRange { index: option })?;
        *slot = value;
        self.dirty = true;
        Ok(())
    }

    fn check_question(&self, index: usize) -> Result<(), EditError> {
        if index < self.mcqs.len() {
            Ok(())
        } else {
            Err(EditError::QuestionOutOfRange {
                index,
                len: self.mcqs.len(),
            })
        }
    }

    // ---- import -------------------------------------------------------

    #[must_use]
    pub fn import_text(&self) -> &str {
        &self.import_text
    }

    pub fn set_import_text(&mut self, text: String) {
        self.import_text = text;
    }

    /// Parse the import draft and append every accepted row.
    ///
    /// The draft is cleared only when at least one question was imported, so
    /// the user can fix a paste that produced nothing.
    ///
    /// # Errors
    ///
    /// Propagates [`ImportError`] for blank or tab-less pastes; the bank is unchanged.
    pub fn import_draft(&mut self) -> Result<ImportReport, ImportError> {
        let report = parse_tsv(&self.import_text)?;
        if report.imported() > 0 {
            self.mcqs.extend(report.items.iter().cloned());
            self.import_text.clear();
            self.dirty = true;
        }
        Ok(report)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}
