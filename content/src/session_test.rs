use serde_json::json;

use super::*;

fn item(question: &str, answer: i64) -> McqItem {
    McqItem {
        question: question.to_owned(),
        options: ["a", "b", "c", "d"].map(str::to_owned),
        correct_answer: answer,
        explanation: String::new(),
    }
}

fn loaded_record() -> ContentRecord {
    let mut record = ContentRecord::with_default_price(10);
    record.free_link = Some("https://free".to_owned());
    record.video_playlist = vec![VideoEntry { title: "V1".to_owned(), url: "https://v/1".to_owned() }];
    record.manual_mcq_data = vec![item("Q1", 0), item("Q2", 3)];
    record.weekly_test_mcq_data = vec![json!({ "question": "W1", "options": ["a", "b"] })];
    record.extra.insert("audioLink".to_owned(), json!("https://a"));
    record
}

// =============================================================
// Record split / merge
// =============================================================

#[test]
fn from_record_splits_derived_state() {
    let session = EditorSession::from_record(loaded_record());
    assert_eq!(session.playlist().len(), 1);
    assert_eq!(session.mcqs().len(), 2);
    assert_eq!(session.link(LinkField::FreePdf), "https://free");
    assert_eq!(session.price(), Some(10));
    assert!(!session.dirty());
}

#[test]
fn to_record_reassembles_what_was_loaded() {
    let record = loaded_record();
    let session = EditorSession::from_record(record.clone());
    assert_eq!(session.to_record(), record);
}

#[test]
fn default_record_gives_empty_derived_arrays() {
    let session = EditorSession::from_record(ContentRecord::with_default_price(10));
    assert!(session.playlist().is_empty());
    assert!(session.mcqs().is_empty());
    assert_eq!(session.price(), Some(10));
}

#[test]
fn to_record_carries_session_playlist_and_mcqs() {
    let mut session = EditorSession::from_record(loaded_record());
    session.add_mcq();
    session.remove_video(0).unwrap();
    let record = session.to_record();
    assert_eq!(record.manual_mcq_data.len(), 3);
    assert!(record.video_playlist.is_empty());
    assert_eq!(record.weekly_test_mcq_data, vec![json!({ "question": "W1", "options": ["a", "b"] })]);
    assert_eq!(record.extra.get("audioLink"), Some(&json!("https://a")));
}

// =============================================================
// Config fields
// =============================================================

#[test]
fn set_link_and_clear_with_empty_value() {
    let mut session = EditorSession::default();
    session.set_link(LinkField::UltraPdf, "https://ultra".to_owned());
    assert_eq!(session.link(LinkField::UltraPdf), "https://ultra");
    assert!(session.dirty());

    session.set_link(LinkField::UltraPdf, "  ".to_owned());
    assert_eq!(session.link(LinkField::UltraPdf), "");
    assert_eq!(session.to_record().ultra_pdf_link, None);
}

#[test]
fn video_links_are_separate_from_pdf_links() {
    let mut session = EditorSession::default();
    session.set_link(LinkField::FreeVideo, "https://fv".to_owned());
    session.set_link(LinkField::PremiumVideo, "https://pv".to_owned());
    let record = session.to_record();
    assert_eq!(record.free_video_link.as_deref(), Some("https://fv"));
    assert_eq!(record.premium_video_link.as_deref(), Some("https://pv"));
    assert_eq!(record.free_link, None);
}

#[test]
fn notes_are_stored_verbatim() {
    let mut session = EditorSession::default();
    session.set_notes(NotesTier::Premium, "<h1>Deep</h1><p>dive</p>".to_owned());
    assert_eq!(session.notes(NotesTier::Premium), "<h1>Deep</h1><p>dive</p>");
    assert_eq!(session.notes(NotesTier::Free), "");
}

#[test]
fn price_and_credit_cost_can_be_cleared() {
    let mut session = EditorSession::from_record(ContentRecord::with_default_price(10));
    session.set_price(Some(35));
    session.set_video_credits_cost(Some(4));
    assert_eq!(session.to_record().price, Some(35));
    assert_eq!(session.to_record().video_credits_cost, Some(4));
    session.set_price(None);
    assert_eq!(session.to_record().price, None);
}

// =============================================================
// Playlist
// =============================================================

#[test]
fn add_video_from_draft_requires_title_and_url() {
    let mut session = EditorSession::default();
    session.set_video_draft_title("Lecture 1".to_owned());
    assert!(!session.add_video_from_draft());
    assert!(session.playlist().is_empty());

    session.set_video_draft_url(" https://v/lecture-1 ".to_owned());
    assert!(session.add_video_from_draft());
    assert_eq!(
        session.playlist(),
        &[VideoEntry { title: "Lecture 1".to_owned(), url: "https://v/lecture-1".to_owned() }]
    );
    assert_eq!(session.video_draft(), &VideoEntry::default());
}

#[test]
fn remove_video_out_of_range_is_rejected() {
    let mut session = EditorSession::from_record(loaded_record());
    assert_eq!(session.remove_video(5), Err(EditError::VideoOutOfRange { index: 5, len: 1 }));
    assert_eq!(session.playlist().len(), 1);
}

// =============================================================
// MCQ editing
// =============================================================

#[test]
fn add_mcq_appends_one_blank_question() {
    let mut session = EditorSession::from_record(loaded_record());
    let idx = session.add_mcq();
    assert_eq!(idx, 2);
    assert_eq!(session.mcqs().len(), 3);
    let added = session.mcq(2).unwrap();
    assert_eq!(added.options.len(), 4);
    assert!(added.options.iter().all(String::is_empty));
    assert_eq!(added.correct_answer, 0);
}

#[test]
fn delete_mcq_removes_by_index() {
    let mut session = EditorSession::from_record(loaded_record());
    let removed = session.delete_mcq(0).unwrap();
    assert_eq!(removed.question, "Q1");
    assert_eq!(session.mcqs().len(), 1);
    assert_eq!(session.mcq(0).unwrap().question, "Q2");
}

#[test]
fn delete_mcq_out_of_range_is_rejected() {
    let mut session = EditorSession::from_record(loaded_record());
    assert_eq!(session.delete_mcq(2), Err(EditError::QuestionOutOfRange { index: 2, len: 2 }));
    assert_eq!(session.mcqs().len(), 2);
    assert!(!session.dirty());
}

#[test]
fn update_mcq_changes_single_field() {
    let mut session = EditorSession::from_record(loaded_record());
    session.update_mcq(1, McqEdit::Question("Renamed".to_owned())).unwrap();
    session.update_mcq(1, McqEdit::CorrectAnswer(2)).unwrap();
    session.update_mcq(1, McqEdit::Explanation("because".to_owned())).unwrap();
    let q = session.mcq(1).unwrap();
    assert_eq!(q.question, "Renamed");
    assert_eq!(q.correct_answer, 2);
    assert_eq!(q.explanation, "because");
    assert_eq!(session.mcq(0).unwrap(), &item("Q1", 0));
}

#[test]
fn update_mcq_rejects_bad_answer_and_index() {
    let mut session = EditorSession::from_record(loaded_record());
    assert_eq!(
        session.update_mcq(0, McqEdit::CorrectAnswer(4)),
        Err(EditError::AnswerOutOfRange { index: 4 })
    );
    assert_eq!(
        session.update_mcq(9, McqEdit::Question("x".to_owned())),
        Err(EditError::QuestionOutOfRange { index: 9, len: 2 })
    );
    assert_eq!(session.to_record(), loaded_record());
}

#[test]
fn update_mcq_option_changes_only_that_option() {
    let mut session = EditorSession::from_record(loaded_record());
    let before = session.mcqs().to_vec();
    session.update_mcq_option(1, 2, "X".to_owned()).unwrap();

    let after = session.mcqs();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1].options, ["a", "b", "X", "d"].map(str::to_owned));
    assert_eq!(after[1].question, before[1].question);
    assert_eq!(after[1].correct_answer, before[1].correct_answer);
}

#[test]
fn update_mcq_option_rejects_out_of_range() {
    let mut session = EditorSession::from_record(loaded_record());
    assert_eq!(
        session.update_mcq_option(0, 4, "X".to_owned()),
        Err(EditError::OptionOutOfRange { index: 4 })
    );
    assert_eq!(
        session.update_mcq_option(3, 0, "X".to_owned()),
        Err(EditError::QuestionOutOfRange { index: 3, len: 2 })
    );
}

// =============================================================
// Import
// =============================================================

#[test]
fn import_appends_rows_and_clears_draft() {
    let mut session = EditorSession::from_record(loaded_record());
    session.set_import_text("N1\tA\tB\tC\tD\t2\texp\nshort\trow".to_owned());
    let report = session.import_draft().unwrap();
    assert_eq!(report.imported(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(session.mcqs().len(), 3);
    assert_eq!(session.mcq(2).unwrap().correct_answer, 1);
    assert_eq!(session.import_text(), "");
    assert!(session.dirty());
}

#[test]
fn import_without_tabs_leaves_bank_and_draft_untouched() {
    let mut session = EditorSession::from_record(loaded_record());
    session.set_import_text("Q1 A B C D 2".to_owned());
    assert_eq!(session.import_draft(), Err(ImportError::NoTabs));
    assert_eq!(session.mcqs().len(), 2);
    assert_eq!(session.import_text(), "Q1 A B C D 2");
}

#[test]
fn import_with_only_bad_rows_keeps_draft() {
    let mut session = EditorSession::default();
    session.set_import_text("a\tb".to_owned());
    let report = session.import_draft().unwrap();
    assert_eq!(report.imported(), 0);
    assert_eq!(session.import_text(), "a\tb");
    assert!(!session.dirty());
}

#[test]
fn mark_saved_clears_dirty() {
    let mut session = EditorSession::default();
    session.add_mcq();
    assert!(session.dirty());
    session.mark_saved();
    assert!(!session.dirty());
}
