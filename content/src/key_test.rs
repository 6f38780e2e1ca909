use super::*;

fn chapter(class_level: &str, stream: Option<&str>) -> ChapterRef {
    ChapterRef {
        board: "CBSE".to_owned(),
        class_level: class_level.to_owned(),
        stream: stream.map(str::to_owned),
        subject_name: "Physics".to_owned(),
        chapter_id: "ch1".to_owned(),
        chapter_title: "Motion".to_owned(),
    }
}

#[test]
fn derive_key_appends_stream_for_class_eleven() {
    let key = derive_key("CBSE", "11", Some("pcm"), "Physics", "ch1");
    assert_eq!(key, "nst_content_CBSE_11-pcm_Physics_ch1");
}

#[test]
fn derive_key_appends_stream_for_class_twelve() {
    let key = derive_key("CBSE", "12", Some("commerce"), "Accounts", "ch4");
    assert_eq!(key, "nst_content_CBSE_12-commerce_Accounts_ch4");
}

#[test]
fn derive_key_ignores_stream_below_class_eleven() {
    assert_eq!(derive_key("CBSE", "10", Some("pcm"), "Physics", "ch1"), "nst_content_CBSE_10_Physics_ch1");
    assert_eq!(derive_key("CBSE", "10", None, "Physics", "ch1"), "nst_content_CBSE_10_Physics_ch1");
}

#[test]
fn derive_key_without_stream_has_no_suffix() {
    assert_eq!(derive_key("CBSE", "11", None, "Physics", "ch1"), "nst_content_CBSE_11_Physics_ch1");
    assert_eq!(derive_key("CBSE", "11", Some(""), "Physics", "ch1"), "nst_content_CBSE_11_Physics_ch1");
}

#[test]
fn derive_key_is_stable() {
    let a = derive_key("ICSE", "12", Some("pcb"), "Biology", "cell");
    let b = derive_key("ICSE", "12", Some("pcb"), "Biology", "cell");
    assert_eq!(a, b);
}

#[test]
fn chapter_ref_key_matches_derive_key() {
    let c = chapter("11", Some("pcm"));
    assert_eq!(c.content_key(), derive_key("CBSE", "11", Some("pcm"), "Physics", "ch1"));
}

#[test]
fn chapter_title_does_not_affect_key() {
    let a = chapter("9", None);
    let mut b = a.clone();
    b.chapter_title = "Renamed".to_owned();
    assert_eq!(a.content_key(), b.content_key());
}

#[test]
fn subtitle_shows_subject_and_class() {
    assert_eq!(chapter("11", Some("pcm")).subtitle(), "Physics • Class 11");
}
