use serde_json::json;

use super::*;

fn sample_item() -> McqItem {
    McqItem {
        question: "Unit of force?".to_owned(),
        options: ["Newton".to_owned(), "Joule".to_owned(), "Watt".to_owned(), "Pascal".to_owned()],
        correct_answer: 0,
        explanation: "F = ma".to_owned(),
    }
}

#[test]
fn default_price_record_only_sets_price() {
    let record = ContentRecord::with_default_price(10);
    assert_eq!(record.price, Some(10));
    assert!(record.video_playlist.is_empty());
    assert!(record.manual_mcq_data.is_empty());
    assert_eq!(record.to_json().unwrap(), r#"{"price":10,"videoPlaylist":[],"manualMcqData":[],"weeklyTestMcqData":[]}"#);
}

#[test]
fn record_uses_camel_case_keys() {
    let record = ContentRecord {
        free_link: Some("https://a".to_owned()),
        ultra_pdf_link: Some("https://u".to_owned()),
        free_notes_html: Some("<p>hi</p>".to_owned()),
        video_credits_cost: Some(5),
        ..ContentRecord::default()
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["freeLink"], "https://a");
    assert_eq!(value["ultraPdfLink"], "https://u");
    assert_eq!(value["freeNotesHtml"], "<p>hi</p>");
    assert_eq!(value["videoCreditsCost"], 5);
    assert!(value.get("premiumLink").is_none());
}

#[test]
fn missing_collections_default_to_empty() {
    let record = ContentRecord::from_json(r#"{"price":25}"#).unwrap();
    assert_eq!(record.price, Some(25));
    assert!(record.video_playlist.is_empty());
    assert!(record.weekly_test_mcq_data.is_empty());
}

#[test]
fn unknown_keys_survive_round_trip() {
    let raw = json!({
        "price": 10,
        "audioLink": "https://audio",
        "nested": { "a": 1 }
    })
    .to_string();
    let record = ContentRecord::from_json(&raw).unwrap();
    assert_eq!(record.extra.get("audioLink"), Some(&json!("https://audio")));
    let back: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
    assert_eq!(back["audioLink"], "https://audio");
    assert_eq!(back["nested"]["a"], 1);
}

#[test]
fn mcq_item_explanation_defaults_to_empty() {
    let item: McqItem = serde_json::from_value(json!({
        "question": "Q",
        "options": ["a", "b", "c", "d"],
        "correctAnswer": 2
    }))
    .unwrap();
    assert_eq!(item.explanation, "");
    assert_eq!(item.answer_index(), Some(2));
}

#[test]
fn null_answer_decodes_as_invalid() {
    let item: McqItem = serde_json::from_value(json!({
        "question": "Q",
        "options": ["a", "b", "c", "d"],
        "correctAnswer": null,
        "explanation": ""
    }))
    .unwrap();
    assert_eq!(item.correct_answer, INVALID_ANSWER);
    assert_eq!(item.answer_index(), None);
}

#[test]
fn numeric_string_and_integral_float_answers_are_accepted() {
    let from_str: McqItem = serde_json::from_value(json!({
        "question": "Q", "options": ["a", "b", "c", "d"], "correctAnswer": " 3 "
    }))
    .unwrap();
    assert_eq!(from_str.answer_index(), Some(3));

    let from_float: McqItem = serde_json::from_value(json!({
        "question": "Q", "options": ["a", "b", "c", "d"], "correctAnswer": 1.0
    }))
    .unwrap();
    assert_eq!(from_float.answer_index(), Some(1));
}

#[test]
fn out_of_range_answer_has_no_index() {
    let mut item = sample_item();
    item.correct_answer = 4;
    assert_eq!(item.answer_index(), None);
    item.correct_answer = -2;
    assert_eq!(item.answer_index(), None);
}

#[test]
fn price_accepts_numeric_strings_and_empty_string() {
    let record = ContentRecord::from_json(r#"{"price":"15"}"#).unwrap();
    assert_eq!(record.price, Some(15));
    let record = ContentRecord::from_json(r#"{"price":""}"#).unwrap();
    assert_eq!(record.price, None);
}

#[test]
fn fractional_prices_round_to_nearest_credit() {
    let record = ContentRecord::from_json(r#"{"price":12.5,"videoCreditsCost":"7.4"}"#).unwrap();
    assert_eq!(record.price, Some(13));
    assert_eq!(record.video_credits_cost, Some(7));
}

#[test]
fn unreadable_prices_are_dropped_without_losing_the_record() {
    let record = ContentRecord::from_json(r#"{"price":true,"videoCreditsCost":"abc","freeLink":"https://keep"}"#).unwrap();
    assert_eq!(record.price, None);
    assert_eq!(record.video_credits_cost, None);
    assert_eq!(record.free_link.as_deref(), Some("https://keep"));
}

#[test]
fn short_option_list_is_padded() {
    let item: McqItem = serde_json::from_value(json!({
        "question": "Q", "options": ["a", 2, null], "correctAnswer": 0
    }))
    .unwrap();
    assert_eq!(item.options, ["a", "2", "", ""].map(str::to_owned));
    assert_eq!(item.answer_index(), Some(0));
}

#[test]
fn extra_options_are_truncated() {
    let item: McqItem = serde_json::from_value(json!({
        "question": "Q", "options": ["a", "b", "c", "d", "e"], "correctAnswer": 4
    }))
    .unwrap();
    assert_eq!(item.options, ["a", "b", "c", "d"].map(str::to_owned));
    assert_eq!(item.answer_index(), None);
}

#[test]
fn missing_answer_decodes_as_invalid() {
    let item: McqItem = serde_json::from_value(json!({ "question": "Q", "options": ["a", "b", "c", "d"] })).unwrap();
    assert_eq!(item.correct_answer, INVALID_ANSWER);
}

#[test]
fn weekly_bank_is_kept_verbatim() {
    let weekly = json!([{ "question": "W", "options": ["x"], "marks": 2 }]);
    let raw = json!({ "weeklyTestMcqData": weekly }).to_string();
    let record = ContentRecord::from_json(&raw).unwrap();
    let back: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
    assert_eq!(back["weeklyTestMcqData"], weekly);
}

#[test]
fn blank_item_has_four_empty_options() {
    let item = McqItem::blank();
    assert_eq!(item.question, "");
    assert!(item.options.iter().all(String::is_empty));
    assert_eq!(item.answer_index(), Some(0));
}

#[test]
fn full_record_round_trips() {
    let record = ContentRecord {
        premium_link: Some("https://p".to_owned()),
        price: Some(30),
        video_playlist: vec![VideoEntry { title: "Intro".to_owned(), url: "https://v".to_owned() }],
        manual_mcq_data: vec![sample_item()],
        weekly_test_mcq_data: vec![serde_json::to_value(sample_item()).unwrap()],
        ..ContentRecord::default()
    };
    let back = ContentRecord::from_json(&record.to_json().unwrap()).unwrap();
    assert_eq!(back, record);
}
