// tests/keywords.rs
//
// Raw input → KeywordQuery → request body, without any network.
//
use crawllab::controller::PageController;
use crawllab::core::{KeywordQuery, Locale, RequestPayload};

fn kws(q: &KeywordQuery) -> Vec<&str> {
    q.iter().collect()
}

#[test]
fn split_on_commas_and_trim() {
    let q = KeywordQuery::parse("  cat ,dog,  bird watching ");
    assert_eq!(kws(&q), vec!["cat", "dog", "bird watching"]);
}

#[test]
fn order_kept_and_nothing_filtered() {
    let q = KeywordQuery::parse("b, a, b,, ");
    assert_eq!(kws(&q), vec!["b", "a", "b", "", ""]);
    assert_eq!(q.len(), 5);
    assert!(!q.is_blank());
}

#[test]
fn empty_input_is_one_empty_keyword() {
    let q = KeywordQuery::parse("");
    assert_eq!(kws(&q), vec![""]);
    assert!(q.is_blank());
    assert!(!q.is_empty());
}

#[test]
fn no_comma_means_single_keyword() {
    let q = KeywordQuery::parse("rust programming");
    assert_eq!(q.as_slice(), &["rust programming".to_string()]);
}

#[test]
fn scenario_a_payload_json() {
    let mut page = PageController::new();
    page.set_input("cat, dog");
    let payload = page.submit(Locale::En).expect("idle page accepts submit");

    assert_eq!(payload, RequestPayload::new(["cat", "dog"].into_iter().collect(), Locale::En));
    assert_eq!(payload.to_json().unwrap(), r#"{"keywords":["cat","dog"],"lang":"en"}"#);
}

#[test]
fn scenario_b_empty_input_is_sent_as_is() {
    let mut page = PageController::new();
    let payload = page.submit(Locale::En).expect("empty input is not guarded");
    assert_eq!(payload.to_json().unwrap(), r#"{"keywords":[""],"lang":"en"}"#);
}

#[test]
fn spanish_lang_on_the_wire() {
    let mut page = PageController::new();
    page.set_input("gato");
    let payload = page.submit(Locale::from_code("es")).unwrap();
    assert_eq!(payload.to_json().unwrap(), r#"{"keywords":["gato"],"lang":"es"}"#);

    let mut page = PageController::new();
    page.set_input("chat");
    let payload = page.submit(Locale::from_code("fr")).unwrap();
    assert_eq!(payload.to_json().unwrap(), r#"{"keywords":["chat"],"lang":"en"}"#);
}
