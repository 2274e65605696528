// tests/payload.rs
//
// How response bodies of different shapes map to link groups.
//
use crawllab::core::{LinkGroup, ResultPayload};
use serde_json::json;

fn group(label: &str, links: &[&str]) -> LinkGroup {
    LinkGroup { label: label.into(), links: links.iter().map(|s| s.to_string()).collect() }
}

#[test]
fn object_keyed_by_keyword() {
    let r = ResultPayload::from_value(json!({
        "cat": ["https://a.io/cat", "https://b.io/cat"],
        "dog": []
    }));
    assert_eq!(r.groups(), &[
        group("cat", &["https://a.io/cat", "https://b.io/cat"]),
        group("dog", &[]),
    ]);
    assert_eq!(r.link_count(), 2);
}

#[test]
fn array_of_keyword_records() {
    let r = ResultPayload::from_value(json!([
        { "keyword": "cat", "links": [{ "url": "https://a.io" }, "https://b.io"] },
        { "keyword": "dog", "results": [] },
        { "keyword": "owl" }
    ]));
    assert_eq!(r.groups(), &[
        group("cat", &["https://a.io", "https://b.io"]),
        group("dog", &[]),
        group("owl", &[]),
    ]);
}

#[test]
fn flat_array_of_links_and_records() {
    let r = ResultPayload::from_value(json!([
        "https://a.io",
        { "title": "B", "href": "https://b.io" },
        { "link": "https://c.io", "url": "https://ignored.io" },
        42,
        null
    ]));
    assert_eq!(r.groups(), &[group("", &["https://a.io", "https://b.io", "https://c.io"])]);
    let all: Vec<&str> = r.links().collect();
    assert_eq!(all, vec!["https://a.io", "https://b.io", "https://c.io"]);
}

#[test]
fn single_record_is_one_group() {
    let r = ResultPayload::from_value(json!({ "url": "https://a.io", "title": "A" }));
    assert_eq!(r.groups(), &[group("", &["https://a.io"])]);
}

#[test]
fn null_and_scalars() {
    assert!(ResultPayload::from_value(json!(null)).groups().is_empty());
    assert_eq!(ResultPayload::from_value(json!(7)).groups(), &[group("", &[])]);
    assert_eq!(ResultPayload::from_value(json!("https://a.io")).groups(), &[group("", &["https://a.io"])]);
}

#[test]
fn raw_body_is_kept() {
    let body = br#"{"cat":["https://a.io"],"meta":{"took_ms":12}}"#;
    let r = ResultPayload::from_slice(body).unwrap();
    assert_eq!(r.raw()["meta"]["took_ms"], json!(12));
}

#[test]
fn malformed_body_is_an_error() {
    assert!(ResultPayload::from_slice(b"<html>502</html>").is_err());
    assert!(ResultPayload::from_slice(b"").is_err());
}
