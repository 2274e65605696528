// tests/cli_output.rs
//
// Plain-text rendering used by the `cli` binary.
//
#![cfg(feature = "cli")]

use clap::Parser;
use crawllab::cli::{Args, write_result};
use crawllab::config::consts::API_URL;
use crawllab::core::{Locale, ResultPayload};
use crawllab::i18n::strings;
use serde_json::json;

fn render(result: &ResultPayload, locale: Locale, full: bool) -> String {
    let mut out = Vec::new();
    write_result(&mut out, result, strings(locale), full).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn groups_and_no_links_lines() {
    let long = format!("https://example.com/{}", "a".repeat(60));
    let result = ResultPayload::from_value(json!({ "cat": [long.clone()], "dog": [] }));

    let short = render(&result, Locale::En, false);
    let expected_cut = format!("{}...", &long[..50]);
    assert_eq!(short, format!("# cat\n{expected_cut}\n# dog\nNo links found.\n"));

    let full = render(&result, Locale::Es, true);
    assert_eq!(full, format!("# cat\n{long}\n# dog\nNo se encontraron enlaces.\n"));
}

#[test]
fn empty_result_prints_no_links() {
    let result = ResultPayload::from_value(json!(null));
    assert_eq!(render(&result, Locale::En, false), "No links found.\n");
}

#[test]
fn args_map_onto_options() {
    let args = Args::parse_from(["cli", "cat, dog", "--lang", "es"]);
    let options = args.options();
    assert_eq!(options.locale, Locale::Es);
    assert_eq!(options.endpoint, API_URL);

    let args = Args::parse_from(["cli", "", "-l", "de", "--endpoint", "http://127.0.0.1:9/parse"]);
    let options = args.options();
    assert_eq!(args.keywords, "");
    assert_eq!(options.locale, Locale::En);
    assert_eq!(options.endpoint, "http://127.0.0.1:9/parse");
}
