//! Reading a feed document and rebuilding its localization table

use pretty_assertions::assert_eq;
use sheet_localizator_core::{build_localizations, LocalizationOptions};
use sheet_localizator_feed::FeedReader;

fn entry(label: &str, content: &str) -> String {
    format!(
        r#"{{"title": {{"type": "text", "$t": "{label}"}}, "content": {{"type": "text", "$t": "{content}"}}}}"#
    )
}

fn feed(entries: &[(&str, &str)]) -> String {
    let entries: Vec<String> = entries
        .iter()
        .map(|(label, content)| entry(label, content))
        .collect();
    format!(r#"{{"feed": {{"entry": [{}]}}}}"#, entries.join(","))
}

#[test]
fn test_feed_to_localizations() {
    let json = feed(&[
        ("A1", "Key"),
        ("B1", "EN"),
        ("C1", "FI"),
        ("A2", "menu.start"),
        ("B2", "Start"),
        ("C2", "Aloita"),
        ("A3", "menu.quit"),
        ("B3", "Quit"),
        ("C3", "Lopeta"),
    ]);
    let cells = FeedReader::read_str(&json).unwrap();

    let fi = build_localizations(&cells, None, &LocalizationOptions::default()).unwrap();
    assert_eq!(fi.len(), 2);
    assert_eq!(fi["menu.start"], "Aloita");
    assert_eq!(fi["menu.quit"], "Lopeta");
}

#[test]
fn test_feed_reader_preserves_order() {
    let json = feed(&[("A1", "Key"), ("B1", "EN"), ("A2", "k"), ("B2", "v")]);
    let labels: Vec<String> = FeedReader::read(json.as_bytes())
        .unwrap()
        .into_iter()
        .map(|cell| cell.label)
        .collect();
    assert_eq!(labels, vec!["A1", "B1", "A2", "B2"]);
}
