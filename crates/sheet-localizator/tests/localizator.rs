//! Tests for building localization tables through feed sources

use pretty_assertions::assert_eq;
use sheet_localizator::prelude::*;
use sheet_localizator::FeedError;
use std::io::Write;

const FEED: &str = r#"{
    "feed": {
        "entry": [
            {"title": {"$t": "A1"}, "content": {"$t": "Key"}},
            {"title": {"$t": "B1"}, "content": {"$t": "EN"}},
            {"title": {"$t": "C1"}, "content": {"$t": "FI"}},
            {"title": {"$t": "A2"}, "content": {"$t": "greeting"}},
            {"title": {"$t": "B2"}, "content": {"$t": "Hello"}},
            {"title": {"$t": "C2"}, "content": {"$t": "Hei"}},
            {"title": {"$t": "A3"}, "content": {"$t": "farewell"}},
            {"title": {"$t": "B3"}, "content": {"$t": "Bye"}}
        ]
    }
}"#;

fn entries(pairs: &[(&str, &str)]) -> LocalizationMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_localize_from_text() {
    let localizator = SheetLocalizator::new(JsonFeed::text(FEED));

    assert_eq!(
        localizator.localize(Some("EN")).unwrap(),
        entries(&[("farewell", "Bye"), ("greeting", "Hello")])
    );
    assert_eq!(
        localizator.localize(None).unwrap(),
        entries(&[("greeting", "Hei")])
    );
    assert_eq!(localizator.localize(Some("FR")).unwrap(), LocalizationMap::new());
}

#[test]
fn test_localize_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FEED.as_bytes()).unwrap();

    let localizator = SheetLocalizator::new(JsonFeed::file(file.path()));
    assert_eq!(localizator.languages().unwrap(), vec!["EN", "FI"]);
    assert_eq!(localizator.localize(Some("FI")).unwrap().len(), 1);
}

#[test]
fn test_resolve_missing_language() {
    let localizator = SheetLocalizator::new(JsonFeed::text(FEED));
    match localizator.resolve(Some("SV")).unwrap() {
        Resolution::LanguageNotFound {
            language,
            available,
        } => {
            assert_eq!(language, "SV");
            assert_eq!(available, vec!["EN", "FI"]);
        }
        other => panic!("expected LanguageNotFound, got {other:?}"),
    }
}

#[test]
fn test_custom_options() {
    let cells = vec![
        RawCell::new("A1", "Notes"),
        RawCell::new("B1", "Key"),
        RawCell::new("C1", "de"),
        RawCell::new("A2", "shown on start"),
        RawCell::new("B2", "greeting"),
        RawCell::new("C2", "Hallo"),
    ];
    let options = LocalizationOptions::default()
        .key_column(ColumnCode::parse("B").unwrap())
        .default_language("de");

    let localizator = SheetLocalizator::new(cells).with_options(options);
    assert_eq!(localizator.options().default_language, "de");
    assert_eq!(
        localizator.localize(None).unwrap(),
        entries(&[("greeting", "Hallo")])
    );
}

#[test]
fn test_errors_surface() {
    let localizator = SheetLocalizator::new(JsonFeed::file("/nonexistent/feed.json"));
    assert!(matches!(
        localizator.localize(Some("EN")),
        Err(Error::Feed(FeedError::Io(_)))
    ));

    let cells = vec![RawCell::new("A1", "Key"), RawCell::new("1A", "EN")];
    let localizator = SheetLocalizator::new(cells);
    assert!(matches!(
        localizator.localize(Some("EN")),
        Err(Error::Table(_))
    ));

    let cells = vec![RawCell::new("A1", "Key"), RawCell::new("1A", "EN")];
    let localizator = SheetLocalizator::new(cells)
        .with_options(LocalizationOptions::default().malformed_cells(MalformedCellPolicy::Skip));
    assert_eq!(localizator.localize(Some("EN")).unwrap(), LocalizationMap::new());
}
