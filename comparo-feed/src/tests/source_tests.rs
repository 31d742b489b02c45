use super::*;

#[test]
fn test_auto_routes_json_by_content_type_or_first_char() {
    let by_type = FetchedBody::new("a", Some("application/json; charset=utf-8"), "[]");
    assert!(by_type.looks_like_json());
    let by_char = FetchedBody::new("a", Some("text/plain"), "\u{FEFF}  {\"data\": []}");
    assert!(by_char.looks_like_json());
    let csv = FetchedBody::new("a", Some("text/csv"), "title\nA\n");
    assert!(!csv.looks_like_json());
}

#[test]
fn test_decode_csv_and_json() {
    let csv = FetchedBody::new("sheet", None, "Title;Note\nA;4,5\n");
    let table = decode_table(&csv, SourceFormat::Auto, KeyNormalization::Folded).unwrap();
    assert_eq!(table.rows[0].get("note"), Some("4,5"));

    let json = FetchedBody::new("hook", None, r#"{"items": [{"Title": "A"}]}"#);
    let table = decode_table(&json, SourceFormat::Auto, KeyNormalization::Folded).unwrap();
    assert_eq!(table.rows[0].get("title"), Some("A"));
}

#[test]
fn test_html_body_is_a_decode_error() {
    let page = FetchedBody::new("sheet", Some("text/html"), "<!DOCTYPE html><html></html>");
    let err = decode_table(&page, SourceFormat::Auto, KeyNormalization::Folded).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn test_forced_format_overrides_sniffing() {
    let body = FetchedBody::new("hook", Some("text/plain"), "title\nA\n");
    let err = decode_table(&body, SourceFormat::Json, KeyNormalization::Folded).unwrap_err();
    assert!(err.is_decode());

    let body = FetchedBody::new("sheet", Some("application/json"), "title\nA\n");
    let table = decode_table(&body, SourceFormat::Csv, KeyNormalization::Folded).unwrap();
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn test_remote_detection() {
    assert!(FeedSource::new("HTTPS://hooks.example.com/x").is_remote());
    assert!(!FeedSource::new("file:///tmp/feed.csv").is_remote());
    assert!(!FeedSource::new("./feed.csv").is_remote());
}

#[test]
fn test_format_from_str() {
    assert_eq!(" JSON ".parse::<SourceFormat>(), Ok(SourceFormat::Json));
    assert_eq!("csv".parse::<SourceFormat>(), Ok(SourceFormat::Csv));
    assert!("xml".parse::<SourceFormat>().is_err());
}
