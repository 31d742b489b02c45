use comparo_core::{Body, ContentRecord, OfferRecord};

use super::*;

const SHEET: &str = "\u{FEFF}Slug;Titre;Note;Avantages;Publié;Published\n\
                     ;Crème Booty #1!;4,5;\"Doux|Hydratant|\nRapide\";;oui\n\
                     gel-2;Gel;abc;;;\n\
                     ;;3;;;oui\n\
                     huile;Huile sèche;5;;;Live\n";

fn body(text: &str) -> FetchedBody {
    FetchedBody::new("test-sheet", Some("text/csv"), text)
}

#[test]
fn test_sheet_maps_and_filters() {
    let pipeline = Pipeline::new(KeyNormalization::Folded, "produit");
    let records: Vec<ContentRecord> = pipeline.run(&body(SHEET), SourceFormat::Auto).unwrap();

    let slugs: Vec<_> = records.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["creme-booty-1", "huile"]);
    assert_eq!(records[0].rating, Some(4.5));
    assert_eq!(records[0].pros, vec!["Doux", "Hydratant", "Rapide"]);
    assert!(records.iter().all(|r| r.published));
}

#[test]
fn test_include_all_keeps_unpublished_but_not_rejected() {
    let pipeline = Pipeline::new(KeyNormalization::Folded, "produit").include_all(true);
    let records: Vec<ContentRecord> = pipeline.run(&body(SHEET), SourceFormat::Auto).unwrap();

    let slugs: Vec<_> = records.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["creme-booty-1", "gel-2", "huile"]);
    assert!(!records[1].published);
    assert_eq!(records[1].rating, None);
}

#[test]
fn test_pipeline_is_idempotent() {
    let pipeline = Pipeline::new(KeyNormalization::Folded, "produit").include_all(true);
    let first: Vec<ContentRecord> = pipeline.run(&body(SHEET), SourceFormat::Auto).unwrap();
    let second: Vec<ContentRecord> = pipeline.run(&body(SHEET), SourceFormat::Auto).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_json_rows_use_same_policy() {
    let json = r#"{"data": [
        {"productId": "p1", "merchant": "Amazon", "slug": "gel", "status": "online"},
        {"productId": "p2", "merchant": "Fnac", "slug": "gel", "status": "paused"},
        {"productId": "p3", "merchant": "Boots", "slug": "gel"}
    ]}"#;
    let pipeline = Pipeline::new(KeyNormalization::Folded, "");
    let offers: Vec<OfferRecord> = pipeline
        .run(&FetchedBody::new("hook", Some("application/json"), json), SourceFormat::Auto)
        .unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].product_id.as_deref(), Some("p1"));
}

#[test]
fn test_no_publication_column_publishes_all_rows() {
    let pipeline = Pipeline::new(KeyNormalization::Folded, "produit");
    let records: Vec<ContentRecord> = pipeline
        .run(&body("title,brand\nA,x\nB,\n"), SourceFormat::Auto)
        .unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_camel_case_json_keys_map_to_fields() {
    let json = r#"[{
        "slug": "gel",
        "title": "Gel",
        "heroImage": "h.jpg",
        "bodyHtml": "<p>x</p>",
        "bodyMarkdown": "**x**",
        "howTo": "Appliquer",
        "dateISO": "2024-03-01",
        "publishedAt": "ignored"
    }, {
        "title": "Huile",
        "coverImage": "c.jpg",
        "bodyMarkdown": "*doux*"
    }]"#;
    let pipeline = Pipeline::new(KeyNormalization::Folded, "produit");
    let records: Vec<ContentRecord> = pipeline
        .run(&FetchedBody::new("hook", None, json), SourceFormat::Auto)
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].body, Body::Html("<p>x</p>".into()));
    assert_eq!(records[0].hero_image.as_deref(), Some("h.jpg"));
    assert_eq!(records[0].how_to.as_deref(), Some("Appliquer"));
    assert_eq!(records[0].date_iso.as_deref(), Some("2024-03-01"));
    assert_eq!(records[1].slug, "huile");
    assert_eq!(records[1].hero_image.as_deref(), Some("c.jpg"));
    assert_eq!(records[1].body, Body::Markdown("*doux*".into()));
}
