use std::collections::HashMap;
use std::sync::Mutex;

use comparo_core::{ContentKind, ContentRecord, OfferRecord};
use comparo_feed::*;

enum Canned {
    Status(u16),
    Body(&'static str, &'static str),
}

/// Serves canned responses by URL and records the order of requests.
#[derive(Default)]
struct StubFetcher {
    responses: HashMap<String, Canned>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    fn with(mut self, url: &str, response: Canned) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl FeedFetcher for StubFetcher {
    async fn fetch(&self, source: &FeedSource) -> Result<FetchedBody, FeedError> {
        self.calls.lock().unwrap().push(source.url.clone());
        match self.responses.get(&source.url) {
            Some(Canned::Status(status)) => Err(FeedError::Status {
                url: source.url.clone(),
                status: *status,
            }),
            Some(Canned::Body(content_type, text)) => {
                Ok(FetchedBody::new(&source.url, Some(*content_type), *text))
            }
            None => Err(FeedError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no canned response",
            ))),
        }
    }
}

const WEBHOOK: &str = "https://hooks.test/products";
const SHEET: &str = "https://sheet.test/export.csv";
const BACKUP: &str = "https://backup.test/products.json";

const TWO_ROWS_CSV: &str = "slug,title,rating,published\n\
                            gel,Gel apaisant,\"4,5\",yes\n\
                            huile,Huile sèche,4,1\n\
                            brouillon,Brouillon,,no\n";

fn sources(urls: &[&str]) -> Vec<FeedSource> {
    urls.iter().map(|u| FeedSource::new(*u)).collect()
}

fn chain(fetcher: StubFetcher) -> SourceChain<StubFetcher> {
    SourceChain::new(fetcher, KeyNormalization::Folded)
}

#[tokio::test]
async fn server_error_falls_back_to_csv_export() {
    let fetcher = StubFetcher::default()
        .with(WEBHOOK, Canned::Status(500))
        .with(SHEET, Canned::Body("text/csv", TWO_ROWS_CSV));
    let chain = chain(fetcher);

    let records: Vec<ContentRecord> = chain
        .collect(&sources(&[WEBHOOK, SHEET]), "produit", false)
        .await;

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.published));
    assert_eq!(records[0].slug, "gel");
    assert_eq!(records[0].rating, Some(4.5));
    assert_eq!(chain.fetcher().calls(), vec![WEBHOOK, SHEET]);
}

#[tokio::test]
async fn first_non_empty_source_wins() {
    let fetcher = StubFetcher::default()
        .with(WEBHOOK, Canned::Body("application/json", r#"{"items": []}"#))
        .with(SHEET, Canned::Body("text/csv", TWO_ROWS_CSV))
        .with(BACKUP, Canned::Body("application/json", r#"[{"slug": "other"}]"#));
    let chain = chain(fetcher);

    let records: Vec<ContentRecord> = chain
        .collect(&sources(&[WEBHOOK, SHEET, BACKUP]), "produit", false)
        .await;

    assert_eq!(records.len(), 2);
    // The backup is never contacted once the sheet answered.
    assert_eq!(chain.fetcher().calls(), vec![WEBHOOK, SHEET]);
}

#[tokio::test]
async fn html_error_page_is_skipped() {
    let fetcher = StubFetcher::default()
        .with(WEBHOOK, Canned::Body("text/html", "<!doctype html><p>Sign in</p>"))
        .with(BACKUP, Canned::Body("application/json", r#"{"data": [{"slug": "gel"}]}"#));
    let chain = chain(fetcher);

    let records: Vec<ContentRecord> = chain
        .collect(&sources(&[WEBHOOK, BACKUP]), "produit", false)
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].slug, "gel");
    assert_eq!(records[0].title, "Untitled");
}

#[tokio::test]
async fn every_source_failing_yields_empty() {
    let fetcher = StubFetcher::default()
        .with(WEBHOOK, Canned::Status(503))
        .with(BACKUP, Canned::Body("application/json", "{not json"));
    let chain = chain(fetcher);

    let records: Vec<ContentRecord> = chain
        .collect(&sources(&[WEBHOOK, SHEET, BACKUP]), "produit", false)
        .await;

    assert!(records.is_empty());
    assert_eq!(chain.fetcher().calls().len(), 3);
}

#[tokio::test]
async fn no_sources_yields_empty() {
    let chain = chain(StubFetcher::default());
    let records: Vec<OfferRecord> = chain.collect(&[], "", false).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn only_unpublished_rows_count_as_empty() {
    let fetcher = StubFetcher::default()
        .with(WEBHOOK, Canned::Body("text/csv", "slug,status\ngel,draft\n"))
        .with(SHEET, Canned::Body("text/csv", TWO_ROWS_CSV));
    let chain = chain(fetcher);

    let published: Vec<ContentRecord> = chain
        .collect(&sources(&[WEBHOOK, SHEET]), "produit", false)
        .await;
    assert_eq!(published.len(), 2);

    // With unpublished rows kept, the first source is no longer empty.
    let everything: Vec<ContentRecord> = chain
        .collect(&sources(&[WEBHOOK, SHEET]), "produit", true)
        .await;
    assert_eq!(everything.len(), 1);
    assert_eq!(everything[0].slug, "gel");
    assert!(!everything[0].published);
}

#[tokio::test]
async fn catalog_lists_looks_up_and_links_offers() {
    let products = "slug;titre;published\ngel;Gel;oui\ngel;Gel doublon;oui\nsecret;Secret;non\n";
    let posts = r#"{"result": {"rows": [
        {"slug": "guide", "title": "Guide", "tags": ["a", "b"]}
    ]}}"#;
    let offers = "slug,merchant,price,published\n\
                  gel,Boutique A,\"12,90 €\",1\n\
                  gel,Boutique B,13 €,1\n\
                  gel,Boutique C,9 €,0\n\
                  guide,Boutique A,5 €,1\n";

    let fetcher = StubFetcher::default()
        .with("products.csv", Canned::Body("text/csv", products))
        .with("posts.json", Canned::Body("application/json", posts))
        .with("offers.csv", Canned::Body("text/csv", offers));

    let config = FeedConfig {
        products: sources(&["products.csv"]),
        posts: sources(&["posts.json"]),
        offers: sources(&["offers.csv"]),
        ..FeedConfig::default()
    };
    let catalog = Catalog::new(config, fetcher);

    let listed = catalog.list_content(ContentKind::Products, false).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Gel");

    let with_drafts = catalog.list_content(ContentKind::Products, true).await;
    assert_eq!(with_drafts.len(), 2);

    let guide = catalog.find_by_slug("guide").await.unwrap();
    assert_eq!(guide.tags, vec!["a", "b"]);
    assert!(catalog.find_by_slug("secret").await.is_none());
    assert!(catalog.find_in(ContentKind::Posts, "gel").await.is_none());
    assert!(catalog.list_content(ContentKind::Top, false).await.is_empty());

    let gel_offers = catalog.offers_for("gel").await;
    let merchants: Vec<_> = gel_offers.iter().filter_map(|o| o.merchant.as_deref()).collect();
    assert_eq!(merchants, vec!["Boutique A", "Boutique B"]);
    assert_eq!(gel_offers[0].price.as_deref(), Some("12,90 €"));
    assert_eq!(catalog.list_offers(true).await.len(), 4);
}
