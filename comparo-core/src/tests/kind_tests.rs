use super::*;

#[test]
fn parses_short_names_and_aliases() {
    assert_eq!("products".parse::<ContentKind>().unwrap(), ContentKind::Products);
    assert_eq!("Blog".parse::<ContentKind>().unwrap(), ContentKind::Posts);
    assert_eq!(" top10 ".parse::<ContentKind>().unwrap(), ContentKind::Top);
    assert_eq!("produits".parse::<ContentKind>().unwrap(), ContentKind::Products);
}

#[test]
fn rejects_unknown_kind() {
    let err = "recipes".parse::<ContentKind>().unwrap_err();
    assert_eq!(err.to_string(), "unknown content kind: 'recipes'");
}

#[test]
fn lookup_order_starts_with_products() {
    assert_eq!(
        ContentKind::all(),
        &[ContentKind::Products, ContentKind::Posts, ContentKind::Top]
    );
}
