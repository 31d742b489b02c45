use super::*;
use crate::tabular::parse_records;

fn policy_and_rows(text: &str) -> (PublicationPolicy, Vec<RawRow>) {
    let table = parse_records(text, KeyNormalization::Folded);
    let policy = PublicationPolicy::from_headers(&table.headers, KeyNormalization::Folded);
    (policy, table.rows)
}

#[test]
fn test_explicit_column_uses_truthy_tokens() {
    let (policy, rows) = policy_and_rows("Title,Published\nA,oui\nB,\nC,Draft\nD,LIVE\n");
    assert_eq!(policy.column(), Some("published"));
    let published: Vec<bool> = rows.iter().map(|r| policy.is_published(r)).collect();
    assert_eq!(published, vec![true, false, false, true]);
}

#[test]
fn test_no_publication_column_publishes_everything() {
    let (policy, rows) = policy_and_rows("Title,Note\nA,non\nB,\n");
    assert_eq!(policy.column(), None);
    assert!(rows.iter().all(|r| policy.is_published(r)));
}

#[test]
fn test_status_column_counts_as_publication_intent() {
    let (policy, rows) = policy_and_rows("Title;Status\nA;Published\nB;archived\n");
    assert_eq!(policy.column(), Some("status"));
    assert!(policy.is_published(&rows[0]));
    assert!(!policy.is_published(&rows[1]));
}

#[test]
fn test_alias_priority_prefers_published_over_status() {
    let (policy, rows) = policy_and_rows("Status,Published\nonline,\n");
    assert_eq!(policy.column(), Some("published"));
    assert!(!policy.is_published(&rows[0]));
}
