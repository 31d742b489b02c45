use std::path::Path;

use comparo_core::{ContentKind, sort_newest_first};

use super::{build_catalog, print_json, runtime};
use crate::error::CliError;

/// List one content kind as the site would render it.
pub(crate) fn run_content(
    config: Option<&Path>,
    kind: ContentKind,
    all: bool,
    newest_first: bool,
) -> Result<(), CliError> {
    let catalog = build_catalog(config)?;
    let rt = runtime()?;

    let mut records = rt.block_on(catalog.list_content(kind, all));
    if newest_first {
        sort_newest_first(&mut records);
    }

    if records.is_empty() {
        log::warn!(
            "No {} records from {} configured source(s)",
            kind,
            catalog.config().sources(kind).len(),
        );
    } else {
        let hidden = records.iter().filter(|r| !r.published).count();
        log::info!("{} {} records ({} unpublished)", records.len(), kind, hidden);
    }

    print_json(&records)
}

/// Look up a published record by slug across every kind.
pub(crate) fn run_find(config: Option<&Path>, slug: &str) -> Result<(), CliError> {
    let catalog = build_catalog(config)?;
    let rt = runtime()?;

    match rt.block_on(catalog.find_by_slug(slug)) {
        Some(record) => print_json(&record),
        None => Err(CliError::not_found(slug)),
    }
}
