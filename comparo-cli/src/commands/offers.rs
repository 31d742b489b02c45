use std::path::Path;

use super::{build_catalog, print_json, runtime};
use crate::error::CliError;

pub(crate) fn run_offers(
    config: Option<&Path>,
    all: bool,
    slug: Option<&str>,
) -> Result<(), CliError> {
    let catalog = build_catalog(config)?;
    let rt = runtime()?;

    let offers = match slug {
        Some(slug) if !all => rt.block_on(catalog.offers_for(slug)),
        Some(slug) => rt
            .block_on(catalog.list_offers(true))
            .into_iter()
            .filter(|offer| offer.links_to(slug))
            .collect(),
        None => rt.block_on(catalog.list_offers(all)),
    };

    if offers.is_empty() {
        log::warn!("No offers found");
    }
    print_json(&offers)
}
