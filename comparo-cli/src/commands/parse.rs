use std::path::Path;

use comparo_core::{ContentKind, ContentRecord, OfferRecord};
use comparo_feed::{
    FeedFetcher, FeedSource, FileFetcher, KeyNormalization, Pipeline, SourceFormat,
};

use super::{print_json, runtime};
use crate::error::CliError;

/// Run the pipeline on one local file.
///
/// Decode errors are reported here rather than demoted as in the source chain.
pub(crate) fn run_parse(
    file: &Path,
    offers: bool,
    kind: ContentKind,
    format: SourceFormat,
    all: bool,
) -> Result<(), CliError> {
    let source = FeedSource::new(file.to_string_lossy()).with_format(format);
    let rt = runtime()?;
    let body = rt.block_on(FileFetcher.fetch(&source))?;

    let pipeline =
        Pipeline::new(KeyNormalization::default(), kind.fallback_slug()).include_all(all);
    if offers {
        let records: Vec<OfferRecord> = pipeline.run(&body, format)?;
        log::info!("{}: {} offers", file.display(), records.len());
        print_json(&records)
    } else {
        let records: Vec<ContentRecord> = pipeline.run(&body, format)?;
        log::info!("{}: {} {} records", file.display(), records.len(), kind);
        print_json(&records)
    }
}
