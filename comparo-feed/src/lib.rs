//! Tolerant ingestion of spreadsheet exports and webhook JSON feeds.
//!
//! A feed body goes through the same steps whatever its origin: the body is
//! decoded into a keyed [`Table`] (CSV with a sniffed delimiter, or JSON with
//! a wrapper-key search), each row is mapped to a record through synonym
//! tables, and the publication policy decides which records are shown.
//! [`SourceChain`] runs that pipeline over an ordered list of sources and
//! keeps the first one that yields anything; [`Catalog`] exposes the listings.

pub mod catalog;
pub mod chain;
pub mod config;
pub mod error;
pub mod fetch;
pub mod json;
pub mod mapper;
pub mod pipeline;
pub mod publication;
pub mod resolve;
pub mod source;
pub mod tabular;
pub mod text;

pub use catalog::{Catalog, dedupe_by_slug, find_by_slug};
pub use chain::SourceChain;
pub use config::{ApiKeySource, FeedConfig, api_key_source, config_path};
pub use error::FeedError;
pub use fetch::{FeedFetcher, FileFetcher, HttpFetcher, RoutingFetcher};
pub use json::{extract_json_rows, parse_json_feed};
pub use mapper::{FeedRecord, MapContext};
pub use pipeline::Pipeline;
pub use publication::PublicationPolicy;
pub use resolve::FieldResolver;
pub use source::{FeedSource, FetchedBody, SourceFormat, decode_table};
pub use tabular::{RawRow, Table, parse_records, parse_table, sniff_delimiter};
pub use text::{KeyNormalization, parse_decimal, parse_flag, slugify, split_list};
