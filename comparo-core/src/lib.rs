//! Content model for the comparo affiliate site.
//!
//! These are the normalized records produced by `comparo-feed` on every
//! ingestion pass and consumed by the rendering side. Nothing here performs
//! I/O; records are immutable snapshots.

pub mod content;
pub mod kind;
pub mod offer;

pub use content::{Body, ContentRecord, sort_newest_first};
pub use kind::{ContentKind, ContentKindParseError};
pub use offer::OfferRecord;
