//! Domain logic - tag convention and version tuples, independent of git operations

pub mod tag;
pub mod version;

pub use tag::{ParsedTag, TagPattern, TagScan};
pub use version::{Granularity, VersionTuple};
