//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the repository access
//! tag-lineage needs, allowing for a real Git implementation and a mock
//! implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use tag_lineage::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> tag_lineage::Result<()> {
//! for tag in repo.list_tags()? {
//!     println!("{} -> {}", tag.name, tag.target);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// A tag name together with the object it points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// Short tag name (without `refs/tags/`)
    pub name: String,
    /// Target of the tag reference (the tag object for annotated tags)
    pub target: Oid,
}

impl TagRef {
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        TagRef {
            name: name.into(),
            target,
        }
    }
}

/// Read-only repository access needed to build the lineage
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to [crate::error::TagLineageError] variants.
pub trait Repository {
    /// Get all tags in the repository
    ///
    /// Returns every tag reference with its target, sorted by tag name.
    ///
    /// # Returns
    /// * `Ok(Vec<TagRef>)` - Sorted list of tags
    /// * `Err` - If the tag references cannot be enumerated
    fn list_tags(&self) -> Result<Vec<TagRef>>;
}
