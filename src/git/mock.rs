use crate::error::Result;
use crate::git::{Repository, TagRef};
use git2::Oid;
use std::collections::BTreeMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: BTreeMap<String, Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: BTreeMap::new(),
        }
    }

    /// Create a mock repository holding the given tag names, all on the zero oid
    pub fn with_tags<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut repo = Self::new();
        for name in names {
            repo.add_tag(name, Oid::zero());
        }
        repo
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        Ok(self
            .tags
            .iter()
            .map(|(name, oid)| TagRef::new(name.clone(), *oid))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new();
        let oid = Oid::from_bytes(&[2; 20]).unwrap();

        repo.add_tag("CW-C10-1.0.0", oid);

        let tags = repo.list_tags().unwrap();
        assert_eq!(tags, vec![TagRef::new("CW-C10-1.0.0", oid)]);
    }

    #[test]
    fn test_mock_repository_list_sorted() {
        let repo = MockRepository::with_tags(["b", "c", "a"]);
        let names: Vec<String> = repo
            .list_tags()
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
    }
}
