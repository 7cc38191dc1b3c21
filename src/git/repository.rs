use crate::error::{Result, TagLineageError};
use crate::git::TagRef;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository at exactly `path` (no upward discovery)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::open(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        let mut tags = Vec::new();

        for reference in self.repo.references_glob("refs/tags/*")? {
            let reference = reference?;

            let Some(name) = reference.shorthand().map(str::to_string) else {
                tracing::warn!(
                    reference = %String::from_utf8_lossy(reference.name_bytes()),
                    "skipping tag with non UTF-8 name"
                );
                continue;
            };

            let target = reference.resolve()?.target().ok_or_else(|| {
                TagLineageError::Git(git2::Error::from_str(&format!(
                    "Tag '{}' has no target",
                    name
                )))
            })?;

            tags.push(TagRef { name, target });
        }

        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}
