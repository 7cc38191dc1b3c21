use std::fmt;

/// Granularity level of a version node, ordered coarsest to finest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Granularity {
    /// `major.minor`
    Minor,
    /// `major.minor.patch`
    Patch,
    /// `major.minor.patch-release`
    Release,
    /// `major.minor.patch[-release]-pre`
    Pre,
}

/// Structured form of one version tag.
///
/// Components keep the exact text captured from the tag: `release` and `pre`
/// are empty when the tag does not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTuple {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub release: String,
    pub pre: String,
}

impl VersionTuple {
    /// Create a new version tuple
    pub fn new(
        major: impl Into<String>,
        minor: impl Into<String>,
        patch: impl Into<String>,
        release: impl Into<String>,
        pre: impl Into<String>,
    ) -> Self {
        VersionTuple {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            release: release.into(),
            pre: pre.into(),
        }
    }

    pub fn has_release(&self) -> bool {
        !self.release.is_empty()
    }

    pub fn has_pre(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Finest level this tuple specifies
    pub fn granularity(&self) -> Granularity {
        if self.has_pre() {
            Granularity::Pre
        } else if self.has_release() {
            Granularity::Release
        } else {
            Granularity::Patch
        }
    }

    /// Canonical identifier of this tuple at the given level.
    ///
    /// Levels the tuple does not specify collapse onto the next coarser one,
    /// e.g. the release identifier of `1.2.3` is `1.2.3`.
    pub fn id_at(&self, level: Granularity) -> String {
        let mut id = format!("{}.{}", self.major, self.minor);
        if level == Granularity::Minor {
            return id;
        }

        id.push('.');
        id.push_str(&self.patch);
        if level >= Granularity::Release && self.has_release() {
            id.push('-');
            id.push_str(&self.release);
        }
        if level == Granularity::Pre && self.has_pre() {
            id.push('-');
            id.push_str(&self.pre);
        }
        id
    }

    pub fn minor_id(&self) -> String {
        self.id_at(Granularity::Minor)
    }

    pub fn patch_id(&self) -> String {
        self.id_at(Granularity::Patch)
    }

    pub fn release_id(&self) -> String {
        self.id_at(Granularity::Release)
    }

    /// Identifier of the most specific node this tuple produces
    pub fn leaf_id(&self) -> String {
        self.id_at(self.granularity())
    }

    /// Parent of the pre-release node: the release node when a release label
    /// is present, otherwise the patch node.
    pub fn pre_parent_id(&self) -> String {
        if self.has_release() {
            self.release_id()
        } else {
            self.patch_id()
        }
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.leaf_id())
    }
}
