use std::fmt;

/// Non-fatal issues met while reading the tag list.
/// These are reported to the user and processing continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag does not follow the version convention and is left out of the hierarchy
    UnsupportedTag { tag: String },
    /// None of the repository's tags follow the version convention
    NoVersionTags { total: usize, prefix: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnsupportedTag { tag } => {
                write!(f, "unsupported tag {}", tag)
            }
            BoundaryWarning::NoVersionTags { total, prefix } => {
                write!(
                    f,
                    "None of the {} tags match prefix '{}', the diagram will be empty",
                    total, prefix
                )
            }
        }
    }
}
