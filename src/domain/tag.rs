use crate::domain::VersionTuple;
use crate::error::Result;
use regex::{Captures, Regex};

/// Tag that matched the versioning convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    pub name: String,
    pub version: VersionTuple,
}

/// Tag names split by whether they follow the convention, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagScan {
    pub accepted: Vec<ParsedTag>,
    pub rejected: Vec<String>,
}

impl TagScan {
    /// Version tuples of the accepted tags
    pub fn versions(&self) -> Vec<VersionTuple> {
        self.accepted.iter().map(|t| t.version.clone()).collect()
    }
}

/// Tag naming convention: `<prefix>major.minor.patch[-release][-pre]`
///
/// `prefix` is a regex fragment; the whole pattern is matched case-insensitively
/// and anchored at both ends. `_` is accepted wherever `-` separates release
/// and pre-release components.
#[derive(Debug, Clone)]
pub struct TagPattern {
    prefix: String,
    regex: Regex,
}

impl TagPattern {
    /// Compile a tag pattern for the given prefix
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        let regex = Regex::new(&format!(
            r"(?i)^(?:{})(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)(?:[-_](?P<release>[a-z]+))?(?:[-_](?P<pre>(?:r|rc|p)\d+))?$",
            prefix
        ))?;

        Ok(TagPattern { prefix, regex })
    }

    /// Prefix fragment the pattern was compiled from
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parse a tag into its version tuple, or `None` if the tag is unsupported
    pub fn parse(&self, tag: &str) -> Option<ParsedTag> {
        let caps = self.regex.captures(tag)?;

        let group = |caps: &Captures, name: &str| {
            caps.name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        Some(ParsedTag {
            name: tag.to_string(),
            version: VersionTuple {
                major: group(&caps, "major"),
                minor: group(&caps, "minor"),
                patch: group(&caps, "patch"),
                release: group(&caps, "release"),
                pre: group(&caps, "pre"),
            },
        })
    }

    /// Parse every tag name, keeping unsupported names aside
    pub fn parse_all<I, S>(&self, names: I) -> TagScan
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scan = TagScan::default();
        for name in names {
            let name = name.as_ref();
            match self.parse(name) {
                Some(tag) => scan.accepted.push(tag),
                None => {
                    tracing::debug!(tag = name, "tag does not follow the version convention");
                    scan.rejected.push(name.to_string());
                }
            }
        }
        scan
    }
}
