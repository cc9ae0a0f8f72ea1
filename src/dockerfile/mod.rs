//! Base image references in Dockerfiles
//!
//! Only the `FROM` instruction is understood:
//!
//! ```text
//! FROM [--flag=value ...] <name>[@<digest>] [AS <stage>]
//! ```
//!
//! Lines are matched one at a time on raw bytes, so the text need not be
//! UTF-8. Anything that is not a `FROM` line, and every byte of a `FROM`
//! line except its digest, is reproduced unchanged.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::bytes::{Captures, Regex};

/// Image name denoting an empty base; it has no digest to resolve
pub const SCRATCH: &str = "scratch";

// Docker treats instruction keywords case-insensitively. `(?-u)` lets `.`
// match any byte.
static FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^(\s*(?i:FROM)\s+(?:--\S+\s+)*([^@\s]+))(@\S+)?(.*)$")
        .expect("FROM pattern is valid")
});

/// One `FROM` line naming a base image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseImageReference {
    /// Image name and tag, without digest
    pub name: String,

    /// Digest already recorded on the line, without the leading `@`
    pub digest: Option<String>,

    /// Zero-based line index in the scanned text
    pub line: usize,

    prefix: Vec<u8>,
    suffix: Vec<u8>,
}

impl BaseImageReference {
    fn from_captures(line: usize, captures: &Captures<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(&captures[2]).into_owned(),
            digest: captures.get(3).map(|m| {
                String::from_utf8_lossy(m.as_bytes())
                    .trim_start_matches('@')
                    .to_string()
            }),
            line,
            prefix: captures[1].to_vec(),
            suffix: captures[4].to_vec(),
        }
    }

    /// `name@digest`, or just the name when no digest is recorded
    pub fn reference(&self) -> String {
        match &self.digest {
            Some(digest) => format!("{}@{}", self.name, digest),
            None => self.name.clone(),
        }
    }

    /// Whether the recorded digest equals `current`
    pub fn is_pinned_to(&self, current: &str) -> bool {
        self.digest.as_deref() == Some(current)
    }

    /// The scanned line with its digest replaced by `digest`
    pub fn with_digest(&self, digest: &str) -> Vec<u8> {
        let mut line = Vec::with_capacity(self.prefix.len() + digest.len() + self.suffix.len() + 1);
        line.extend_from_slice(&self.prefix);
        line.push(b'@');
        line.extend_from_slice(digest.as_bytes());
        line.extend_from_slice(&self.suffix);
        line
    }

    pub fn is_scratch(&self) -> bool {
        self.name == SCRATCH
    }
}

fn parse_line(index: usize, line: &[u8]) -> Option<BaseImageReference> {
    FROM_RE
        .captures(line)
        .map(|captures| BaseImageReference::from_captures(index, &captures))
}

/// All resolvable base image references, in file order
///
/// `FROM scratch` is skipped. A name used by several stages appears once
/// per line.
pub fn scan(text: &[u8]) -> Vec<BaseImageReference> {
    text.split(|&byte| byte == b'\n')
        .enumerate()
        .filter_map(|(index, line)| parse_line(index, line))
        .filter(|reference| !reference.is_scratch())
        .collect()
}

/// Distinct image names in order of first appearance
pub fn distinct_names(references: &[BaseImageReference]) -> Vec<&str> {
    let mut seen = HashSet::new();
    references
        .iter()
        .map(|reference| reference.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// The last non-scratch base image, i.e. the image of the final stage
pub fn find_last_reference(text: &[u8]) -> Option<BaseImageReference> {
    scan(text).pop()
}

/// Rewrite every `FROM` line whose image name is in `digests`
///
/// An existing digest is replaced, never extended. Other lines pass through
/// byte for byte and the line count is unchanged.
pub fn rewrite(text: &[u8], digests: &HashMap<String, String>) -> Vec<u8> {
    text.split(|&byte| byte == b'\n')
        .enumerate()
        .map(|(index, line)| {
            parse_line(index, line)
                .filter(|reference| !reference.is_scratch())
                .and_then(|reference| {
                    digests
                        .get(&reference.name)
                        .map(|digest| reference.with_digest(digest))
                })
                .unwrap_or_else(|| line.to_vec())
        })
        .collect::<Vec<_>>()
        .join(&b'\n')
}
