//! McStas version numbers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A McStas release version (major, minor, patch).
///
/// Ordered lexicographically, so `3.5.20 < 3.6.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// Major release number.
    pub major: u32,
    /// Minor release number.
    pub minor: u32,
    /// Patch release number.
    pub patch: u32,
}

impl Version {
    /// Creates a version from its three parts.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Finds the first `major.minor.patch` run anywhere in `text`.
    ///
    /// McStas writes a free-form `program` attribute such as
    /// `"McStas 3.5.20 - Nov. 2024"`; the version sits wherever three
    /// dot-separated digit runs first appear.
    #[must_use]
    pub fn find_in(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i].is_ascii_digit() {
                if let Some(version) = scan_triple(&bytes[i..]) {
                    return Some(version);
                }
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            } else {
                i += 1;
            }
        }
        None
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn scan_triple(bytes: &[u8]) -> Option<Version> {
    let (major, rest) = scan_number(bytes)?;
    let rest = rest.strip_prefix(b".")?;
    let (minor, rest) = scan_number(rest)?;
    let rest = rest.strip_prefix(b".")?;
    let (patch, _) = scan_number(rest)?;
    Some(Version::new(major, minor, patch))
}

fn scan_number(bytes: &[u8]) -> Option<(u32, &[u8])> {
    let end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    if end == 0 {
        return None;
    }
    let mut value: u32 = 0;
    for &b in &bytes[..end] {
        value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }
    Some((value, &bytes[end..]))
}
