//! Version-dependent reader settings.

use crate::{Error, Result, Version};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Schema knobs that changed between McStas releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersionSetting {
    /// Digits in the numeric prefix of component group names, if any.
    pub component_number_width: Option<usize>,
    /// Whether monitor_nD geometry is embedded as a structured entry.
    pub has_structured_geometry: bool,
}

/// Built-in settings table, newest release first.
const BUILTIN_SETTINGS: &[(Version, VersionSetting)] = &[
    (
        Version::new(3, 5, 20),
        VersionSetting {
            component_number_width: Some(4),
            has_structured_geometry: true,
        },
    ),
    // Defaults hold between 2.7 and 3.5.20.
    (
        Version::new(2, 7, 0),
        VersionSetting {
            component_number_width: None,
            has_structured_geometry: false,
        },
    ),
];

/// Ordered table mapping a minimum McStas version to its settings.
///
/// The table behaves as a step function: each entry covers every
/// version from its minimum up to the next higher minimum, and
/// [`resolve`](VersionRegistry::resolve) returns the settings of the
/// highest minimum that does not exceed the query.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    // Sorted descending by minimum version.
    entries: Vec<(Version, VersionSetting)>,
}

impl VersionRegistry {
    /// Builds a registry from `(minimum version, settings)` pairs.
    ///
    /// Entries are sorted newest-first internally, so callers may pass
    /// them in any order.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateVersion`] if two entries share a
    /// minimum version.
    pub fn new(mut entries: Vec<(Version, VersionSetting)>) -> Result<Self> {
        entries.sort_by(|a, b| b.0.cmp(&a.0));
        for pair in entries.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(Error::DuplicateVersion(pair[0].0));
            }
        }
        Ok(Self { entries })
    }

    /// The registry of known McStas releases.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_SETTINGS.to_vec(),
        }
    }

    /// Resolves the settings for `version`.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedVersion`] when `version` is below
    /// every registered minimum.
    pub fn resolve(&self, version: Version) -> Result<VersionSetting> {
        self.entries
            .iter()
            .find(|(minimum, _)| version >= *minimum)
            .map(|(_, settings)| *settings)
            .ok_or(Error::UnsupportedVersion(version))
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEWER: VersionSetting = VersionSetting {
        component_number_width: Some(4),
        has_structured_geometry: true,
    };
    const OLDER: VersionSetting = VersionSetting {
        component_number_width: None,
        has_structured_geometry: false,
    };

    fn registry() -> VersionRegistry {
        VersionRegistry::new(vec![
            (Version::new(2, 7, 0), OLDER),
            (Version::new(3, 5, 20), NEWER),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_between_minima() {
        let registry = registry();
        assert_eq!(registry.resolve(Version::new(2, 7, 0)).unwrap(), OLDER);
        assert_eq!(registry.resolve(Version::new(2, 8, 0)).unwrap(), OLDER);
        assert_eq!(registry.resolve(Version::new(3, 2, 0)).unwrap(), OLDER);
    }

    #[test]
    fn test_resolve_at_and_above_highest() {
        let registry = registry();
        assert_eq!(registry.resolve(Version::new(3, 5, 20)).unwrap(), NEWER);
        assert_eq!(registry.resolve(Version::new(3, 6, 0)).unwrap(), NEWER);
        assert_eq!(registry.resolve(Version::new(4, 0, 0)).unwrap(), NEWER);
    }

    #[test]
    fn test_resolve_below_lowest_fails() {
        let err = registry().resolve(Version::new(1, 0, 0)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion(_)));
    }

    #[test]
    fn test_duplicate_minimum_rejected() {
        let err = VersionRegistry::new(vec![
            (Version::new(3, 0, 0), NEWER),
            (Version::new(3, 0, 0), OLDER),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateVersion(_)));
    }

    #[test]
    fn test_builtin_table() {
        let registry = VersionRegistry::builtin();
        let modern = registry.resolve(Version::new(3, 5, 20)).unwrap();
        assert_eq!(modern.component_number_width, Some(4));
        assert!(modern.has_structured_geometry);

        let legacy = registry.resolve(Version::new(3, 2, 0)).unwrap();
        assert_eq!(legacy.component_number_width, None);
        assert!(!legacy.has_structured_geometry);

        assert!(registry.resolve(Version::new(2, 6, 0)).is_err());
    }
}
