//! Component name catalog.

use crate::{Error, Result};

/// One instrument component: logical name plus on-disk group name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Logical name, numeric prefix stripped.
    pub name: String,
    /// Group name under `instrument/components`.
    pub path: String,
}

/// Ordered name table for the components group.
///
/// Order matches on-disk enumeration order and is stable for one open
/// file; event aggregation relies on that stability.
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    components: Vec<Component>,
}

impl ComponentCatalog {
    /// Builds the catalog from on-disk group names.
    ///
    /// With a numeric prefix width `w`, the logical name drops the
    /// first `w + 1` characters (the prefix plus one separator).
    /// Without a width the mapping is the identity.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateComponent`] when two paths strip to
    /// the same logical name.
    pub fn from_paths(paths: Vec<String>, prefix_width: Option<usize>) -> Result<Self> {
        let mut components = Vec::with_capacity(paths.len());
        for path in paths {
            let name = match prefix_width {
                Some(width) => path.get(width + 1..).unwrap_or("").to_string(),
                None => path.clone(),
            };
            components.push(Component { name, path });
        }
        for (i, component) in components.iter().enumerate() {
            if components[..i]
                .iter()
                .any(|other| other.name == component.name)
            {
                return Err(Error::DuplicateComponent(component.name.clone()));
            }
        }
        Ok(Self { components })
    }

    /// Logical names in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.name.clone()).collect()
    }

    /// On-disk group name for a logical name.
    ///
    /// # Errors
    /// Returns [`Error::UnknownComponent`] for names not in the file.
    pub fn path_of(&self, name: &str) -> Result<&str> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.path.as_str())
            .ok_or_else(|| Error::UnknownComponent(name.to_string()))
    }

    /// Iterates components in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
