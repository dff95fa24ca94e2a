//! Component parameter records.

use crate::AttrValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One component parameter as recorded in the file.
///
/// All three attributes are optional in the schema; `value` and
/// `default` are parsed opportunistically, numeric when they parse.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentParameter {
    /// Declared parameter type, when present.
    pub ty: Option<String>,
    /// Assigned value.
    pub value: Option<AttrValue>,
    /// Declared default value.
    pub default: Option<AttrValue>,
}
