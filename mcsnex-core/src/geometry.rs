//! Normalized monitor geometry.

use crate::{AttrValue, Shape};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry description of one component, normalized across file
/// schema generations.
///
/// Which fields are present depends on the writing McStas version and
/// on the monitor type; absent fields are `None`. Bounds keep whatever
/// form the file recorded (numeric or text), while the extents are
/// derived and always numeric.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    /// Monitor height.
    pub height: Option<AttrValue>,
    /// Monitor radius.
    pub radius: Option<AttrValue>,
    /// Lower x bound.
    pub xmin: Option<AttrValue>,
    /// Upper x bound.
    pub xmax: Option<AttrValue>,
    /// Lower y bound.
    pub ymin: Option<AttrValue>,
    /// Upper y bound.
    pub ymax: Option<AttrValue>,
    /// Lower z bound.
    pub zmin: Option<AttrValue>,
    /// Upper z bound.
    pub zmax: Option<AttrValue>,
    /// Derived `xmax - xmin`, when both bounds are numeric.
    pub xwidth: Option<f64>,
    /// Derived `ymax - ymin`, when both bounds are numeric.
    pub yheight: Option<f64>,
    /// Derived `zmax - zmin`, when both bounds are numeric.
    pub zdepth: Option<f64>,
    /// Shape class, when the file carried a known identifier.
    pub shape: Option<Shape>,
}

impl Geometry {
    /// Fills the derived extents from whichever bound pairs are
    /// present and numeric.
    pub fn derive_extents(&mut self) {
        self.xwidth = span(&self.xmin, &self.xmax);
        self.yheight = span(&self.ymin, &self.ymax);
        self.zdepth = span(&self.zmin, &self.zmax);
    }
}

fn span(min: &Option<AttrValue>, max: &Option<AttrValue>) -> Option<f64> {
    Some(max.as_ref()?.as_number()? - min.as_ref()?.as_number()?)
}
