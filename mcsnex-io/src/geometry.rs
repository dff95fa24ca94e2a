//! Geometry reconstruction.
//!
//! Files written by McStas 3.5.20 and later embed a structured
//! Geometry entry per component. Older files only leave free-text
//! monitor options behind, from which a square monitor can still be
//! recovered.

use crate::{attrs, Error, NexusReader, Result};
use hdf5::Group;
use mcsnex_core::{numeric_tokens, AttrValue, Geometry, Shape};

impl NexusReader {
    /// Builds the normalized geometry record for a component.
    ///
    /// The record's layout stays fixed across file schema generations;
    /// version differences are absorbed here.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when the required entries or
    /// attributes are absent, [`Error::Validation`] when free-text
    /// content cannot be interpreted.
    pub fn geometry(&self, name: &str) -> Result<Geometry> {
        if self.settings().has_structured_geometry {
            self.structured_geometry(name)
        } else {
            self.legacy_geometry(name)
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn structured_geometry(&self, name: &str) -> Result<Geometry> {
        let entry = self.geometry_entry(name)?;

        let read = |attr: &str| -> Result<Option<AttrValue>> {
            Ok(attrs::read_str_attr(&entry, attr)?.map(|text| AttrValue::parse(&text)))
        };

        let mut geometry = Geometry {
            height: read("height")?,
            radius: read("radius")?,
            xmin: read("xmin")?,
            xmax: read("xmax")?,
            ymin: read("ymin")?,
            ymax: read("ymax")?,
            zmin: read("zmin")?,
            zmax: read("zmax")?,
            ..Geometry::default()
        };
        geometry.derive_extents();

        if let Some(identifier) = read("Shape identifier")? {
            let code = identifier.as_number().ok_or_else(|| {
                Error::Validation(format!(
                    "shape identifier of component '{name}' is not numeric"
                ))
            })?;
            // Unknown codes leave the record without a shape tag.
            geometry.shape = Shape::from_identifier(code as i64);
        }

        Ok(geometry)
    }

    fn legacy_geometry(&self, name: &str) -> Result<Geometry> {
        let info = self.info_entry(name)?;

        let options =
            attrs::read_str_attr(&info, "options")?.ok_or_else(|| Error::UnsupportedData {
                component: name.to_string(),
                detail: "does not have an options attribute in its info entry".to_string(),
            })?;
        if !options.contains("square") {
            return Err(Error::UnsupportedData {
                component: name.to_string(),
                detail: "only square monitors can be recovered without embedded geometry; \
                         recreate the file with a newer McStas version"
                    .to_string(),
            });
        }

        let bins = self.bins_entry(name)?;
        let xvar = required_attr(&bins, "xvar", name)?;
        let yvar = required_attr(&bins, "yvar", name)?;
        if xvar.trim() != "x" || yvar.trim() != "y" {
            return Err(Error::Validation(format!(
                "component '{name}' bins over '{}'/'{}' rather than x/y, \
                 its geometry cannot be recovered",
                xvar.trim(),
                yvar.trim()
            )));
        }

        let xylimits =
            attrs::read_str_attr(&info, "xylimits")?.ok_or_else(|| Error::UnsupportedData {
                component: name.to_string(),
                detail: "does not have an xylimits attribute in its info entry".to_string(),
            })?;
        let tokens = numeric_tokens(&xylimits);
        if tokens.len() < 4 {
            return Err(Error::Validation(format!(
                "expected four numeric bounds in xylimits of component '{name}', \
                 found {} in '{xylimits}'",
                tokens.len()
            )));
        }

        let mut geometry = Geometry {
            xmin: Some(AttrValue::Number(tokens[0])),
            xmax: Some(AttrValue::Number(tokens[1])),
            ymin: Some(AttrValue::Number(tokens[2])),
            ymax: Some(AttrValue::Number(tokens[3])),
            shape: Some(Shape::Square),
            ..Geometry::default()
        };
        geometry.derive_extents();
        Ok(geometry)
    }
}

fn required_attr(group: &Group, attr: &str, component: &str) -> Result<String> {
    attrs::read_str_attr(group, attr)?.ok_or_else(|| Error::UnsupportedData {
        component: component.to_string(),
        detail: format!("does not have a {attr} attribute in its BINS entry"),
    })
}
