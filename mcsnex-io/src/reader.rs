//! The reader session and entry navigation.

use crate::catalog::ComponentCatalog;
use crate::{attrs, schema, Error, Result};
use hdf5::{Dataset, File, Group};
use mcsnex_core::{
    sanitize_label, AttrValue, ComponentParameter, Version, VersionRegistry, VersionSetting,
};
use mcsnex_core::Error as CoreError;
use ndarray::{Array1, Array2};
use std::collections::BTreeMap;
use std::path::Path;

/// Options for opening a session.
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    /// Explicit version, skipping detection from the program attribute.
    pub version: Option<Version>,
    /// Registry override, for private schema builds.
    pub registry: Option<VersionRegistry>,
}

/// A named axis read from a component's BINS entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Variable binned along this axis, e.g. `"x"` or `"t"`.
    pub var: String,
    /// Axis values.
    pub values: Array1<f64>,
}

/// Read-only session over one McStas NeXus file.
///
/// The file handle is owned for the lifetime of the session; the only
/// state computed up front is the component name catalog. Everything
/// else is derived from the file on demand, so repeated calls with the
/// same inputs give the same results.
pub struct NexusReader {
    file: File,
    version: Version,
    settings: VersionSetting,
    catalog: ComponentCatalog,
}

impl NexusReader {
    /// Opens a file and detects the McStas version that wrote it.
    ///
    /// # Errors
    /// Fails when the file cannot be opened, the mandatory structure
    /// is missing, or the version cannot be detected or is below every
    /// registry entry.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file(File::open(path)?)
    }

    /// Wraps an already opened file, detecting the version.
    ///
    /// # Errors
    /// See [`NexusReader::open`].
    pub fn from_file(file: File) -> Result<Self> {
        Self::from_file_with(file, ReaderOptions::default())
    }

    /// Wraps an already opened file with explicit options.
    ///
    /// An explicit `version` skips detection entirely, which is the
    /// escape hatch for files whose `program` attribute carries no
    /// parseable version.
    ///
    /// # Errors
    /// See [`NexusReader::open`].
    pub fn from_file_with(file: File, options: ReaderOptions) -> Result<Self> {
        schema::validate_file(&file)?;

        let version = match options.version {
            Some(version) => version,
            None => read_version(&file)?,
        };
        let registry = options.registry.unwrap_or_default();
        let settings = registry.resolve(version)?;

        let paths = file
            .group(schema::ENTRY)?
            .group("instrument")?
            .group("components")?
            .member_names()?;
        let catalog = ComponentCatalog::from_paths(paths, settings.component_number_width)?;

        Ok(Self {
            file,
            version,
            settings,
            catalog,
        })
    }

    /// The McStas version this session resolved.
    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    /// The settings resolved for this file's version.
    #[must_use]
    pub fn settings(&self) -> VersionSetting {
        self.settings
    }

    /// The component name catalog.
    #[must_use]
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// Logical component names, in file order.
    #[must_use]
    pub fn components(&self) -> Vec<String> {
        self.catalog.names()
    }

    /// Components that recorded any output.
    ///
    /// # Errors
    /// Fails on HDF5 access errors.
    pub fn components_with_data(&self) -> Result<Vec<String>> {
        let mut with_data = Vec::new();
        for component in self.catalog.iter() {
            let entry = self.components_group()?.group(&component.path)?;
            if entry.link_exists("output") {
                with_data.push(component.name.clone());
            }
        }
        Ok(with_data)
    }

    /// Components with pixel ids: a BINS entry plus recorded output.
    ///
    /// # Errors
    /// Fails on HDF5 access errors.
    pub fn components_with_ids(&self) -> Result<Vec<String>> {
        let mut with_ids = Vec::new();
        for name in self.components_with_data()? {
            let output = self.output_entry(&name)?;
            if output.link_exists("BINS") && output.member_names()?.len() > 1 {
                with_ids.push(name);
            }
        }
        Ok(with_ids)
    }

    /// Components carrying a structured geometry entry.
    ///
    /// # Errors
    /// Fails on HDF5 access errors.
    pub fn components_with_geometry(&self) -> Result<Vec<String>> {
        let mut with_geometry = Vec::new();
        for name in self.components_with_data()? {
            if self.component_entry(&name)?.link_exists("Geometry") {
                with_geometry.push(name);
            }
        }
        Ok(with_geometry)
    }

    /// The component group for a logical name.
    ///
    /// # Errors
    /// [`Error::UnknownComponent`] when the name is not in the file.
    pub fn component_entry(&self, name: &str) -> Result<Group> {
        let path = self.catalog.path_of(name)?;
        Ok(self.components_group()?.group(path)?)
    }

    /// The output group of a component.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when the component recorded nothing.
    pub fn output_entry(&self, name: &str) -> Result<Group> {
        let entry = self.component_entry(name)?;
        if !entry.link_exists("output") {
            return Err(Error::UnsupportedData {
                component: name.to_string(),
                detail: "does not have data".to_string(),
            });
        }
        Ok(entry.group("output")?)
    }

    /// The BINS group of a component.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when no BINS entry exists.
    pub fn bins_entry(&self, name: &str) -> Result<Group> {
        let output = self.output_entry(name)?;
        if !output.link_exists("BINS") {
            return Err(Error::UnsupportedData {
                component: name.to_string(),
                detail: "does not have a BINS entry".to_string(),
            });
        }
        Ok(output.group("BINS")?)
    }

    /// The info group of a component: the single output child that is
    /// not BINS. Its name varies with the monitor, so it is found by
    /// elimination.
    ///
    /// # Errors
    /// [`Error::AmbiguousSchema`] when elimination does not leave
    /// exactly one entry.
    pub fn info_entry(&self, name: &str) -> Result<Group> {
        let output = self.output_entry(name)?;
        let mut contents = output.member_names()?;
        contents.retain(|entry| entry != "BINS");
        if contents.len() != 1 {
            return Err(Error::AmbiguousSchema {
                component: name.to_string(),
                found: contents.len(),
            });
        }
        Ok(output.group(&contents[0])?)
    }

    /// The structured geometry group of a component.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when the writing version predates
    /// embedded geometry, or the component has none.
    pub fn geometry_entry(&self, name: &str) -> Result<Group> {
        let entry = self.component_entry(name)?;
        if !self.settings.has_structured_geometry {
            return Err(Error::UnsupportedData {
                component: name.to_string(),
                detail: format!(
                    "McStas {} did not embed monitor_nD geometry info in NeXus files",
                    self.version
                ),
            });
        }
        if !entry.link_exists("Geometry") {
            return Err(Error::UnsupportedData {
                component: name.to_string(),
                detail: "does not have geometry data".to_string(),
            });
        }
        Ok(entry.group("Geometry")?)
    }

    /// The parameters group of a component.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when the component has none.
    pub fn parameters_entry(&self, name: &str) -> Result<Group> {
        let entry = self.component_entry(name)?;
        if !entry.link_exists("parameters") {
            return Err(Error::UnsupportedData {
                component: name.to_string(),
                detail: "does not have a parameters entry".to_string(),
            });
        }
        Ok(entry.group("parameters")?)
    }

    /// The per-pixel id dataset of a component.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when BINS has no pixels dataset.
    pub fn pixels_dataset(&self, name: &str) -> Result<Dataset> {
        let bins = self.bins_entry(name)?;
        if !bins.link_exists("pixels") {
            return Err(Error::UnsupportedData {
                component: name.to_string(),
                detail: "does not have a pixels entry".to_string(),
            });
        }
        Ok(bins.dataset("pixels")?)
    }

    /// Reads the axis recorded under a `var`/`label` attribute pair.
    ///
    /// Axes are optional per component: a missing attribute gives
    /// `None`, not an error. The label is mangled into the axis
    /// dataset name the same way McStas mangles it on write.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when the attributes exist but the
    /// mangled dataset does not.
    pub fn var_and_axis(
        &self,
        name: &str,
        var_attr: &str,
        label_attr: &str,
    ) -> Result<Option<Axis>> {
        let bins = self.bins_entry(name)?;
        let var = match attrs::read_str_attr(&bins, var_attr)? {
            Some(var) => var,
            None => return Ok(None),
        };
        let label = match attrs::read_str_attr(&bins, label_attr)? {
            Some(label) => label,
            None => return Ok(None),
        };

        let dataset_name = sanitize_label(&label);
        if !bins.link_exists(&dataset_name) {
            return Err(Error::UnsupportedData {
                component: name.to_string(),
                detail: format!("expected axis dataset '{dataset_name}' in BINS entry"),
            });
        }
        let values = bins.dataset(&dataset_name)?.read_1d::<f64>()?;
        Ok(Some(Axis { var, values }))
    }

    /// The x axis of a component, when binned.
    ///
    /// # Errors
    /// See [`NexusReader::var_and_axis`].
    pub fn x_axis(&self, name: &str) -> Result<Option<Axis>> {
        self.var_and_axis(name, "xvar", "xlabel")
    }

    /// The y axis of a component, when binned.
    ///
    /// # Errors
    /// See [`NexusReader::var_and_axis`].
    pub fn y_axis(&self, name: &str) -> Result<Option<Axis>> {
        self.var_and_axis(name, "yvar", "ylabel")
    }

    /// The z axis of a component, when binned.
    ///
    /// # Errors
    /// See [`NexusReader::var_and_axis`].
    pub fn z_axis(&self, name: &str) -> Result<Option<Axis>> {
        self.var_and_axis(name, "zvar", "zlabel")
    }

    /// Names of the variables recorded per event, in column order.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when the info entry carries no
    /// variables attribute.
    pub fn component_variables(&self, name: &str) -> Result<Vec<String>> {
        let info = self.info_entry(name)?;
        let variables =
            attrs::read_str_attr(&info, "variables")?.ok_or_else(|| Error::UnsupportedData {
                component: name.to_string(),
                detail: "does not have a variables attribute in its info entry".to_string(),
            })?;
        Ok(variables.split_whitespace().map(str::to_string).collect())
    }

    /// Column index of `variable` in this component's event matrix.
    ///
    /// Variable lists differ between components, so indices must be
    /// resolved against each component separately.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when the variable is not recorded.
    pub fn variable_index(&self, name: &str, variable: &str) -> Result<usize> {
        let variables = self.component_variables(name)?;
        variables
            .iter()
            .position(|v| v == variable)
            .ok_or_else(|| Error::UnsupportedData {
                component: name.to_string(),
                detail: format!("did not have variable '{variable}' in event data"),
            })
    }

    /// Number of recorded events for a component.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when there is no events dataset.
    pub fn n_events(&self, name: &str) -> Result<usize> {
        Ok(self.events_dataset(name)?.shape().first().copied().unwrap_or(0))
    }

    /// The event matrix of a component, one row per event.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when there is no events dataset.
    pub fn events_array(&self, name: &str) -> Result<Array2<f64>> {
        Ok(self.events_dataset(name)?.read_2d::<f64>()?)
    }

    /// Parameter names of a component.
    ///
    /// # Errors
    /// See [`NexusReader::parameters_entry`].
    pub fn parameter_names(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.parameters_entry(name)?.member_names()?)
    }

    /// All parameters of a component, values parsed opportunistically.
    ///
    /// # Errors
    /// See [`NexusReader::parameters_entry`].
    pub fn parameters(&self, name: &str) -> Result<BTreeMap<String, ComponentParameter>> {
        let entry = self.parameters_entry(name)?;
        let mut parameters = BTreeMap::new();
        for par_name in entry.member_names()? {
            let par_entry = entry.group(&par_name)?;
            let parameter = ComponentParameter {
                ty: attrs::read_str_attr(&par_entry, "type")?,
                value: attrs::read_str_attr(&par_entry, "value")?
                    .map(|text| AttrValue::parse(&text)),
                default: attrs::read_str_attr(&par_entry, "default")?
                    .map(|text| AttrValue::parse(&text)),
            };
            parameters.insert(par_name, parameter);
        }
        Ok(parameters)
    }

    fn events_dataset(&self, name: &str) -> Result<Dataset> {
        let info = self.info_entry(name)?;
        if !info.link_exists("events") {
            return Err(Error::UnsupportedData {
                component: name.to_string(),
                detail: "does not have an events entry".to_string(),
            });
        }
        Ok(info.dataset("events")?)
    }

    fn components_group(&self) -> Result<Group> {
        Ok(self
            .file
            .group(schema::ENTRY)?
            .group("instrument")?
            .group("components")?)
    }
}

fn read_version(file: &File) -> Result<Version> {
    let simulation = file.group(schema::ENTRY)?.group("simulation")?;
    let program = attrs::read_str_attr(&simulation, "program")?.ok_or_else(|| {
        CoreError::VersionNotFound(format!(
            "{}/simulation has no 'program' attribute",
            schema::ENTRY
        ))
    })?;
    Version::find_in(&program).ok_or_else(|| CoreError::VersionNotFound(program.clone()).into())
}
