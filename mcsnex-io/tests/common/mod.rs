//! Shared fixture builders: write small McStas-like NeXus files.

#![allow(dead_code)]

use hdf5::types::VarLenUnicode;
use hdf5::{File, Group};
use ndarray::{ArrayView1, ArrayView2};
use std::path::Path;
use std::str::FromStr;

/// Program attribute of a release with numeric component prefixes and
/// embedded geometry.
pub const MODERN_PROGRAM: &str = "McStas 3.5.20 - Nov. 2024";

/// Program attribute of a release before embedded geometry.
pub const LEGACY_PROGRAM: &str = "McStas 3.2.0 - Oct. 2022";

pub fn set_str_attr(group: &Group, name: &str, value: &str) {
    let value = VarLenUnicode::from_str(value).unwrap();
    group
        .new_attr::<VarLenUnicode>()
        .create(name)
        .unwrap()
        .write_scalar(&value)
        .unwrap();
}

/// Creates the mandatory skeleton, optionally with a program attribute.
pub fn base_file(path: &Path, program: Option<&str>) -> File {
    let file = File::create(path).unwrap();
    let entry = file.create_group("entry1").unwrap();
    entry.create_group("data").unwrap();
    let simulation = entry.create_group("simulation").unwrap();
    if let Some(program) = program {
        set_str_attr(&simulation, "program", program);
    }
    simulation.create_group("Param").unwrap();
    let instrument = entry.create_group("instrument").unwrap();
    instrument.create_group("components").unwrap();
    file
}

pub fn components_group(file: &File) -> Group {
    file.group("entry1/instrument/components").unwrap()
}

pub fn add_component(file: &File, disk_name: &str) -> Group {
    components_group(file).create_group(disk_name).unwrap()
}

/// Adds an output group holding BINS and one info entry.
pub fn add_output(component: &Group, info_name: &str) -> (Group, Group) {
    let output = component.create_group("output").unwrap();
    let bins = output.create_group("BINS").unwrap();
    let info = output.create_group(info_name).unwrap();
    (bins, info)
}

/// Writes the events matrix and its variables attribute.
pub fn add_events(info: &Group, variables: &str, rows: &[&[f64]]) {
    set_str_attr(info, "variables", variables);
    let ncols = rows.first().map_or(0, |row| row.len());
    let flat: Vec<f64> = rows.iter().flat_map(|row| row.iter().copied()).collect();
    let dataset = info
        .new_dataset::<f64>()
        .shape((rows.len(), ncols))
        .create("events")
        .unwrap();
    let view = ArrayView2::from_shape((rows.len(), ncols), flat.as_slice()).unwrap();
    dataset.write(view).unwrap();
}

pub fn add_dataset_1d(group: &Group, name: &str, values: &[f64]) {
    let dataset = group
        .new_dataset::<f64>()
        .shape((values.len(),))
        .create(name)
        .unwrap();
    dataset.write(ArrayView1::from(values)).unwrap();
}
