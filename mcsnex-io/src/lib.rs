//! mcsnex-io: Reading McStas NeXus simulation output.
//!
//! McStas writes one hierarchical NeXus (HDF5) file per simulation,
//! with a layout that shifted between releases. [`NexusReader`] opens
//! such a file, hides the per-version schema differences behind the
//! version registry from `mcsnex-core`, and exposes typed access to
//! component metadata, detector geometry and per-event records.
//!
//! Sessions are read-only and single-threaded; every accessor derives
//! its result from the open file on demand and fails fast on the first
//! structural violation it meets.

mod attrs;
mod catalog;
mod error;
mod events;
mod geometry;
mod reader;
mod schema;

pub use catalog::{Component, ComponentCatalog};
pub use error::{Error, Result};
pub use reader::{Axis, NexusReader, ReaderOptions};
pub use schema::validate_file;

pub use mcsnex_core::{
    AttrValue, ComponentParameter, Geometry, Shape, Version, VersionRegistry, VersionSetting,
};
