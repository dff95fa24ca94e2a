//! mcsnex-core: Data types and version logic for McStas NeXus output.
//!
//! This crate holds the pieces that need no file access: the version
//! registry that hides schema differences between McStas releases, and
//! the normalized records the reader produces.

pub mod error;
pub mod geometry;
pub mod parameter;
pub mod registry;
pub mod text;
pub mod value;
pub mod version;

pub use error::{Error, Result};
pub use geometry::Geometry;
pub use parameter::ComponentParameter;
pub use registry::{VersionRegistry, VersionSetting};
pub use text::{numeric_tokens, sanitize_label};
pub use value::{AttrValue, Shape};
pub use version::Version;
