//! File structure validation.

use crate::{Error, Result};
use hdf5::File;

/// Name of the top-level NXentry group McStas writes.
pub(crate) const ENTRY: &str = "entry1";

const MANDATORY_ENTRY_KEYS: [&str; 3] = ["data", "simulation", "instrument"];

/// Checks the mandatory top-level structure of a McStas NeXus file.
///
/// All missing keys at a level are reported in one message, so a
/// malformed file does not have to be re-opened once per problem.
///
/// # Errors
/// Returns [`Error::Schema`] naming the missing keys.
pub fn validate_file(file: &File) -> Result<()> {
    if !file.link_exists(ENTRY) {
        return Err(Error::Schema(format!(
            "h5 file not formatted as expected, lacks '{ENTRY}'"
        )));
    }
    let entry = file.group(ENTRY)?;

    let missing: Vec<&str> = MANDATORY_ENTRY_KEYS
        .iter()
        .copied()
        .filter(|key| !entry.link_exists(key))
        .collect();
    if !missing.is_empty() {
        return Err(Error::Schema(format!(
            "'{ENTRY}' not formatted as expected, lacks keys: [{}]",
            missing.join(", ")
        )));
    }

    if !entry.group("simulation")?.link_exists("Param") {
        return Err(Error::Schema(format!(
            "'{ENTRY}/simulation' not formatted as expected, lacks 'Param'"
        )));
    }
    if !entry.group("instrument")?.link_exists("components") {
        return Err(Error::Schema(format!(
            "'{ENTRY}/instrument' not formatted as expected, lacks 'components'"
        )));
    }
    Ok(())
}
