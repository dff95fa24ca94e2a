//! String attribute access.

use crate::Result;
use hdf5::types::{VarLenAscii, VarLenUnicode};
use hdf5::Group;

/// Reads a string attribute, `None` when absent.
///
/// Files in the wild carry both variable-length unicode and ascii
/// attributes depending on the writing library, so both are tried.
pub(crate) fn read_str_attr(group: &Group, name: &str) -> Result<Option<String>> {
    let attr = match group.attr(name) {
        Ok(attr) => attr,
        Err(_) => return Ok(None),
    };
    if let Ok(value) = attr.read_scalar::<VarLenUnicode>() {
        return Ok(Some(value.to_string()));
    }
    let value = attr.read_scalar::<VarLenAscii>()?;
    Ok(Some(value.to_string()))
}
