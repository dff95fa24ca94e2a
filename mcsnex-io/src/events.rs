//! Multi-component event aggregation.

use crate::{Error, NexusReader, Result};
use std::collections::HashMap;
use std::ops::Range;

impl NexusReader {
    /// Gathers event columns for `variables` across components.
    ///
    /// With no explicit selection, every component with pixel ids is
    /// included. Each returned array concatenates the per-component
    /// columns in selection order; the column index is resolved
    /// against each component's own variable list, since lists differ
    /// in order and content between components. Row order within and
    /// across components is preserved.
    ///
    /// # Errors
    /// [`Error::UnsupportedData`] when a selected component lacks one
    /// of the requested variables, or event data entirely.
    pub fn event_data(
        &self,
        variables: &[&str],
        components: Option<&[&str]>,
    ) -> Result<HashMap<String, Vec<f64>>> {
        let selected: Vec<String> = match components {
            Some(names) => names.iter().map(|&name| name.to_string()).collect(),
            None => self.components_with_ids()?,
        };

        // Offset ranges first, so each output array is allocated once.
        let mut ranges: Vec<(String, Range<usize>)> = Vec::with_capacity(selected.len());
        let mut total = 0;
        for name in &selected {
            let count = self.n_events(name)?;
            ranges.push((name.clone(), total..total + count));
            total += count;
        }

        // Reject before allocating if any component lacks a variable.
        for name in &selected {
            let available = self.component_variables(name)?;
            for &variable in variables {
                if !available.iter().any(|v| v == variable) {
                    return Err(Error::UnsupportedData {
                        component: name.clone(),
                        detail: format!("did not have variable '{variable}' in event data"),
                    });
                }
            }
        }

        let mut columns: Vec<Vec<f64>> = vec![vec![0.0; total]; variables.len()];

        for (name, range) in &ranges {
            let array = self.events_array(name)?;
            if array.nrows() != range.len() {
                return Err(Error::Validation(format!(
                    "event count of component '{name}' changed during aggregation"
                )));
            }
            for (&variable, column) in variables.iter().zip(columns.iter_mut()) {
                let index = self.variable_index(name, variable)?;
                if index >= array.ncols() {
                    return Err(Error::Validation(format!(
                        "variable '{variable}' resolves to column {index} but the \
                         events matrix of '{name}' has {} columns",
                        array.ncols()
                    )));
                }
                for (slot, value) in column[range.clone()].iter_mut().zip(array.column(index)) {
                    *slot = *value;
                }
            }
        }

        Ok(variables
            .iter()
            .zip(columns)
            .map(|(&variable, column)| (variable.to_string(), column))
            .collect())
    }
}
