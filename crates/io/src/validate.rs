//! Schema checks for the input feeds.

use std::path::Path;

use arrow::datatypes::{DataType, Schema};

use crate::error::IoError;

/// Resolves each `(name, type)` pair to a column index in `schema`.
///
/// Extra columns are ignored.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] or [`IoError::ColumnType`] for the
/// first column that is absent or mistyped.
pub(crate) fn resolve_columns<const N: usize>(
    schema: &Schema,
    expected: [(&str, DataType); N],
    path: &Path,
) -> Result<[usize; N], IoError> {
    let mut indices = [0usize; N];
    for (slot, (name, data_type)) in indices.iter_mut().zip(expected) {
        let idx = schema.index_of(name).map_err(|_| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })?;
        let got = schema.field(idx).data_type();
        if *got != data_type {
            return Err(IoError::ColumnType {
                name: name.to_string(),
                expected: data_type.to_string(),
                got: got.to_string(),
            });
        }
        *slot = idx;
    }
    Ok(indices)
}
