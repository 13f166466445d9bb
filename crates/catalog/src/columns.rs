use std::collections::BTreeMap;

use completeness::InterpolationTable;

use crate::error::CatalogError;

/// Prefix of the CDPP columns, e.g. `rrmscdpp07p5` for 7.5 hours
pub const CDPP_PREFIX: &str = "rrmscdpp";

/// Prefix of the MES threshold columns, e.g. `mesthres07p5`
pub const MES_THRESHOLD_PREFIX: &str = "mesthres";

/// Transit duration in hours encoded in a column name.
///
/// The suffix after `prefix` writes the decimal point as `p`.
///
/// # Example
/// ```
/// use catalog::duration_from_column;
///
/// assert_eq!(duration_from_column("rrmscdpp07p5", "rrmscdpp").unwrap(), 7.5);
/// assert_eq!(duration_from_column("mesthres12p0", "mesthres").unwrap(), 12.0);
/// ```
pub fn duration_from_column(name: &str, prefix: &str) -> Result<f64, CatalogError> {
    let invalid = || CatalogError::ColumnName(name.to_string());
    let suffix = name.strip_prefix(prefix).ok_or_else(invalid)?;
    let hours: f64 = suffix.replacen('p', ".", 1).parse().map_err(|_| invalid())?;
    if hours.is_finite() && hours > 0.0 {
        Ok(hours)
    } else {
        Err(invalid())
    }
}

/// Build a duration-indexed table from every `prefix*` column of a record.
///
/// Columns with non-finite values are skipped.
pub fn table_from_columns(
    kepid: u64,
    columns: &BTreeMap<String, f64>,
    prefix: &'static str,
) -> Result<InterpolationTable, CatalogError> {
    let mut points = Vec::new();
    for (name, &value) in columns {
        if !name.starts_with(prefix) || !value.is_finite() {
            continue;
        }
        points.push((duration_from_column(name, prefix)?, value));
    }
    if points.is_empty() {
        return Err(CatalogError::MissingColumns { kepid, prefix });
    }

    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    InterpolationTable::new(points).map_err(|source| CatalogError::Curve { kepid, source })
}
