use std::collections::BTreeMap;

use approx::assert_relative_eq;
use completeness::CurveError;

use crate::columns::{duration_from_column, table_from_columns, CDPP_PREFIX};
use crate::error::CatalogError;

#[test]
fn parses_kepler_column_names() {
    assert_eq!(duration_from_column("rrmscdpp01p5", "rrmscdpp"), Ok(1.5));
    assert_eq!(duration_from_column("rrmscdpp15p0", "rrmscdpp"), Ok(15.0));
    assert_eq!(duration_from_column("mesthres10p5", "mesthres"), Ok(10.5));
}

#[test]
fn rejects_malformed_column_names() {
    for name in ["rrmscdpp", "rrmscdppxxp5", "mesthres07p5", "rrmscdpp00p0"] {
        assert_eq!(
            duration_from_column(name, "rrmscdpp"),
            Err(CatalogError::ColumnName(name.to_string()))
        );
    }
}

#[test]
fn table_is_sorted_by_duration() {
    let columns: BTreeMap<String, f64> = [
        ("rrmscdpp12p0", 20.0),
        ("rrmscdpp01p5", 80.0),
        ("rrmscdpp07p5", 30.0),
        ("rrmscdpp03p0", 50.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let table = table_from_columns(7, &columns, CDPP_PREFIX).unwrap();
    assert_eq!(table.xs(), &[1.5, 3.0, 7.5, 12.0]);
    assert_eq!(table.ys(), &[80.0, 50.0, 30.0, 20.0]);
    assert_relative_eq!(table.interpolate(5.25), 40.0);
}

#[test]
fn non_finite_entries_are_skipped() {
    let columns: BTreeMap<String, f64> = [
        ("rrmscdpp01p5", 80.0),
        ("rrmscdpp03p0", f64::NAN),
        ("rrmscdpp06p0", 40.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let table = table_from_columns(7, &columns, CDPP_PREFIX).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn too_few_columns_is_an_error() {
    let empty = BTreeMap::new();
    assert_eq!(
        table_from_columns(3, &empty, CDPP_PREFIX),
        Err(CatalogError::MissingColumns {
            kepid: 3,
            prefix: CDPP_PREFIX
        })
    );

    let single: BTreeMap<String, f64> = [("rrmscdpp03p0".to_string(), 50.0)].into();
    assert_eq!(
        table_from_columns(3, &single, CDPP_PREFIX),
        Err(CatalogError::Curve {
            kepid: 3,
            source: CurveError::InsufficientData(1)
        })
    );
}
