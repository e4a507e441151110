use super::schema::{TableSchema, columns};
use crate::domain::{NusinovError, NusinovResult, TableKind};
use faer::Mat;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Column-oriented document a coefficient resource is stored as.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoefficientDocument {
    pub columns: BTreeMap<String, Vec<f64>>,
}

/// Immutable, schema-checked coefficient table. Row order is the band/line
/// order of the resource and is never changed after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    resource: String,
    kind: TableKind,
    rows: usize,
    columns: BTreeMap<String, Vec<f64>>,
}

impl CoefficientTable {
    pub fn from_columns(
        schema: &TableSchema,
        columns: BTreeMap<String, Vec<f64>>,
    ) -> NusinovResult<Self> {
        for required in schema.columns {
            if !columns.contains_key(*required) {
                return Err(NusinovError::resource_not_found(
                    "IO.COEFFICIENT_SCHEMA",
                    format!(
                        "coefficient resource '{}' is missing required column '{}'",
                        schema.resource, required
                    ),
                ));
            }
        }

        if let Some((name, values)) = columns
            .iter()
            .find(|(_, values)| values.len() != schema.rows)
        {
            return Err(NusinovError::resource_not_found(
                "IO.COEFFICIENT_SCHEMA",
                format!(
                    "coefficient resource '{}' column '{}' has {} rows; expected {}",
                    schema.resource,
                    name,
                    values.len(),
                    schema.rows
                ),
            ));
        }

        Ok(Self {
            resource: schema.resource.to_string(),
            kind: schema.kind,
            rows: schema.rows,
            columns,
        })
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub const fn kind(&self) -> TableKind {
        self.kind
    }

    pub const fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> NusinovResult<&[f64]> {
        self.columns.get(name).map(Vec::as_slice).ok_or_else(|| {
            NusinovError::resource_not_found(
                "IO.COEFFICIENT_COLUMN",
                format!(
                    "coefficient resource '{}' has no column '{}'",
                    self.resource, name
                ),
            )
        })
    }

    /// Stacks `B0` and `B1` into the `(rows × 2)` regression matrix.
    pub fn regression_matrix(&self) -> NusinovResult<Mat<f64>> {
        let b0 = self.column(columns::B0)?;
        let b1 = self.column(columns::B1)?;
        Ok(Mat::from_fn(self.rows, 2, |row, col| {
            if col == 0 { b0[row] } else { b1[row] }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::CoefficientTable;
    use crate::coefficients::schema::{EUVN1984_LINES, TableSchema};
    use crate::domain::{NusinovErrorCategory, TableKind};
    use std::collections::BTreeMap;

    const TINY: TableSchema = TableSchema {
        resource: "tiny_lines",
        kind: TableKind::Lines,
        rows: 3,
        columns: &["B0", "B1", "lambda"],
    };

    fn tiny_columns() -> BTreeMap<String, Vec<f64>> {
        BTreeMap::from([
            ("B0".to_string(), vec![1.0, 2.0, 3.0]),
            ("B1".to_string(), vec![0.1, 0.2, 0.3]),
            ("lambda".to_string(), vec![30.4, 58.4, 121.6]),
        ])
    }

    #[test]
    fn regression_matrix_stacks_b0_and_b1_by_row() {
        let table = CoefficientTable::from_columns(&TINY, tiny_columns()).expect("valid table");
        let matrix = table.regression_matrix().expect("regression columns exist");

        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix.ncols(), 2);
        assert_eq!(matrix[(1, 0)], 2.0);
        assert_eq!(matrix[(2, 1)], 0.3);
        assert_eq!(table.kind(), TableKind::Lines);
    }

    #[test]
    fn missing_columns_are_reported_as_missing_resources() {
        let mut columns = tiny_columns();
        columns.remove("B1");
        let error = CoefficientTable::from_columns(&TINY, columns).expect_err("B1 is required");
        assert_eq!(error.category(), NusinovErrorCategory::ResourceNotFound);
        assert!(error.message().contains("'B1'"));
    }

    #[test]
    fn row_count_must_match_schema() {
        let error = CoefficientTable::from_columns(&EUVN1984_LINES, tiny_columns())
            .expect_err("16 lines are expected");
        assert!(error.message().contains("expected 16"), "{}", error.message());
    }

    #[test]
    fn ragged_extra_columns_are_rejected() {
        let mut columns = tiny_columns();
        columns.insert("note".to_string(), vec![1.0]);
        let error = CoefficientTable::from_columns(&TINY, columns).expect_err("ragged column");
        assert!(error.message().contains("'note'"));
    }
}
