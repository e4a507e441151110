//! Synthetic coefficient tables with the real per-variant shapes.

use crate::coefficients::{CoefficientStore, InMemorySource, TableSchema, schemas_for_variant};
use crate::domain::ModelVariant;
use std::collections::BTreeMap;

pub(crate) fn synthetic_columns(schema: &TableSchema) -> BTreeMap<String, Vec<f64>> {
    schema
        .columns
        .iter()
        .map(|name| {
            let values = (0..schema.rows)
                .map(|row| {
                    let row = row as f64;
                    match *name {
                        "B0" => 0.01 * (row + 1.0),
                        "B1" => 1.0e-4 * (row + 1.0),
                        "lband" => 5.0 + 5.0 * row,
                        "uband" => 10.0 + 5.0 * row,
                        "center" => 7.5 + 5.0 * row,
                        "lambda" => 20.0 + 3.0 * row,
                        _ => 1.0 + 0.5 * row,
                    }
                })
                .collect();
            (name.to_string(), values)
        })
        .collect()
}

pub(crate) fn synthetic_store() -> CoefficientStore {
    let mut source = InMemorySource::new();
    for variant in ModelVariant::ALL {
        for schema in schemas_for_variant(variant) {
            source.insert(schema.resource, synthetic_columns(schema));
        }
    }
    CoefficientStore::new(source)
}
