#![allow(dead_code)]

use nusinov_core::coefficients::{
    CoefficientStore, InMemorySource, TableSchema, schemas_for_variant,
};
use nusinov_core::domain::ModelVariant;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Deterministic coefficients with the exact row count and columns of
/// `schema`. Values vary per row so permutation checks are meaningful.
pub fn fixture_columns(schema: &TableSchema) -> BTreeMap<String, Vec<f64>> {
    schema
        .columns
        .iter()
        .map(|name| {
            let values = (0..schema.rows)
                .map(|row| {
                    let row = row as f64;
                    match *name {
                        "B0" => 0.013 * (row + 1.0) - 0.002,
                        "B1" => 3.0e-5 * (row + 2.0),
                        "lband" => 10.0 + 2.5 * row,
                        "uband" => 12.5 + 2.5 * row,
                        "center" => 11.25 + 2.5 * row,
                        "lambda" => 25.0 + 4.0 * row,
                        "I" => 0.8 + 0.3 * row,
                        other => panic!("unexpected fixture column {other}"),
                    }
                })
                .collect();
            (name.to_string(), values)
        })
        .collect()
}

pub fn fixture_store() -> CoefficientStore {
    let mut source = InMemorySource::new();
    for variant in ModelVariant::ALL {
        for schema in schemas_for_variant(variant) {
            source.insert(schema.resource, fixture_columns(schema));
        }
    }
    CoefficientStore::new(source)
}

pub fn fixture_document(schema: &TableSchema) -> Value {
    json!({ "columns": fixture_columns(schema) })
}

/// Writes every resource of `variant` as `<dir>/<resource>.json`.
pub fn write_fixture_directory(dir: &Path, variant: ModelVariant) {
    for schema in schemas_for_variant(variant) {
        let path = dir.join(format!("{}.json", schema.resource));
        let body = serde_json::to_string_pretty(&fixture_document(schema))
            .expect("fixture document should serialize");
        fs::write(path, body).expect("fixture document should be written");
    }
}

pub fn relative_close(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance * expected.abs().max(f64::MIN_POSITIVE)
}
