//! Backing resources a [`super::CoefficientStore`] reads tables from.

use super::table::CoefficientDocument;
use crate::domain::{NusinovError, NusinovResult};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

pub const RESOURCE_EXTENSION: &str = "json";

pub trait CoefficientSource: Debug + Send + Sync {
    fn read_columns(&self, resource: &str) -> NusinovResult<BTreeMap<String, Vec<f64>>>;
}

/// Reads `<root>/<resource>.json` documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resource_path(&self, resource: &str) -> PathBuf {
        self.root
            .join(resource)
            .with_extension(RESOURCE_EXTENSION)
    }
}

impl CoefficientSource for DirectorySource {
    fn read_columns(&self, resource: &str) -> NusinovResult<BTreeMap<String, Vec<f64>>> {
        let path = self.resource_path(resource);
        let source = fs::read_to_string(&path).map_err(|source| {
            NusinovError::resource_not_found(
                "IO.COEFFICIENT_READ",
                format!(
                    "failed to read coefficient resource '{}' at '{}': {}",
                    resource,
                    path.display(),
                    source
                ),
            )
        })?;

        let document: CoefficientDocument = serde_json::from_str(&source).map_err(|source| {
            NusinovError::resource_not_found(
                "IO.COEFFICIENT_PARSE",
                format!(
                    "coefficient resource '{}' at '{}' is corrupt: {}",
                    resource,
                    path.display(),
                    source
                ),
            )
        })?;

        Ok(document.columns)
    }
}

/// Tables held in memory, for fixtures and embedding callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemorySource {
    tables: BTreeMap<String, BTreeMap<String, Vec<f64>>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        resource: impl Into<String>,
        columns: BTreeMap<String, Vec<f64>>,
    ) -> &mut Self {
        self.tables.insert(resource.into(), columns);
        self
    }

    pub fn with_table(
        mut self,
        resource: impl Into<String>,
        columns: BTreeMap<String, Vec<f64>>,
    ) -> Self {
        self.insert(resource, columns);
        self
    }

    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl CoefficientSource for InMemorySource {
    fn read_columns(&self, resource: &str) -> NusinovResult<BTreeMap<String, Vec<f64>>> {
        self.tables.get(resource).cloned().ok_or_else(|| {
            NusinovError::resource_not_found(
                "IO.COEFFICIENT_READ",
                format!("coefficient resource '{}' is not registered", resource),
            )
        })
    }
}
