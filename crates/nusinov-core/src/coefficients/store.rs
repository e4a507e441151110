use super::schema::TableSchema;
use super::source::{CoefficientSource, DirectorySource};
use super::table::CoefficientTable;
use crate::common::RuntimeConfig;
use crate::domain::NusinovResult;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// Loads coefficient tables on first use and serves the cached, immutable copy
/// afterwards. Readers share a read lock once a table is cached; a source is
/// asked for a given resource at most once over the store's lifetime.
#[derive(Debug)]
pub struct CoefficientStore {
    source: Box<dyn CoefficientSource>,
    cache: RwLock<BTreeMap<String, Arc<CoefficientTable>>>,
}

impl CoefficientStore {
    pub fn new(source: impl CoefficientSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn from_directory(root: impl Into<PathBuf>) -> Self {
        Self::new(DirectorySource::new(root))
    }

    pub fn from_config(config: &RuntimeConfig) -> NusinovResult<Self> {
        let root = config.require_coefficients_dir()?;
        Ok(Self::from_directory(root))
    }

    pub fn load(&self, schema: &TableSchema) -> NusinovResult<Arc<CoefficientTable>> {
        if let Some(table) = self.cached(schema.resource) {
            tracing::debug!(resource = schema.resource, "serving cached coefficient table");
            return Ok(table);
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // Another loader may have populated the entry while we waited.
        if let Some(table) = cache.get(schema.resource) {
            return Ok(Arc::clone(table));
        }

        tracing::debug!(
            resource = schema.resource,
            rows = schema.rows,
            "reading coefficient table from source"
        );
        let columns = self.source.read_columns(schema.resource)?;
        let table = Arc::new(CoefficientTable::from_columns(schema, columns)?);
        cache.insert(schema.resource.to_string(), Arc::clone(&table));
        Ok(table)
    }

    pub fn load_all(&self, schemas: &[TableSchema]) -> NusinovResult<Vec<Arc<CoefficientTable>>> {
        schemas.iter().map(|schema| self.load(schema)).collect()
    }

    pub fn cached_resources(&self) -> Vec<String> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    fn cached(&self, resource: &str) -> Option<Arc<CoefficientTable>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(resource)
            .cloned()
    }
}
