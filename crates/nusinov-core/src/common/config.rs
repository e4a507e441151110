//! Runtime configuration for locating coefficient resources.

use crate::domain::{NusinovError, NusinovResult};
use std::path::{Path, PathBuf};

pub const COEFFICIENTS_DIR_ENV: &str = "NUSINOV_COEFFICIENTS_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub coefficients_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from))
    }

    /// Resolves the configuration through `lookup` instead of the process
    /// environment; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let coefficients_dir =
            lookup(COEFFICIENTS_DIR_ENV).filter(|path| !path.as_os_str().is_empty());
        Self { coefficients_dir }
    }

    pub fn with_coefficients_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.coefficients_dir = Some(dir.into());
        self
    }

    pub fn require_coefficients_dir(&self) -> NusinovResult<&Path> {
        self.coefficients_dir.as_deref().ok_or_else(|| {
            NusinovError::resource_not_found(
                "IO.COEFFICIENTS_DIR",
                format!(
                    "no coefficient directory configured; pass --coefficients or set {}",
                    COEFFICIENTS_DIR_ENV
                ),
            )
        })
    }
}
