pub mod coefficients;
pub mod common;
pub mod domain;
pub mod models;
pub mod numerics;
pub mod spectra;

#[cfg(test)]
pub(crate) mod test_support;

pub use coefficients::{CoefficientStore, CoefficientTable};
pub use domain::{ModelVariant, NusinovError, NusinovErrorCategory, NusinovResult, ProxyInput};
pub use models::{SpectralModel, SpectralModelExt, Spectra, build_model};
pub use spectra::LabeledResult;
