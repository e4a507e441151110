//! Shared evaluation path of the regression-based facades.

use crate::coefficients::CoefficientTable;
use crate::domain::{NusinovResult, ProxyInput};
use crate::numerics::{BasisKind, DesignMatrixBuilder, PredictionEngine};
use crate::spectra::{Attributes, LabeledResult, ProxyAxis, ResultPackager, RowAxis};
use faer::Mat;

/// Fixed regression settings of one model family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    pub basis: BasisKind,
    pub scale: f64,
    pub coordinate: &'static str,
    pub variable: &'static str,
}

/// The precomputed `(rows × 2)` matrix of a loaded coefficient table and the
/// row axis every result from it carries.
#[derive(Debug, Clone)]
pub(crate) struct LinearTable {
    coefficients: Mat<f64>,
    rows: RowAxis,
    attributes: Attributes,
}

impl LinearTable {
    pub(crate) fn new(
        table: &CoefficientTable,
        rows: RowAxis,
        attributes: Attributes,
    ) -> NusinovResult<Self> {
        let coefficients = table.regression_matrix()?;
        Ok(Self {
            coefficients,
            rows,
            attributes,
        })
    }

    pub(crate) fn evaluate(
        &self,
        regression: &Regression,
        proxy: &ProxyInput,
    ) -> NusinovResult<LabeledResult> {
        let design = DesignMatrixBuilder::from_input(proxy, regression.basis);
        let tensor = PredictionEngine::evaluate(&self.coefficients, &design, regression.scale)?;
        ResultPackager::wrap(
            tensor,
            self.rows.clone(),
            ProxyAxis::new(regression.coordinate, proxy.values().to_vec()),
            regression.variable,
            self.attributes.clone(),
        )
    }
}

/// Builds an [`Attributes`] map from string pairs.
pub(crate) fn attributes(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}
