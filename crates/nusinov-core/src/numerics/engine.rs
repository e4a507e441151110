//! Batched evaluation of the fixed regressions.
//!
//! Linear variants are one dense product `scale · C · Dᵗ` with `C` the
//! `(rows × 2)` coefficient matrix and `D` the `(observations × 2)` design
//! matrix. XUV variants use a per-band power law of an affine F10.7 index and
//! have their own evaluation path.

use super::design::DesignMatrix;
use crate::coefficients::CoefficientTable;
use crate::common::constants::{
    XUV_EXPONENT_OFFSET, XUV_EXPONENT_SCALE, XUV_INDEX_OFFSET, XUV_INDEX_SLOPE,
    XUV_REFERENCE_INDEX,
};
use crate::domain::{NusinovError, NusinovResult};
use faer::linalg::matmul::matmul;
use faer::{Accum, Mat, Par};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error(
        "coefficient matrix has {coefficients} columns but the design matrix has {design} basis columns"
    )]
    BasisMismatch { coefficients: usize, design: usize },
    #[error("power-law inputs disagree: {reference} reference fluxes for {exponents} exponents")]
    PowerLawMismatch { reference: usize, exponents: usize },
    #[error("result tensor is {rows}x{cols} but its axes describe {expected_rows}x{expected_cols}")]
    AxisMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}

impl From<ShapeError> for NusinovError {
    fn from(error: ShapeError) -> Self {
        NusinovError::shape_mismatch("SYS.DESIGN_SHAPE", error.to_string())
    }
}

/// `(bands or lines × observations)` flux values.
#[derive(Debug, Clone)]
pub struct ResultTensor {
    values: Mat<f64>,
}

impl ResultTensor {
    pub fn from_mat(values: Mat<f64>) -> Self {
        Self { values }
    }

    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn observations(&self) -> usize {
        self.values.ncols()
    }

    pub fn get(&self, row: usize, observation: usize) -> f64 {
        self.values[(row, observation)]
    }

    pub fn as_mat(&self) -> &Mat<f64> {
        &self.values
    }

    pub fn into_mat(self) -> Mat<f64> {
        self.values
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PredictionEngine;

impl PredictionEngine {
    pub fn evaluate(
        coefficients: &Mat<f64>,
        design: &DesignMatrix,
        scale: f64,
    ) -> Result<ResultTensor, ShapeError> {
        if coefficients.ncols() != design.basis_columns() {
            return Err(ShapeError::BasisMismatch {
                coefficients: coefficients.ncols(),
                design: design.basis_columns(),
            });
        }

        let mut values = Mat::<f64>::zeros(coefficients.nrows(), design.observations());
        matmul(
            values.as_mut(),
            Accum::Replace,
            coefficients.as_ref(),
            design.matrix().as_ref().transpose(),
            scale,
            Par::Seq,
        );
        tracing::trace!(
            rows = values.nrows(),
            observations = values.ncols(),
            scale,
            "evaluated linear regression"
        );
        Ok(ResultTensor::from_mat(values))
    }

    pub fn evaluate_table(
        table: &CoefficientTable,
        design: &DesignMatrix,
        scale: f64,
    ) -> NusinovResult<ResultTensor> {
        let coefficients = table.regression_matrix()?;
        Ok(Self::evaluate(&coefficients, design, scale)?)
    }

    /// `flux[i][j] = reference[i] · (index[j] / 1.35)^exponents[i]`.
    pub fn evaluate_power_law(
        reference: &[f64],
        exponents: &[f64],
        index: &[f64],
    ) -> Result<ResultTensor, ShapeError> {
        if reference.len() != exponents.len() {
            return Err(ShapeError::PowerLawMismatch {
                reference: reference.len(),
                exponents: exponents.len(),
            });
        }

        let values = Mat::from_fn(reference.len(), index.len(), |row, col| {
            reference[row] * (index[col] / XUV_REFERENCE_INDEX).powf(exponents[row])
        });
        tracing::trace!(
            rows = values.nrows(),
            observations = values.ncols(),
            "evaluated power law"
        );
        Ok(ResultTensor::from_mat(values))
    }
}

/// Affine XUV activity index derived from F10.7.
pub fn xuv_index(f107: f64) -> f64 {
    XUV_INDEX_SLOPE * f107 + XUV_INDEX_OFFSET
}

/// Band-specific power-law exponent.
pub fn xuv_exponent(upper_bound: f64) -> f64 {
    XUV_EXPONENT_SCALE / upper_bound + XUV_EXPONENT_OFFSET
}

#[cfg(test)]
mod tests {
    use super::{PredictionEngine, ShapeError, xuv_exponent, xuv_index};
    use crate::domain::{NusinovError, NusinovErrorCategory, ProxyInput};
    use crate::numerics::design::{BasisKind, DesignMatrixBuilder};
    use faer::Mat;

    fn relative_close(actual: f64, expected: f64, tolerance: f64) -> bool {
        (actual - expected).abs() <= tolerance * expected.abs().max(f64::MIN_POSITIVE)
    }

    #[test]
    fn linear_evaluation_is_a_scaled_matrix_product() {
        let coefficients = Mat::from_fn(4, 2, |row, col| (row as f64 + 1.0) * 0.5 - col as f64 * 0.01);
        let proxy = ProxyInput::Sequence(vec![80.0, 150.0, 210.5]);
        let design = DesignMatrixBuilder::from_input(&proxy, BasisKind::LinearSquare);

        let tensor = PredictionEngine::evaluate(&coefficients, &design, 1.0e13).expect("shapes agree");

        assert_eq!(tensor.rows(), 4);
        assert_eq!(tensor.observations(), 3);
        for row in 0..4 {
            for (col, x) in proxy.values().iter().enumerate() {
                let expected =
                    1.0e13 * (coefficients[(row, 0)] * x + coefficients[(row, 1)] * x * x);
                assert!(
                    relative_close(tensor.get(row, col), expected, 1.0e-12),
                    "row {row} col {col}: {} vs {expected}",
                    tensor.get(row, col)
                );
            }
        }
    }

    #[test]
    fn basis_width_must_match_coefficient_columns() {
        let coefficients = Mat::<f64>::zeros(3, 2);
        let design =
            DesignMatrixBuilder::from_input(&ProxyInput::Scalar(1.0), BasisKind::Identity);

        let error = PredictionEngine::evaluate(&coefficients, &design, 1.0)
            .expect_err("one basis column cannot meet two coefficients");
        assert_eq!(
            error,
            ShapeError::BasisMismatch {
                coefficients: 2,
                design: 1
            }
        );
        let error = NusinovError::from(error);
        assert_eq!(error.category(), NusinovErrorCategory::ShapeMismatch);
        assert_eq!(error.exit_code(), 5);
    }

    #[test]
    fn power_law_matches_closed_form() {
        let reference = [2.0, 5.0];
        let upper_bounds = [1.0, 8.0];
        let exponents: Vec<f64> = upper_bounds.iter().map(|u| xuv_exponent(*u)).collect();
        let f107 = [120.0, 200.0];
        let index: Vec<f64> = f107.iter().map(|f| xuv_index(*f)).collect();

        let tensor =
            PredictionEngine::evaluate_power_law(&reference, &exponents, &index).expect("aligned");

        for row in 0..2 {
            for col in 0..2 {
                let d = 1.56 / upper_bounds[row] + 0.22;
                let expected = reference[row] * ((0.29 * f107[col] - 18.0) / 1.35).powf(d);
                assert!(relative_close(tensor.get(row, col), expected, 1.0e-9));
            }
        }
    }

    #[test]
    fn power_law_requires_aligned_band_inputs() {
        let error = PredictionEngine::evaluate_power_law(&[1.0], &[1.0, 2.0], &[3.0])
            .expect_err("misaligned");
        assert!(matches!(error, ShapeError::PowerLawMismatch { .. }));
    }

    #[test]
    fn nan_propagates_through_the_product() {
        let coefficients = Mat::from_fn(2, 2, |_, _| 1.0);
        let design =
            DesignMatrixBuilder::from_input(&ProxyInput::Scalar(f64::NAN), BasisKind::LinearSquare);
        let tensor = PredictionEngine::evaluate(&coefficients, &design, 1.0).expect("shapes agree");
        assert!(tensor.get(0, 0).is_nan());
        assert!(tensor.get(1, 0).is_nan());
    }
}
