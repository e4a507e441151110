//! Proxy-to-design-matrix transformation.
//!
//! Each regression is fit against a fixed input basis; the design matrix holds
//! one row per observation and one column per basis function, in input order.

use crate::domain::{NusinovResult, ProxyInput, ProxySource, validate_proxy};
use faer::Mat;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisKind {
    /// `[x]`
    Identity,
    /// `[x, x²]`, the 1984/1992 EUV and 2021 EUVT regressions.
    LinearSquare,
    /// `[1, x]`, the FUVT regressions.
    ConstLinear,
}

impl BasisKind {
    pub const fn columns(self) -> usize {
        match self {
            Self::Identity => 1,
            Self::LinearSquare | Self::ConstLinear => 2,
        }
    }

    /// Column that carries the raw proxy value.
    pub const fn proxy_column(self) -> usize {
        match self {
            Self::Identity | Self::LinearSquare => 0,
            Self::ConstLinear => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "[x]",
            Self::LinearSquare => "[x, x^2]",
            Self::ConstLinear => "[1, x]",
        }
    }

    fn column_value(self, x: f64, col: usize) -> f64 {
        match (self, col) {
            (Self::Identity, _) => x,
            (Self::LinearSquare, 0) => x,
            (Self::LinearSquare, _) => x * x,
            (Self::ConstLinear, 0) => 1.0,
            (Self::ConstLinear, _) => x,
        }
    }
}

impl Display for BasisKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// `(observations × basis columns)` matrix for one prediction call.
#[derive(Debug, Clone)]
pub struct DesignMatrix {
    basis: BasisKind,
    matrix: Mat<f64>,
}

impl DesignMatrix {
    pub const fn basis(&self) -> BasisKind {
        self.basis
    }

    pub fn matrix(&self) -> &Mat<f64> {
        &self.matrix
    }

    pub fn observations(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn basis_columns(&self) -> usize {
        self.matrix.ncols()
    }

    /// The proxy values in observation order, read back from the basis column
    /// that holds them.
    pub fn proxy_values(&self) -> Vec<f64> {
        let col = self.basis.proxy_column();
        (0..self.observations())
            .map(|row| self.matrix[(row, col)])
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DesignMatrixBuilder;

impl DesignMatrixBuilder {
    /// Validates `proxy` and expands it into `basis`.
    pub fn build<P>(proxy: &P, basis: BasisKind) -> NusinovResult<DesignMatrix>
    where
        P: ProxySource + ?Sized,
    {
        let input = validate_proxy(proxy)?;
        Ok(Self::from_input(&input, basis))
    }

    pub fn from_input(input: &ProxyInput, basis: BasisKind) -> DesignMatrix {
        let values = input.values();
        let matrix = Mat::from_fn(values.len(), basis.columns(), |row, col| {
            basis.column_value(values[row], col)
        });
        DesignMatrix { basis, matrix }
    }
}

#[cfg(test)]
mod tests {
    use super::{BasisKind, DesignMatrixBuilder};
    use crate::domain::{NusinovErrorCategory, ProxyInput};
    use serde_json::json;

    #[test]
    fn scalar_input_yields_a_single_row() {
        let design = DesignMatrixBuilder::build(&3.0, BasisKind::LinearSquare).expect("scalar");
        assert_eq!(design.observations(), 1);
        assert_eq!(design.basis_columns(), 2);
        assert_eq!(design.matrix()[(0, 0)], 3.0);
        assert_eq!(design.matrix()[(0, 1)], 9.0);
    }

    #[test]
    fn const_linear_basis_prepends_ones_and_keeps_order() {
        let design =
            DesignMatrixBuilder::build(&[5.0, 2.0, 7.0], BasisKind::ConstLinear).expect("seq");
        assert_eq!(design.observations(), 3);
        for row in 0..3 {
            assert_eq!(design.matrix()[(row, 0)], 1.0);
        }
        assert_eq!(design.proxy_values(), [5.0, 2.0, 7.0]);
    }

    #[test]
    fn identity_basis_has_one_column() {
        let design =
            DesignMatrixBuilder::from_input(&ProxyInput::Sequence(vec![1.0, 2.0]), BasisKind::Identity);
        assert_eq!(design.basis_columns(), 1);
        assert_eq!(design.proxy_values(), [1.0, 2.0]);
    }

    #[test]
    fn non_numeric_elements_fail_before_expansion() {
        let error = DesignMatrixBuilder::build(&json!([1.0, null]), BasisKind::LinearSquare)
            .expect_err("null is not numeric");
        assert_eq!(error.category(), NusinovErrorCategory::InvalidInputType);
    }
}
