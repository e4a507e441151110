//! Attaches coordinate axes and annotations to evaluated flux tensors.

use super::labeled::{Attributes, BandAxis, LabeledResult, LineAxis, ProxyAxis, RowAxis};
use crate::coefficients::{CoefficientTable, columns};
use crate::common::constants::{FUV_BAND_COUNT, FUV_BAND_WIDTH_NM, FUV_FIRST_EDGE_NM};
use crate::domain::NusinovResult;
use crate::numerics::{ResultTensor, ShapeError};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultPackager;

impl ResultPackager {
    /// Row `i` of the result is row `i` of `tensor` and observation `j` is
    /// proxy value `j`; both axes must match the tensor shape exactly.
    pub fn wrap(
        tensor: ResultTensor,
        rows: RowAxis,
        proxy: ProxyAxis,
        variable: &str,
        attributes: Attributes,
    ) -> NusinovResult<LabeledResult> {
        if tensor.rows() != rows.len() || tensor.observations() != proxy.len() {
            return Err(ShapeError::AxisMismatch {
                rows: tensor.rows(),
                cols: tensor.observations(),
                expected_rows: rows.len(),
                expected_cols: proxy.len(),
            }
            .into());
        }

        Ok(LabeledResult::from_parts(
            variable.to_string(),
            rows,
            proxy,
            tensor.into_mat(),
            attributes,
        ))
    }
}

/// Band axis read from a table's `lband`/`uband`/`center` columns, numbered
/// from zero in table order.
pub fn band_axis_from_table(table: &CoefficientTable) -> NusinovResult<BandAxis> {
    Ok(BandAxis {
        numbers: (0..table.row_count()).collect(),
        centers: table.column(columns::CENTER)?.to_vec(),
        lower: table.column(columns::LOWER_BOUND)?.to_vec(),
        upper: table.column(columns::UPPER_BOUND)?.to_vec(),
        widths: None,
    })
}

pub fn line_axis_from_table(table: &CoefficientTable) -> NusinovResult<LineAxis> {
    Ok(LineAxis {
        numbers: (0..table.row_count()).collect(),
        wavelengths: table.column(columns::WAVELENGTH)?.to_vec(),
    })
}

/// The 1 nm FUV grid from 115 to 242 nm. FUV tables carry regression columns
/// only, so the band coordinates are synthesized.
pub fn fuv_band_axis(with_widths: bool) -> BandAxis {
    let lower: Vec<f64> = (0..FUV_BAND_COUNT)
        .map(|band| FUV_FIRST_EDGE_NM + band as f64 * FUV_BAND_WIDTH_NM)
        .collect();
    BandAxis {
        numbers: (0..FUV_BAND_COUNT).collect(),
        centers: lower.iter().map(|edge| edge + 0.5 * FUV_BAND_WIDTH_NM).collect(),
        upper: lower.iter().map(|edge| edge + FUV_BAND_WIDTH_NM).collect(),
        lower,
        widths: with_widths.then(|| vec![FUV_BAND_WIDTH_NM; FUV_BAND_COUNT]),
    }
}
