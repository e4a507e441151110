//! Conversions between the corrected (`lac`) and top-of-atmosphere (`lat`)
//! Lyman-alpha flux scales.

use super::labeled::LabeledResult;
use crate::common::constants::LAC_TO_LAT;

pub fn lac_to_lat(result: &LabeledResult) -> LabeledResult {
    result.scaled(LAC_TO_LAT)
}

pub fn lat_to_lac(result: &LabeledResult) -> LabeledResult {
    result.scaled(1.0 / LAC_TO_LAT)
}
