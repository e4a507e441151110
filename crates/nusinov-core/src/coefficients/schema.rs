//! Schema descriptors for every coefficient resource a model variant reads.
//!
//! A schema names the resource, the expected row count and the columns that must
//! be present; [`super::CoefficientTable::from_columns`] checks all three when a
//! table is loaded so the facades never see a short or ragged table.

use crate::domain::{ModelVariant, TableKind};

pub mod columns {
    pub const B0: &str = "B0";
    pub const B1: &str = "B1";
    pub const LOWER_BOUND: &str = "lband";
    pub const UPPER_BOUND: &str = "uband";
    pub const CENTER: &str = "center";
    pub const WAVELENGTH: &str = "lambda";
    pub const REFERENCE_FLUX: &str = "I";
}

use columns::{B0, B1, CENTER, LOWER_BOUND, REFERENCE_FLUX, UPPER_BOUND, WAVELENGTH};

const BAND_COLUMNS: [&str; 5] = [B0, B1, LOWER_BOUND, UPPER_BOUND, CENTER];
const LINE_COLUMNS: [&str; 3] = [B0, B1, WAVELENGTH];
const REGRESSION_ONLY_COLUMNS: [&str; 2] = [B0, B1];
const XUV_COLUMNS: [&str; 4] = [REFERENCE_FLUX, LOWER_BOUND, UPPER_BOUND, CENTER];

pub const EUV_BAND_ROWS: usize = 19;
pub const EUV_FULL_ROWS: usize = 35;
pub const EUV_LINE_ROWS: usize = 16;
pub const EUVT_BAND_ROWS: usize = 20;
pub const EUVT_FULL_ROWS: usize = 36;
pub const FUV_BAND_ROWS: usize = 127;
pub const XUV_BAND_ROWS: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub resource: &'static str,
    pub kind: TableKind,
    pub rows: usize,
    pub columns: &'static [&'static str],
}

impl TableSchema {
    const fn new(
        resource: &'static str,
        kind: TableKind,
        rows: usize,
        columns: &'static [&'static str],
    ) -> Self {
        Self {
            resource,
            kind,
            rows,
            columns,
        }
    }
}

pub const EUVN1984_BANDS: TableSchema =
    TableSchema::new("euvn1984_bands_coeffs", TableKind::Bands, EUV_BAND_ROWS, &BAND_COLUMNS);
pub const EUVN1984_LINES: TableSchema =
    TableSchema::new("euvn1984_lines_coeffs", TableKind::Lines, EUV_LINE_ROWS, &LINE_COLUMNS);
pub const EUVN1984_FULL: TableSchema =
    TableSchema::new("euvn1984_full_coeffs", TableKind::Full, EUV_FULL_ROWS, &BAND_COLUMNS);

pub const EUVN1992_BANDS: TableSchema =
    TableSchema::new("euvn1992_bands_coeffs", TableKind::Bands, EUV_BAND_ROWS, &BAND_COLUMNS);
pub const EUVN1992_LINES: TableSchema =
    TableSchema::new("euvn1992_lines_coeffs", TableKind::Lines, EUV_LINE_ROWS, &LINE_COLUMNS);
pub const EUVN1992_FULL: TableSchema =
    TableSchema::new("euvn1992_full_coeffs", TableKind::Full, EUV_FULL_ROWS, &BAND_COLUMNS);

pub const EUVT_BANDS: TableSchema =
    TableSchema::new("euvt_bands_coeffs", TableKind::Bands, EUVT_BAND_ROWS, &BAND_COLUMNS);
pub const EUVT_LINES: TableSchema =
    TableSchema::new("euvt_lines_coeffs", TableKind::Lines, EUV_LINE_ROWS, &LINE_COLUMNS);
pub const EUVT_FULL: TableSchema =
    TableSchema::new("euvt_full_coeffs", TableKind::Full, EUVT_FULL_ROWS, &BAND_COLUMNS);

pub const FUVT2019_BANDS: TableSchema = TableSchema::new(
    "fuvt2019_bands_coeffs",
    TableKind::Bands,
    FUV_BAND_ROWS,
    &REGRESSION_ONLY_COLUMNS,
);
pub const FUVT2021_BANDS: TableSchema = TableSchema::new(
    "fuvt2021_bands_coeffs",
    TableKind::Bands,
    FUV_BAND_ROWS,
    &REGRESSION_ONLY_COLUMNS,
);

pub const XUV1986_BANDS: TableSchema =
    TableSchema::new("xuv1986_coeffs", TableKind::Bands, XUV_BAND_ROWS, &XUV_COLUMNS);
pub const XUV1992_BANDS: TableSchema =
    TableSchema::new("xuv1992_coeffs", TableKind::Bands, XUV_BAND_ROWS, &XUV_COLUMNS);

/// All resources a variant loads, bands first.
pub fn schemas_for_variant(variant: ModelVariant) -> &'static [TableSchema] {
    const EUVN1984: [TableSchema; 3] = [EUVN1984_BANDS, EUVN1984_LINES, EUVN1984_FULL];
    const EUVN1992: [TableSchema; 3] = [EUVN1992_BANDS, EUVN1992_LINES, EUVN1992_FULL];
    const EUVT: [TableSchema; 3] = [EUVT_BANDS, EUVT_LINES, EUVT_FULL];
    const FUVT2019: [TableSchema; 1] = [FUVT2019_BANDS];
    const FUVT2021: [TableSchema; 1] = [FUVT2021_BANDS];
    const XUV1986: [TableSchema; 1] = [XUV1986_BANDS];
    const XUV1992: [TableSchema; 1] = [XUV1992_BANDS];

    match variant {
        ModelVariant::Euvn1984 => &EUVN1984,
        ModelVariant::Euvn1992 => &EUVN1992,
        ModelVariant::Euvt2021 => &EUVT,
        ModelVariant::Fuvt2019 => &FUVT2019,
        ModelVariant::Fuvt2021 => &FUVT2021,
        ModelVariant::Xuv1986 => &XUV1986,
        ModelVariant::Xuv1992 => &XUV1992,
    }
}
