//! Model constants shared by the facades and the numeric kernels.
//!
//! Values are the published regression/power-law constants of the Nusinov
//! family of empirical irradiance models.

use std::f64::consts::PI;

pub const TWO_PI: f64 = 2.0 * PI;
pub const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Output scale of the 1984/1992 EUV regressions.
pub const EUVN_FLUX_SCALE: f64 = 1.0e13;
/// Output scale of the Lyman-alpha driven EUVT/FUVT regressions.
pub const LAC_FLUX_SCALE: f64 = 1.0e15;

/// `index = XUV_INDEX_SLOPE * F10.7 + XUV_INDEX_OFFSET`.
pub const XUV_INDEX_SLOPE: f64 = 0.29;
pub const XUV_INDEX_OFFSET: f64 = -18.0;
/// Reference index the XUV power law is normalized to.
pub const XUV_REFERENCE_INDEX: f64 = 1.35;
/// Band exponent `d = XUV_EXPONENT_SCALE / uband + XUV_EXPONENT_OFFSET`.
pub const XUV_EXPONENT_SCALE: f64 = 1.56;
pub const XUV_EXPONENT_OFFSET: f64 = 0.22;

pub const BACKGROUND_1984_BASE: f64 = 63.0;
pub const BACKGROUND_1984_AMPLITUDE: f64 = 482.0;
pub const BACKGROUND_1984_SINE_POWER: f64 = 3.7;
pub const BACKGROUND_1984_DECAY: f64 = -5.2;

pub const BACKGROUND_1992_COSINE: [f64; 5] = [82.1, -19.6, 1.778, 2.59, -2.33];
pub const BACKGROUND_1992_SINE: [f64; 5] = [0.0, 10.55, -7.956, 3.104, -0.925];

/// Background level subtracted before the He I index power law.
pub const HELIUM_BACKGROUND_REFERENCE: f64 = 60.0;
/// 1984: `hei = 0.725 + 0.160·(Fb − 60)^(2/3) + 0.0592·(F10.7 − Fb)^(2/3)`.
pub const HELIUM_1984_COEFFICIENTS: [f64; 3] = [0.725, 0.160, 0.0592];
/// 1992: `i584 = 1.38 + 0.111·(Fb − 60)^(2/3) + (F10.7 − Fb)^(2/3)`.
pub const HELIUM_1992_COEFFICIENTS: [f64; 3] = [1.38, 0.111, 1.0];

/// Ratio between the Lyman-alpha flux at the top of the atmosphere and the
/// corrected value used as model input.
pub const LAC_TO_LAT: f64 = 0.865;

/// First lower edge, bin width and bin count of the synthesized FUV grid (nm).
pub const FUV_FIRST_EDGE_NM: f64 = 115.0;
pub const FUV_BAND_WIDTH_NM: f64 = 1.0;
pub const FUV_BAND_COUNT: usize = 127;

#[cfg(test)]
mod tests {
    use super::{
        BACKGROUND_1992_COSINE, BACKGROUND_1992_SINE, FUV_BAND_COUNT, FUV_BAND_WIDTH_NM,
        FUV_FIRST_EDGE_NM, TWO_PI, TWO_THIRDS,
    };

    #[test]
    fn derived_constants_match_expected_relationships() {
        assert!((TWO_PI - 2.0 * std::f64::consts::PI).abs() <= f64::EPSILON);
        assert_eq!(TWO_THIRDS, 2.0 / 3.0);
        assert_eq!(BACKGROUND_1992_COSINE.len(), BACKGROUND_1992_SINE.len());
        assert_eq!(BACKGROUND_1992_SINE[0], 0.0);
    }

    #[test]
    fn fuv_grid_spans_115_to_242_nm() {
        let upper = FUV_FIRST_EDGE_NM + FUV_BAND_COUNT as f64 * FUV_BAND_WIDTH_NM;
        assert_eq!(upper, 242.0);
    }
}
