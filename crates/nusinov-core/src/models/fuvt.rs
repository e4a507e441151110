//! 2019 and 2021 FUVT models: 127 one-nanometre bands from 115 to 242 nm over
//! a `[1, x]` regression in the corrected Lyman-alpha flux.

use super::euvt::LAC_UNITS;
use super::linear::{LinearTable, Regression, attributes};
use super::traits::SpectralModel;
use crate::coefficients::schema::{FUVT2019_BANDS, FUVT2021_BANDS};
use crate::coefficients::{CoefficientStore, TableSchema};
use crate::common::constants::LAC_FLUX_SCALE;
use crate::domain::{ModelVariant, NusinovResult, ProxyInput};
use crate::numerics::BasisKind;
use crate::spectra::{Attributes, LabeledResult, RowAxis, fuv_band_axis};

pub(crate) const REGRESSION: Regression = Regression {
    basis: BasisKind::ConstLinear,
    scale: LAC_FLUX_SCALE,
    coordinate: "lac",
    variable: "fuv_flux_spectra",
};

#[derive(Debug, Clone)]
pub struct FuvtModel {
    variant: ModelVariant,
    bands: LinearTable,
}

impl FuvtModel {
    pub fn fuvt2019(store: &CoefficientStore) -> NusinovResult<Self> {
        Self::load(store, ModelVariant::Fuvt2019, &FUVT2019_BANDS, false, Attributes::new())
    }

    /// The 2021 revision also reports band widths and unit annotations.
    pub fn fuvt2021(store: &CoefficientStore) -> NusinovResult<Self> {
        let annotations = attributes(&[
            ("lac units", LAC_UNITS),
            ("spectra units", LAC_UNITS),
            ("wavelength units", "nm"),
            ("fuv_flux_spectra", "modeled FUV solar irradiance"),
            ("lband", "lower boundary of wavelength interval"),
            ("uband", "upper boundary of wavelength interval"),
            ("fuv_band_width", "width of wavelength interval"),
        ]);
        Self::load(store, ModelVariant::Fuvt2021, &FUVT2021_BANDS, true, annotations)
    }

    fn load(
        store: &CoefficientStore,
        variant: ModelVariant,
        schema: &TableSchema,
        with_widths: bool,
        annotations: Attributes,
    ) -> NusinovResult<Self> {
        let table = store.load(schema)?;
        let rows = RowAxis::Bands(fuv_band_axis(with_widths));
        Ok(Self {
            variant,
            bands: LinearTable::new(&table, rows, annotations)?,
        })
    }
}

impl SpectralModel for FuvtModel {
    fn variant(&self) -> ModelVariant {
        self.variant
    }

    fn bands(&self, proxy: &ProxyInput) -> NusinovResult<LabeledResult> {
        self.bands.evaluate(&REGRESSION, proxy)
    }
}

#[cfg(test)]
mod tests {
    use super::FuvtModel;
    use crate::models::SpectralModelExt;
    use crate::test_support::synthetic_store;

    #[test]
    fn bands_use_the_constant_plus_linear_basis() {
        let model = FuvtModel::fuvt2019(&synthetic_store()).expect("fixture tables");
        let bands = model.spectral_bands(&[4.0, 5.0]).expect("lac values");

        assert_eq!(bands.shape(), (127, 2));
        assert_eq!(bands.variable(), "fuv_flux_spectra");
        let expected = 1.0e15 * (0.01 + 1.0e-4 * 5.0);
        assert!((bands.value(0, 1) - expected).abs() <= 1.0e-12 * expected);
        assert!(bands.attributes().is_empty());
        assert_eq!(bands.rows().positions()[0], 115.5);
    }

    #[test]
    fn spectra_and_predict_are_the_band_table() {
        let model = FuvtModel::fuvt2021(&synthetic_store()).expect("fixture tables");
        let spectra = model.spectra(&4.0).expect("scalar");
        assert!(spectra.lines.is_none());
        assert_eq!(model.predict(&4.0).expect("scalar"), spectra.bands);

        let widths = spectra
            .bands
            .rows()
            .as_bands()
            .and_then(|axis| axis.widths.clone())
            .expect("2021 reports band widths");
        assert!(widths.iter().all(|width| *width == 1.0));
        assert_eq!(spectra.bands.attribute("wavelength units"), Some("nm"));
    }
}
