//! 1984 and 1992 Nusinov EUV models, driven by the He I 58.4 nm index.
//!
//! Both eras share the `[x, x²]` regression at a `1e13` output scale over 19
//! bands, 16 lines and a 35-band full spectrum. They differ in the background
//! law that derives the He I index from F10.7 on the `*_from_background`
//! entry points.

use super::linear::{LinearTable, Regression};
use super::traits::{SpectralModel, SpectralModelExt, Spectra};
use crate::coefficients::schema::{
    EUVN1984_BANDS, EUVN1984_FULL, EUVN1984_LINES, EUVN1992_BANDS, EUVN1992_FULL,
    EUVN1992_LINES,
};
use crate::coefficients::{CoefficientStore, TableSchema};
use crate::common::constants::EUVN_FLUX_SCALE;
use crate::domain::{ModelVariant, NusinovResult, ProxyInput, ProxySource, validate_proxy};
use crate::numerics::{BackgroundLaw, BasisKind};
use crate::spectra::{
    Attributes, LabeledResult, RowAxis, band_axis_from_table, line_axis_from_table,
};

pub(crate) const REGRESSION: Regression = Regression {
    basis: BasisKind::LinearSquare,
    scale: EUVN_FLUX_SCALE,
    coordinate: "hei",
    variable: "euv_flux_spectra",
};

#[derive(Debug, Clone)]
pub struct EuvnModel {
    variant: ModelVariant,
    law: BackgroundLaw,
    bands: LinearTable,
    lines: LinearTable,
    full: LinearTable,
}

impl EuvnModel {
    pub fn euvn1984(store: &CoefficientStore) -> NusinovResult<Self> {
        Self::load(
            store,
            ModelVariant::Euvn1984,
            BackgroundLaw::SineDecay1984,
            [EUVN1984_BANDS, EUVN1984_LINES, EUVN1984_FULL],
        )
    }

    pub fn euvn1992(store: &CoefficientStore) -> NusinovResult<Self> {
        Self::load(
            store,
            ModelVariant::Euvn1992,
            BackgroundLaw::Fourier1992,
            [EUVN1992_BANDS, EUVN1992_LINES, EUVN1992_FULL],
        )
    }

    fn load(
        store: &CoefficientStore,
        variant: ModelVariant,
        law: BackgroundLaw,
        [bands, lines, full]: [TableSchema; 3],
    ) -> NusinovResult<Self> {
        let bands = store.load(&bands)?;
        let lines = store.load(&lines)?;
        let full = store.load(&full)?;

        let band_rows = RowAxis::Bands(band_axis_from_table(&bands)?);
        let line_rows = RowAxis::Lines(line_axis_from_table(&lines)?);
        let full_rows = RowAxis::Bands(band_axis_from_table(&full)?);

        Ok(Self {
            variant,
            law,
            bands: LinearTable::new(&bands, band_rows, Attributes::new())?,
            lines: LinearTable::new(&lines, line_rows, Attributes::new())?,
            full: LinearTable::new(&full, full_rows, Attributes::new())?,
        })
    }

    pub const fn background_law(&self) -> BackgroundLaw {
        self.law
    }

    /// Background flux `Fb` at solar-cycle phase `t` of a cycle of `period`.
    pub fn background_flux<P>(&self, t: &P, period: f64) -> NusinovResult<ProxyInput>
    where
        P: ProxySource + ?Sized,
    {
        let t = validate_proxy(t)?;
        Ok(t.map(|t| self.law.background_flux(t, period)))
    }

    /// He I index from F10.7 and its background. A scalar operand broadcasts
    /// against a sequence.
    pub fn helium_index<F, B>(&self, f107: &F, fb: &B) -> NusinovResult<ProxyInput>
    where
        F: ProxySource + ?Sized,
        B: ProxySource + ?Sized,
    {
        let f107 = validate_proxy(f107)?;
        let fb = validate_proxy(fb)?;
        f107.zip_with(&fb, |f107, fb| self.law.helium_index(f107, fb))
    }

    pub fn helium_index_at_phase<F, P>(
        &self,
        f107: &F,
        t: &P,
        period: f64,
    ) -> NusinovResult<ProxyInput>
    where
        F: ProxySource + ?Sized,
        P: ProxySource + ?Sized,
    {
        let fb = self.background_flux(t, period)?;
        self.helium_index(f107, &fb)
    }

    pub fn bands_from_background<F, B>(&self, f107: &F, fb: &B) -> NusinovResult<LabeledResult>
    where
        F: ProxySource + ?Sized,
        B: ProxySource + ?Sized,
    {
        self.spectral_bands(&self.helium_index(f107, fb)?)
    }

    pub fn lines_from_background<F, B>(&self, f107: &F, fb: &B) -> NusinovResult<LabeledResult>
    where
        F: ProxySource + ?Sized,
        B: ProxySource + ?Sized,
    {
        self.lines.evaluate(&REGRESSION, &self.helium_index(f107, fb)?)
    }

    pub fn spectra_from_background<F, B>(&self, f107: &F, fb: &B) -> NusinovResult<Spectra>
    where
        F: ProxySource + ?Sized,
        B: ProxySource + ?Sized,
    {
        self.spectra(&self.helium_index(f107, fb)?)
    }

    pub fn predict_from_background<F, B>(&self, f107: &F, fb: &B) -> NusinovResult<LabeledResult>
    where
        F: ProxySource + ?Sized,
        B: ProxySource + ?Sized,
    {
        self.predict(&self.helium_index(f107, fb)?)
    }
}

impl SpectralModel for EuvnModel {
    fn variant(&self) -> ModelVariant {
        self.variant
    }

    fn bands(&self, proxy: &ProxyInput) -> NusinovResult<LabeledResult> {
        self.bands.evaluate(&REGRESSION, proxy)
    }

    fn lines(&self, proxy: &ProxyInput) -> NusinovResult<Option<LabeledResult>> {
        self.lines.evaluate(&REGRESSION, proxy).map(Some)
    }

    fn full(&self, proxy: &ProxyInput) -> NusinovResult<LabeledResult> {
        self.full.evaluate(&REGRESSION, proxy)
    }
}

#[cfg(test)]
mod tests {
    use super::EuvnModel;
    use crate::domain::{NusinovErrorCategory, ProxyInput};
    use crate::models::{SpectralModel, SpectralModelExt};
    use crate::numerics::BackgroundLaw;
    use crate::test_support::synthetic_store;
    use serde_json::json;

    #[test]
    fn predict_returns_the_full_spectrum_per_observation() {
        let model = EuvnModel::euvn1984(&synthetic_store()).expect("fixture tables");

        let single = model.predict(&100.0).expect("scalar");
        assert_eq!(single.shape(), (35, 1));

        let pair = model.predict(&[100.0, 100.0]).expect("sequence");
        assert_eq!(pair.shape(), (35, 2));
        for row in 0..35 {
            assert_eq!(pair.value(row, 0).to_bits(), pair.value(row, 1).to_bits());
            let scalar = single.value(row, 0);
            assert!((pair.value(row, 0) - scalar).abs() <= 1.0e-12 * scalar.abs());
        }
    }

    #[test]
    fn bands_and_lines_use_the_square_basis_at_1e13() {
        let model = EuvnModel::euvn1984(&synthetic_store()).expect("fixture tables");

        let bands = model.spectral_bands(&100).expect("integer scalar");
        assert_eq!(bands.shape(), (19, 1));
        assert_eq!(bands.proxy().name, "hei");
        assert_eq!(bands.variable(), "euv_flux_spectra");
        let expected = 1.0e13 * (0.01 * 100.0 + 1.0e-4 * 100.0 * 100.0);
        assert!((bands.value(0, 0) - expected).abs() <= 1.0e-12 * expected);

        let lines = model
            .spectral_lines(&[50.0, 80.0])
            .expect("sequence")
            .expect("EUV models carry lines");
        assert_eq!(lines.shape(), (16, 2));
        assert_eq!(lines.rows().dimension(), "line_number");
        assert_eq!(lines.proxy().values, [50.0, 80.0]);
    }

    #[test]
    fn background_path_derives_the_helium_index_first() {
        let model = EuvnModel::euvn1984(&synthetic_store()).expect("fixture tables");

        let hei = model
            .helium_index(&150.0, &[100.0, 110.0])
            .expect("scalar broadcasts");
        let expected = [
            BackgroundLaw::SineDecay1984.helium_index(150.0, 100.0),
            BackgroundLaw::SineDecay1984.helium_index(150.0, 110.0),
        ];
        assert_eq!(hei, ProxyInput::Sequence(expected.to_vec()));

        let via_background = model
            .bands_from_background(&150.0, &[100.0, 110.0])
            .expect("background path");
        let direct = model.spectral_bands(&hei).expect("index path");
        assert_eq!(via_background, direct);

        let spectra = model
            .spectra_from_background(&[150.0, 160.0], &100.0)
            .expect("background spectra");
        assert_eq!(spectra.bands.shape(), (19, 2));
        assert_eq!(spectra.lines.map(|lines| lines.shape()), Some((16, 2)));
        assert_eq!(
            model
                .predict_from_background(&150.0, &100.0)
                .expect("background predict")
                .shape(),
            (35, 1)
        );
        assert_eq!(
            model
                .lines_from_background(&150.0, &100.0)
                .expect("background lines")
                .shape(),
            (16, 1)
        );
    }

    #[test]
    fn background_sequences_must_align() {
        let model = EuvnModel::euvn1992(&synthetic_store()).expect("fixture tables");
        let error = model
            .helium_index(&[150.0, 160.0], &[100.0, 110.0, 120.0])
            .expect_err("lengths differ");
        assert_eq!(error.category(), NusinovErrorCategory::InvalidInputType);
        assert_eq!(error.placeholder(), "INPUT.PROXY_BROADCAST");

        let error = model
            .bands_from_background(&json!("150"), &100.0)
            .expect_err("string flux");
        assert_eq!(error.placeholder(), "INPUT.PROXY_TYPE");
    }

    #[test]
    fn eras_select_their_background_law() {
        let store = synthetic_store();
        let model = EuvnModel::euvn1992(&store).expect("fixture tables");
        assert_eq!(model.background_law(), BackgroundLaw::Fourier1992);

        let fb = model.background_flux(&[0.0, 5.5], 11.0).expect("phases");
        assert_eq!(
            fb.values()[0],
            BackgroundLaw::Fourier1992.background_flux(0.0, 11.0)
        );
        let at_phase = model
            .helium_index_at_phase(&200.0, &5.5, 11.0)
            .expect("phase path");
        assert_eq!(
            at_phase,
            ProxyInput::Scalar(BackgroundLaw::Fourier1992.helium_index_at_phase(200.0, 5.5, 11.0))
        );
        assert_eq!(
            EuvnModel::euvn1984(&store)
                .expect("fixture tables")
                .variant()
                .as_str(),
            "euvn1984"
        );
    }
}
