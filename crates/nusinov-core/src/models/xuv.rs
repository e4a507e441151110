//! 1986 and 1992 XUV models.
//!
//! Flux is a per-band power law of the affine index `0.29·F10.7 − 18`, not a
//! linear regression, so these facades bypass the design matrix.

use super::traits::SpectralModel;
use crate::coefficients::schema::{XUV1986_BANDS, XUV1992_BANDS};
use crate::coefficients::{CoefficientStore, TableSchema, columns};
use crate::domain::{ModelVariant, NusinovResult, ProxyInput};
use crate::numerics::{PredictionEngine, xuv_exponent, xuv_index};
use crate::spectra::{
    Attributes, LabeledResult, ProxyAxis, ResultPackager, RowAxis, band_axis_from_table,
};

pub(crate) const VARIABLE: &str = "xuv_flux_spectra";
pub(crate) const COORDINATE: &str = "f107";

#[derive(Debug, Clone)]
pub struct XuvModel {
    variant: ModelVariant,
    reference: Vec<f64>,
    exponents: Vec<f64>,
    rows: RowAxis,
}

impl XuvModel {
    pub fn xuv1986(store: &CoefficientStore) -> NusinovResult<Self> {
        Self::load(store, ModelVariant::Xuv1986, &XUV1986_BANDS)
    }

    pub fn xuv1992(store: &CoefficientStore) -> NusinovResult<Self> {
        Self::load(store, ModelVariant::Xuv1992, &XUV1992_BANDS)
    }

    fn load(
        store: &CoefficientStore,
        variant: ModelVariant,
        schema: &TableSchema,
    ) -> NusinovResult<Self> {
        let table = store.load(schema)?;
        let exponents = table
            .column(columns::UPPER_BOUND)?
            .iter()
            .map(|upper| xuv_exponent(*upper))
            .collect();
        Ok(Self {
            variant,
            reference: table.column(columns::REFERENCE_FLUX)?.to_vec(),
            exponents,
            rows: RowAxis::Bands(band_axis_from_table(&table)?),
        })
    }

    /// Band exponents `d = 1.56/uband + 0.22`, in band order.
    pub fn exponents(&self) -> &[f64] {
        &self.exponents
    }
}

impl SpectralModel for XuvModel {
    fn variant(&self) -> ModelVariant {
        self.variant
    }

    fn bands(&self, proxy: &ProxyInput) -> NusinovResult<LabeledResult> {
        let index = proxy.map(xuv_index);
        let tensor =
            PredictionEngine::evaluate_power_law(&self.reference, &self.exponents, index.values())?;
        ResultPackager::wrap(
            tensor,
            self.rows.clone(),
            ProxyAxis::new(COORDINATE, index.values().to_vec()),
            VARIABLE,
            Attributes::new(),
        )
    }
}
