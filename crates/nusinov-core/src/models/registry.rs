//! Variant-name lookup and static descriptions of every model.

use super::euvn::{self, EuvnModel};
use super::euvt::{self, EuvtModel};
use super::fuvt::{self, FuvtModel};
use super::traits::SpectralModel;
use super::xuv::{self, XuvModel};
use crate::coefficients::{CoefficientStore, TableSchema, schemas_for_variant};
use crate::domain::{ModelFamily, ModelVariant, NusinovResult};
use crate::numerics::BasisKind;

pub fn build_model(
    variant: ModelVariant,
    store: &CoefficientStore,
) -> NusinovResult<Box<dyn SpectralModel>> {
    tracing::debug!(variant = variant.as_str(), "building model facade");
    Ok(match variant {
        ModelVariant::Euvn1984 => Box::new(EuvnModel::euvn1984(store)?),
        ModelVariant::Euvn1992 => Box::new(EuvnModel::euvn1992(store)?),
        ModelVariant::Euvt2021 => Box::new(EuvtModel::euvt2021(store)?),
        ModelVariant::Fuvt2019 => Box::new(FuvtModel::fuvt2019(store)?),
        ModelVariant::Fuvt2021 => Box::new(FuvtModel::fuvt2021(store)?),
        ModelVariant::Xuv1986 => Box::new(XuvModel::xuv1986(store)?),
        ModelVariant::Xuv1992 => Box::new(XuvModel::xuv1992(store)?),
    })
}

/// How a variant turns its proxy into flux.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Linear { basis: BasisKind, scale: f64 },
    PowerLaw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelSummary {
    pub variant: ModelVariant,
    pub description: &'static str,
    pub resources: &'static [TableSchema],
    pub evaluation: Evaluation,
    pub coordinate: &'static str,
    pub variable: &'static str,
}

pub fn describe(variant: ModelVariant) -> ModelSummary {
    let regression = match variant.family() {
        ModelFamily::Euvn => Some(euvn::REGRESSION),
        ModelFamily::Euvt => Some(euvt::REGRESSION),
        ModelFamily::Fuvt => Some(fuvt::REGRESSION),
        ModelFamily::Xuv => None,
    };
    let (evaluation, coordinate, variable) = match regression {
        Some(regression) => (
            Evaluation::Linear {
                basis: regression.basis,
                scale: regression.scale,
            },
            regression.coordinate,
            regression.variable,
        ),
        None => (Evaluation::PowerLaw, xuv::COORDINATE, xuv::VARIABLE),
    };

    ModelSummary {
        variant,
        description: variant.description(),
        resources: schemas_for_variant(variant),
        evaluation,
        coordinate,
        variable,
    }
}
