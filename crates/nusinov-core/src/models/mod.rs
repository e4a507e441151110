pub mod euvn;
pub mod euvt;
pub mod fuvt;
mod linear;
pub mod registry;
pub mod traits;
pub mod xuv;

pub use euvn::EuvnModel;
pub use euvt::EuvtModel;
pub use fuvt::FuvtModel;
pub use linear::Regression;
pub use registry::{Evaluation, ModelSummary, build_model, describe};
pub use traits::{SpectralModel, SpectralModelExt, Spectra};
pub use xuv::XuvModel;
