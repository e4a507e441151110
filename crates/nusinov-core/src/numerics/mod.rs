pub mod background;
pub mod design;
pub mod engine;

pub use background::BackgroundLaw;
pub use design::{BasisKind, DesignMatrix, DesignMatrixBuilder};
pub use engine::{PredictionEngine, ResultTensor, ShapeError, xuv_exponent, xuv_index};
