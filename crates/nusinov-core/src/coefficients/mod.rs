pub mod schema;
pub mod source;
pub mod store;
pub mod table;

pub use schema::{TableSchema, columns, schemas_for_variant};
pub use source::{CoefficientSource, DirectorySource, InMemorySource};
pub use store::CoefficientStore;
pub use table::{CoefficientDocument, CoefficientTable};
