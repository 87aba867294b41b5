pub mod annotations;
pub mod error;

pub use annotations::AnnotationStore;
pub use error::StoreError;
