pub mod errors;
pub mod models;

pub use errors::RepasoError;
pub use models::VocabularyRecord;
