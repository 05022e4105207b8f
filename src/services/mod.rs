pub mod study_api;

pub use study_api::{classify_failure, StudyApi};
