pub mod input_loader;

pub use input_loader::{load_study_input, StudyInput};
