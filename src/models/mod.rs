pub mod artifact;
pub mod loaders;
pub mod question;

pub use artifact::{ArtifactSelection, Glossary, GlossaryTerm, PdfExtraction, StudySet, Summary};
pub use loaders::{load_study_input, StudyInput};
pub use question::{Difficulty, Question, QuestionId, QuizResult};
