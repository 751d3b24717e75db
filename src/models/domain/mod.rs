pub mod study_packet;
pub use study_packet::{GenerationResult, QuizItem};
