use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizItem {
    pub q: String,
    pub options: [String; 4],
    pub answer: usize, // zero-based index into options
}

/// One generated study packet. Every map is keyed by exactly the labels in
/// `subtopics`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationResult {
    pub base: String,
    pub subtopics: [String; 4],
    pub explanations: BTreeMap<String, String>,
    pub examples: BTreeMap<String, [String; 3]>,
    pub quizzes: BTreeMap<String, [QuizItem; 2]>,
}
