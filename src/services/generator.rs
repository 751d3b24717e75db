use std::collections::BTreeMap;

use crate::{
    constants::templates::{QuizTemplate, FALLBACK_TOPIC, SECTIONS, TOPIC_PLACEHOLDER},
    models::domain::{GenerationResult, QuizItem},
};

/// Builds the study packet for `topic`. Pure and infallible: blank input
/// falls back to [`FALLBACK_TOPIC`].
pub fn generate(topic: &str) -> GenerationResult {
    let trimmed = trim_topic(topic);
    let base = if trimmed.is_empty() {
        FALLBACK_TOPIC
    } else {
        trimmed
    };

    let subtopics = SECTIONS.each_ref().map(|section| fill(section.label, base));

    let mut explanations = BTreeMap::new();
    let mut examples = BTreeMap::new();
    let mut quizzes = BTreeMap::new();

    for (label, section) in subtopics.iter().zip(SECTIONS.iter()) {
        explanations.insert(label.clone(), fill(section.explanation, base));
        examples.insert(
            label.clone(),
            section.examples.map(|example| fill(example, base)),
        );
        quizzes.insert(
            label.clone(),
            section.quizzes.each_ref().map(|quiz| quiz_item(quiz, base)),
        );
    }

    GenerationResult {
        base: base.to_string(),
        subtopics,
        explanations,
        examples,
        quizzes,
    }
}

/// Trims Unicode whitespace plus the ASCII separators U+001C..=U+001F.
pub fn trim_topic(topic: &str) -> &str {
    topic.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

fn fill(template: &str, base: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, base)
}

fn quiz_item(template: &QuizTemplate, base: &str) -> QuizItem {
    QuizItem {
        q: fill(template.question, base),
        options: template.options.map(str::to_string),
        answer: template.answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const TOPICS: &[&str] = &[
        "Neural Networks",
        "  padded  ",
        "",
        "   ",
        "\t\n",
        "{topic}",
        "Quick Review & Pitfalls",
        "こんにちは",
        "a",
    ];

    #[test]
    fn test_base_is_trimmed_topic() {
        assert_eq!(generate("  Neural Networks  ").base, "Neural Networks");
        assert_eq!(generate("Graph   Theory").base, "Graph   Theory");
    }

    #[test]
    fn test_trim_topic_strips_separator_controls() {
        assert_eq!(trim_topic("\u{1c}\u{1d} Rust \u{1e}\u{1f}"), "Rust");
        assert_eq!(trim_topic("\u{2003}Rust\u{a0}"), "Rust");
        assert_eq!(trim_topic("Ru\u{1f}st"), "Ru\u{1f}st");
        assert_eq!(trim_topic("\u{1b}Rust"), "\u{1b}Rust");
    }

    #[test]
    fn test_blank_topic_falls_back() {
        for topic in ["", " ", "\t\n  ", "\u{1f}", "\u{1c} \u{1d}"] {
            assert_eq!(generate(topic).base, "Introduction to Learning");
        }
    }

    #[test]
    fn test_subtopic_labels_in_order() {
        let result = generate("Neural Networks");
        assert_eq!(
            result.subtopics,
            [
                "Foundations of Neural Networks",
                "Core Concepts in Neural Networks",
                "Applying Neural Networks",
                "Quick Review & Pitfalls in Neural Networks",
            ]
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        for topic in TOPICS {
            assert_eq!(generate(topic), generate(topic));
            assert_eq!(
                serde_json::to_string(&generate(topic)).unwrap(),
                serde_json::to_string(&generate(topic)).unwrap()
            );
        }
    }

    #[test]
    fn test_every_subtopic_contains_base() {
        for topic in TOPICS {
            let result = generate(topic);
            for label in &result.subtopics {
                assert!(label.contains(&result.base), "{label:?} lacks {:?}", result.base);
            }
        }
    }

    #[test]
    fn test_subtopics_are_unique() {
        for topic in TOPICS {
            let result = generate(topic);
            let unique: BTreeSet<_> = result.subtopics.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn test_map_keys_match_subtopics() {
        for topic in TOPICS {
            let result = generate(topic);
            let labels: BTreeSet<&String> = result.subtopics.iter().collect();
            assert_eq!(result.explanations.keys().collect::<BTreeSet<_>>(), labels);
            assert_eq!(result.examples.keys().collect::<BTreeSet<_>>(), labels);
            assert_eq!(result.quizzes.keys().collect::<BTreeSet<_>>(), labels);
        }
    }

    #[test]
    fn test_quiz_answers_are_in_range() {
        for topic in TOPICS {
            for item in generate(topic).quizzes.values().flatten() {
                assert_eq!(item.options.len(), 4);
                assert!(item.answer < item.options.len());
            }
        }
    }

    #[test]
    fn test_quiz_options_do_not_depend_on_topic() {
        let a = generate("Chemistry");
        let b = generate("Music Theory");
        for (qa, qb) in a.quizzes.values().zip(b.quizzes.values()) {
            for (ia, ib) in qa.iter().zip(qb.iter()) {
                assert_eq!(ia.options, ib.options);
                assert_eq!(ia.answer, ib.answer);
            }
        }
    }

    #[test]
    fn test_review_questions_are_fixed_text() {
        let result = generate("Chemistry");
        let review = &result.quizzes[&result.subtopics[3]];
        assert_eq!(review[0].q, "A concise review should:");
        assert_eq!(review[1].q, "Flashcards work best when they:");
    }

    #[test]
    fn test_known_answers_for_core_concepts() {
        let result = generate("Neural Networks");
        let core = &result.quizzes[&result.subtopics[1]];
        assert_eq!(core[0].q, "Core concepts in Neural Networks should be:");
        assert_eq!(core[0].answer, 1);
        assert_eq!(core[1].answer, 0);
        assert_eq!(core[1].options[0], "Pick approaches that fit the context");
    }

    #[test]
    fn test_explanation_substitutes_every_occurrence() {
        let result = generate("Rust");
        assert_eq!(
            result.explanations[&result.subtopics[0]],
            "Start with the fundamentals of Rust. Clarify definitions, the problem Rust tries to solve, and key terminology."
        );
    }

    #[test]
    fn test_placeholder_in_topic_is_not_expanded_again() {
        let result = generate("{topic}");
        assert_eq!(result.base, "{topic}");
        assert_eq!(result.subtopics[2], "Applying {topic}");
        assert_eq!(
            result.examples[&result.subtopics[3]][0],
            "Write a 5-bullet summary of {topic}."
        );
    }

    #[test]
    fn test_examples_for_applying_section() {
        let result = generate("SQL");
        assert_eq!(
            result.examples[&result.subtopics[2]],
            [
                "Walk through a worked example applying SQL step by step.",
                "Identify edge cases that can break naive use of SQL.",
                "Create a small challenge exercise involving SQL.",
            ]
        );
    }
}
