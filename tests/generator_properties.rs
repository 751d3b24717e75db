use std::collections::BTreeSet;

use study_packet_server::services::generator::{generate, trim_topic};

fn topics() -> Vec<String> {
    let mut topics: Vec<String> = [
        "Neural Networks",
        "  Linear Algebra\t",
        "",
        "    ",
        "\u{1f}",
        "C++",
        "Quick Review & Pitfalls",
        "Émile Durkheim",
        "🦀 ownership",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    topics.push("x".repeat(500));
    topics
}

#[test]
fn base_is_trim_or_fallback() {
    for topic in topics() {
        let expected = match trim_topic(&topic) {
            "" => "Introduction to Learning",
            trimmed => trimmed,
        };
        assert_eq!(generate(&topic).base, expected);
    }
}

#[test]
fn shape_holds_for_every_topic() {
    for topic in topics() {
        let packet = generate(&topic);
        let labels: BTreeSet<&String> = packet.subtopics.iter().collect();

        assert_eq!(labels.len(), 4);
        assert!(packet.subtopics.iter().all(|s| s.contains(&packet.base)));
        assert_eq!(packet.explanations.keys().collect::<BTreeSet<_>>(), labels);
        assert_eq!(packet.examples.keys().collect::<BTreeSet<_>>(), labels);
        assert_eq!(packet.quizzes.keys().collect::<BTreeSet<_>>(), labels);

        for item in packet.quizzes.values().flatten() {
            assert!(item.answer < item.options.len());
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    for topic in topics() {
        assert_eq!(generate(&topic), generate(&topic));
    }
}
