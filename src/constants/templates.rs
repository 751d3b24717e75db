//! Literal study packet text. Every `{topic}` is replaced with the base topic.

pub const TOPIC_PLACEHOLDER: &str = "{topic}";

pub const FALLBACK_TOPIC: &str = "Introduction to Learning";

pub struct QuizTemplate {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: usize,
}

pub struct SectionTemplate {
    pub label: &'static str,
    pub explanation: &'static str,
    pub examples: [&'static str; 3],
    pub quizzes: [QuizTemplate; 2],
}

/// Lesson sections in teaching order.
pub static SECTIONS: [SectionTemplate; 4] = [
    SectionTemplate {
        label: "Foundations of {topic}",
        explanation: "Start with the fundamentals of {topic}. Clarify definitions, the problem {topic} tries to solve, and key terminology.",
        examples: [
            "Define {topic} in one sentence.",
            "List 3 real-world applications where {topic} is useful.",
            "Explain why {topic} matters for learners at your level.",
        ],
        quizzes: [
            QuizTemplate {
                question: "Which best describes the aim of {topic}?",
                options: [
                    "It replaces all prior knowledge",
                    "It provides a framework of key ideas",
                    "It is only a set of formulas",
                    "It has no practical use",
                ],
                answer: 1,
            },
            QuizTemplate {
                question: "A good first step when learning {topic} is to:",
                options: [
                    "Memorize random facts",
                    "Skim advanced papers",
                    "Clarify definitions and goals",
                    "Skip to hard problems",
                ],
                answer: 2,
            },
        ],
    },
    SectionTemplate {
        label: "Core Concepts in {topic}",
        explanation: "Dive into the main building blocks of {topic}. Understand how ideas connect and compare trade-offs.",
        examples: [
            "Describe a core concept of {topic} and give a short example.",
            "Contrast two approaches used in {topic} and when to pick each.",
            "What assumptions are common when studying {topic}?",
        ],
        quizzes: [
            QuizTemplate {
                question: "Core concepts in {topic} should be:",
                options: [
                    "Learned in isolation only",
                    "Connected to each other",
                    "Ignored if difficult",
                    "Left for later",
                ],
                answer: 1,
            },
            QuizTemplate {
                question: "Trade-offs in {topic} help you:",
                options: [
                    "Pick approaches that fit the context",
                    "Avoid making choices",
                    "Always choose the most complex method",
                    "Ignore constraints",
                ],
                answer: 0,
            },
        ],
    },
    SectionTemplate {
        label: "Applying {topic}",
        explanation: "Practice using {topic} in realistic scenarios. Work through step-by-step reasoning and examples.",
        examples: [
            "Walk through a worked example applying {topic} step by step.",
            "Identify edge cases that can break naive use of {topic}.",
            "Create a small challenge exercise involving {topic}.",
        ],
        quizzes: [
            QuizTemplate {
                question: "When applying {topic}, start by:",
                options: [
                    "Writing code immediately",
                    "Understanding the problem and constraints",
                    "Skipping examples",
                    "Only reading theory",
                ],
                answer: 1,
            },
            QuizTemplate {
                question: "Edge cases are important because they:",
                options: [
                    "Never occur",
                    "Make solutions more entertaining",
                    "Reveal hidden assumptions",
                    "Reduce clarity",
                ],
                answer: 2,
            },
        ],
    },
    SectionTemplate {
        label: "Quick Review & Pitfalls in {topic}",
        explanation: "Summarize what you've learned about {topic}, highlight common mistakes, and create a concise review list.",
        examples: [
            "Write a 5-bullet summary of {topic}.",
            "Name two common pitfalls and how to avoid them in {topic}.",
            "Draft 3 flashcards to remember key ideas in {topic}.",
        ],
        // Review questions are topic independent.
        quizzes: [
            QuizTemplate {
                question: "A concise review should:",
                options: [
                    "List key points and pitfalls",
                    "Introduce unrelated topics",
                    "Avoid structure",
                    "Be overly long",
                ],
                answer: 0,
            },
            QuizTemplate {
                question: "Flashcards work best when they:",
                options: [
                    "Ask clear, focused questions",
                    "Contain essays",
                    "Use only images",
                    "Avoid spaced repetition",
                ],
                answer: 0,
            },
        ],
    },
];
