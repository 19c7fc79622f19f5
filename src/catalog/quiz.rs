//! Per-site trivia quizzes and scoring.

use serde::{Deserialize, Serialize};

use crate::types::HeritageSite;

/// Question difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
}

/// Quiz result: correct answers out of questions asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

/// Result bands at the 80% / 60% thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsReview,
}

impl QuizScore {
    /// Score as a percentage, 0.0 for an empty quiz.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }

    pub fn band(&self) -> ScoreBand {
        let percent = self.percent();
        if percent >= 80.0 {
            ScoreBand::Excellent
        } else if percent >= 60.0 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsReview
        }
    }
}

/// Build the five templated questions for a site.
///
/// Questions come from a fixed template instantiated with the site title.
pub fn quiz_for_site(site: &HeritageSite) -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: 1,
            question: format!("In which century was {} primarily constructed?", site.title),
            options: vec![
                "6th-8th Century".to_string(),
                "8th-12th Century".to_string(),
                "12th-16th Century".to_string(),
                "16th-18th Century".to_string(),
            ],
            correct_answer: 1,
            explanation: "The site was primarily constructed during the 8th-12th century period, representing the golden age of Indian temple architecture.".to_string(),
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: 2,
            question: format!("What architectural style is {} primarily known for?", site.title),
            options: vec![
                "Dravidian Architecture".to_string(),
                "Nagara Architecture".to_string(),
                "Indo-Islamic Architecture".to_string(),
                "Vesara Architecture".to_string(),
            ],
            correct_answer: 0,
            explanation: "The site exemplifies the Dravidian architectural style, characterized by its distinctive features and regional influences.".to_string(),
            difficulty: Difficulty::Medium,
        },
        QuizQuestion {
            id: 3,
            question: format!(
                "Which deity or historical figure is {} primarily associated with?",
                site.title
            ),
            options: vec![
                "Lord Shiva".to_string(),
                "Lord Vishnu".to_string(),
                "Goddess Devi".to_string(),
                "Historical Ruler".to_string(),
            ],
            correct_answer: 0,
            explanation: "The site is primarily dedicated to Lord Shiva, reflecting the spiritual and cultural traditions of the region.".to_string(),
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: 4,
            question: format!("What makes {} architecturally unique?", site.title),
            options: vec![
                "Its astronomical alignments".to_string(),
                "Underground chambers".to_string(),
                "Intricate stone carvings".to_string(),
                "All of the above".to_string(),
            ],
            correct_answer: 3,
            explanation: "The site combines multiple unique features including astronomical alignments, underground chambers, and intricate stone carvings, making it architecturally remarkable.".to_string(),
            difficulty: Difficulty::Hard,
        },
        QuizQuestion {
            id: 5,
            question: format!(
                "What is the cultural significance of {} in modern times?",
                site.title
            ),
            options: vec![
                "Tourist destination only".to_string(),
                "Active place of worship and cultural center".to_string(),
                "Museum and monument".to_string(),
                "Research facility".to_string(),
            ],
            correct_answer: 1,
            explanation: "The site continues to serve as an active place of worship and cultural center, maintaining its living heritage status while welcoming visitors.".to_string(),
            difficulty: Difficulty::Medium,
        },
    ]
}

/// Score a set of answers against the questions asked.
///
/// `answers[i]` is the chosen option index for question `i`, or `None` when
/// the question was skipped. Skipped and out-of-range answers score zero;
/// extra trailing answers are ignored.
pub fn score_quiz(answers: &[Option<usize>], questions: &[QuizQuestion]) -> QuizScore {
    let correct = questions
        .iter()
        .zip(answers.iter())
        .filter(|(question, answer)| **answer == Some(question.correct_answer))
        .count();

    QuizScore {
        correct,
        total: questions.len(),
    }
}
