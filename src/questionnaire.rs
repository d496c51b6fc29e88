//! Risk tolerance questionnaire and scoring.
//!
//! The question set is immutable configuration: five questions whose options
//! are worth 1, 3 or 5 points, giving a score range of 5 to 25. Answers are
//! collected into an [`AnswerSheet`] and summed by [`score`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Total questionnaire score.
pub type Score = i64;

/// A selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuizOption {
    /// Display text shown to the user.
    pub text: String,
    /// Points contributed to the score when selected.
    pub value: i32,
}

/// A single questionnaire question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestion {
    /// Stable identifier, used as the key in answer sheets.
    pub id: String,
    /// Question text.
    pub text: String,
    /// Options in display order.
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    fn new(id: &str, text: &str, options: [(&str, i32); 3]) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            options: options
                .into_iter()
                .map(|(text, value)| QuizOption {
                    text: text.to_string(),
                    value,
                })
                .collect(),
        }
    }
}

/// Selected option values keyed by question id.
///
/// Recording an answer for a question that was already answered replaces the
/// earlier value, which is what happens when a user goes back a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<String, i32>);

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `question_id`, returning the value it replaced.
    pub fn record(&mut self, question_id: impl Into<String>, value: i32) -> Option<i32> {
        self.0.insert(question_id.into(), value)
    }

    pub fn get(&self, question_id: &str) -> Option<i32> {
        self.0.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (K, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Sums every recorded answer.
///
/// Values are taken as-is: nothing checks that a value is one of the options
/// declared for its question. Unanswered questions simply contribute nothing.
pub fn score(answers: &AnswerSheet) -> Score {
    answers.iter().map(|(_, value)| Score::from(value)).sum()
}

/// Ordered, immutable set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    questions: Vec<QuizQuestion>,
}

impl QuestionSet {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question ids with no recorded answer, in question order.
    pub fn missing(&self, answers: &AnswerSheet) -> Vec<String> {
        self.ids()
            .filter(|id| !answers.contains(id))
            .map(str::to_string)
            .collect()
    }

    /// Answer ids that do not name any question in this set.
    pub fn unknown(&self, answers: &AnswerSheet) -> Vec<String> {
        answers
            .iter()
            .filter(|(id, _)| self.get(id).is_none())
            .map(|(id, _)| id.to_string())
            .collect()
    }

    /// Lowest and highest achievable score when every question is answered.
    pub fn score_range(&self) -> (Score, Score) {
        self.questions.iter().fold((0, 0), |(lo, hi), q| {
            let min = q.options.iter().map(|o| o.value).min().unwrap_or(0);
            let max = q.options.iter().map(|o| o.value).max().unwrap_or(0);
            (lo + Score::from(min), hi + Score::from(max))
        })
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::new(vec![
            QuizQuestion::new(
                "investment_horizon",
                "How long do you plan to keep this money invested?",
                [
                    ("Less than 3 years", 1),
                    ("3 to 10 years", 3),
                    ("More than 10 years", 5),
                ],
            ),
            QuizQuestion::new(
                "market_drop",
                "Your portfolio loses 20% of its value in a month. What do you do?",
                [
                    ("Sell everything to avoid further losses", 1),
                    ("Hold and wait for a recovery", 3),
                    ("Buy more while prices are low", 5),
                ],
            ),
            QuizQuestion::new(
                "investing_experience",
                "How would you describe your investing experience?",
                [
                    ("None or very little", 1),
                    ("Some experience with funds or stocks", 3),
                    ("Extensive, including volatile assets", 5),
                ],
            ),
            QuizQuestion::new(
                "income_stability",
                "How stable is your current income?",
                [
                    ("Unstable or irregular", 1),
                    ("Fairly stable", 3),
                    ("Very stable with an emergency fund", 5),
                ],
            ),
            QuizQuestion::new(
                "primary_goal",
                "What is your primary investment goal?",
                [
                    ("Preserve what I have", 1),
                    ("Balanced growth and safety", 3),
                    ("Maximum long-term growth", 5),
                ],
            ),
        ])
    }
}
