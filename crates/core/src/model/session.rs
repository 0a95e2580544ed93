use thiserror::Error;

use crate::model::TopicName;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no question has been loaded yet")]
    NoQuestion,
}

/// Running tally of graded answers since the last topic switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    correct: u32,
    incorrect: u32,
}

impl Score {
    #[must_use]
    pub fn correct(self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn answered(self) -> u32 {
        self.correct.saturating_add(self.incorrect)
    }

    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct = self.correct.saturating_add(1);
        } else {
            self.incorrect = self.incorrect.saturating_add(1);
        }
    }
}

/// The topic being practiced, the question on screen and the score so far.
///
/// A session starts with no question and a zeroed score. Selecting a different
/// topic replaces the whole session rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    topic: TopicName,
    question: Option<String>,
    score: Score,
}

impl QuizSession {
    #[must_use]
    pub fn new(topic: TopicName) -> Self {
        Self {
            topic,
            question: None,
            score: Score::default(),
        }
    }

    #[must_use]
    pub fn topic(&self) -> &TopicName {
        &self.topic
    }

    #[must_use]
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = Some(question.into());
    }

    /// Record the grade for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestion` if no question is loaded.
    pub fn record_answer(&mut self, correct: bool) -> Result<Score, SessionError> {
        if self.question.is_none() {
            return Err(SessionError::NoQuestion);
        }
        self.score.record(correct);
        Ok(self.score)
    }
}
