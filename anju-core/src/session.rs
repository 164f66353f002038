//! Sequencing state for a participant working through the quiz.
//!
//! A [`QuizSession`] is owned by the presentation layer. It tracks the
//! current question and the answers so far; scoring only ever sees the
//! finished [`AnswerMap`].

use log::debug;
use thiserror::Error;

use crate::{AnswerMap, Question};

/// Errors raised when a session is driven out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The question catalogue is empty.
    #[error("the quiz has no questions")]
    NoQuestions,
    /// The chosen text is not offered by the current question.
    #[error("question {q_no} does not offer option {option:?}")]
    UnknownOption {
        /// Current question number.
        q_no: u32,
        /// Rejected option text.
        option: String,
    },
    /// The chosen option index is outside the offered options.
    #[error("question {q_no} has no option #{position}")]
    OptionOutOfRange {
        /// Current question number.
        q_no: u32,
        /// One-based option position requested.
        position: usize,
    },
    /// Moving forward requires an answer to the current question.
    #[error("question {q_no} has not been answered")]
    Unanswered {
        /// Current question number.
        q_no: u32,
    },
}

/// Result of [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question.
    Next,
    /// The last question was answered; the quiz is complete.
    Complete,
}

/// Position of the session within the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// One-based step number.
    pub step: usize,
    /// Total number of questions.
    pub total: usize,
    /// `step / total` as a percentage, rounded half up.
    pub percent: usize,
}

/// Tracks the current question and collected answers.
///
/// # Examples
/// ```
/// use anju_core::{Advance, Question, QuizSession};
///
/// # fn main() -> Result<(), anju_core::SessionError> {
/// let questions = vec![
///     Question::new(1, "날씨", "오늘 날씨는?", ["화창한 날", "비 오는 날"]),
///     Question::new(2, "기분", "지금 기분은?", ["행복", "차분"]),
/// ];
/// let mut session = QuizSession::new(&questions);
/// session.select("화창한 날")?;
/// assert_eq!(session.advance()?, Advance::Next);
/// session.select_position(2)?;
/// assert_eq!(session.advance()?, Advance::Complete);
/// assert_eq!(session.answers().text(2), "차분");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QuizSession<'q> {
    questions: &'q [Question],
    index: usize,
    answers: AnswerMap,
}

impl<'q> QuizSession<'q> {
    /// Start a session at the first question.
    #[must_use]
    pub fn new(questions: &'q [Question]) -> Self {
        Self {
            questions,
            index: 0,
            answers: AnswerMap::new(),
        }
    }

    /// The question currently shown, if any.
    #[must_use]
    pub fn current(&self) -> Option<&'q Question> {
        self.questions.get(self.index)
    }

    fn require_current(&self) -> Result<&'q Question, SessionError> {
        self.current().ok_or(SessionError::NoQuestions)
    }

    /// Whether the current question is the last one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// Whether the current question is the first one.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Record `option` as the answer to the current question.
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownOption`] when the text is not one of
    /// the current question's options, or [`SessionError::NoQuestions`].
    pub fn select(&mut self, option: &str) -> Result<(), SessionError> {
        let question = self.require_current()?;
        if !question.offers(option) {
            return Err(SessionError::UnknownOption {
                q_no: question.q_no,
                option: option.to_owned(),
            });
        }
        self.answers.insert(question.q_no, option);
        Ok(())
    }

    /// Record the option at one-based `position` as the current answer.
    ///
    /// # Errors
    /// Returns [`SessionError::OptionOutOfRange`] when no such option is
    /// offered, or [`SessionError::NoQuestions`].
    pub fn select_position(&mut self, position: usize) -> Result<(), SessionError> {
        let question = self.require_current()?;
        let option = position
            .checked_sub(1)
            .and_then(|offset| question.options().nth(offset))
            .ok_or(SessionError::OptionOutOfRange {
                q_no: question.q_no,
                position,
            })?;
        self.answers.insert(question.q_no, option);
        Ok(())
    }

    /// The answer already recorded for the current question.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.current()
            .and_then(|question| self.answers.get(question.q_no))
            .filter(|text| !text.is_empty())
    }

    /// Move past the current question.
    ///
    /// # Errors
    /// Returns [`SessionError::Unanswered`] when the current question has no
    /// answer, or [`SessionError::NoQuestions`].
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        let question = self.require_current()?;
        if !self.answers.is_answered(question.q_no) {
            return Err(SessionError::Unanswered {
                q_no: question.q_no,
            });
        }
        if self.is_last() {
            debug!("quiz complete with {} answers", self.answers.len());
            return Ok(Advance::Complete);
        }
        self.index += 1;
        Ok(Advance::Next)
    }

    /// Step back one question. Returns `false` at the first question.
    pub const fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Discard all answers and return to the first question.
    pub fn reset(&mut self) {
        self.index = 0;
        self.answers.clear();
    }

    /// Current progress through the quiz.
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "percentages are whole numbers rounded half up"
    )]
    pub const fn progress(&self) -> Progress {
        let total = self.questions.len();
        let step = self.index + 1;
        let percent = if total == 0 {
            0
        } else {
            (step * 200 + total) / (total * 2)
        };
        Progress {
            step,
            total,
            percent,
        }
    }

    /// Answers collected so far.
    #[must_use]
    pub const fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Consume the session, keeping its answers.
    #[must_use]
    pub fn into_answers(self) -> AnswerMap {
        self.answers
    }
}
