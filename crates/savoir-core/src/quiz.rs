//! Quiz session state: one question at a time, a short review step after
//! each answer, then a final score.

use crate::normalize::answers_match;
use crate::questions::Question;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("answer is blank")]
    BlankAnswer,
    #[error("waiting for the next question")]
    AwaitingNext,
    #[error("quiz is finished")]
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { expected: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Answering,
    Reviewing(Feedback),
    Finished,
}

pub struct QuizSession<'q> {
    questions: &'q [Question],
    current: usize,
    score: usize,
    phase: Phase,
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q [Question]) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            phase: Self::initial_phase(questions),
        }
    }

    fn initial_phase(questions: &[Question]) -> Phase {
        if questions.is_empty() {
            Phase::Finished
        } else {
            Phase::Answering
        }
    }

    /// Check `input` against the current question and enter review.
    pub fn submit(&mut self, input: &str) -> Result<Feedback, QuizError> {
        match self.phase {
            Phase::Reviewing(_) => return Err(QuizError::AwaitingNext),
            Phase::Finished => return Err(QuizError::Finished),
            Phase::Answering => {}
        }
        if input.trim().is_empty() {
            return Err(QuizError::BlankAnswer);
        }
        let question = &self.questions[self.current];
        let feedback = if answers_match(question.answer, input) {
            self.score += 1;
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                expected: question.answer,
            }
        };
        log::debug!(
            "[quiz] q{} {:?} score={}",
            self.current + 1,
            feedback,
            self.score
        );
        self.phase = Phase::Reviewing(feedback);
        Ok(feedback)
    }

    /// Leave review: next question, or finish after the last one. No-op
    /// outside review.
    pub fn advance(&mut self) {
        if !matches!(self.phase, Phase::Reviewing(_)) {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.phase = Phase::Answering;
        } else {
            self.phase = Phase::Finished;
            log::info!("[quiz] finished {}/{}", self.score, self.questions.len());
        }
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.score = 0;
        self.phase = Self::initial_phase(self.questions);
    }

    /// The question on screen, `None` once finished.
    pub fn current(&self) -> Option<&'q Question> {
        match self.phase {
            Phase::Finished => None,
            _ => self.questions.get(self.current),
        }
    }

    /// 1-based question number and total.
    pub fn progress(&self) -> (usize, usize) {
        (
            (self.current + 1).min(self.questions.len()),
            self.questions.len(),
        )
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}
