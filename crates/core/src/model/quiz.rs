use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{QuizId, SessionId};

/// Navigation signal the backend sends once a level has been determined.
pub const NEXT_STEP_TRACKS: &str = "career-track-recommendation";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question {index} has no answer")]
    BlankAnswer { index: usize },

    #[error("expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("quiz has no questions")]
    NoQuestions,

    #[error("quiz was accepted but no level was determined")]
    LevelNotDetermined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
}

/// What `/init-domain` hands back: the new session and its quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStart {
    pub session_id: SessionId,
    pub quiz_id: QuizId,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question: String,
    pub answer: String,
}

/// Raw `/submit-answers` response. Either field may be missing on a
/// degraded server reply; see [`LevelPrediction::into_level`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelPrediction {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub next_step: Option<String>,
}

impl LevelPrediction {
    /// The detected level, if the reply carries both a level and the
    /// track-recommendation navigation signal.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::LevelNotDetermined` otherwise.
    pub fn into_level(self) -> Result<String, QuizError> {
        let level = self
            .level
            .filter(|level| !level.trim().is_empty())
            .ok_or(QuizError::LevelNotDetermined)?;
        if self.next_step.as_deref() != Some(NEXT_STEP_TRACKS) {
            return Err(QuizError::LevelNotDetermined);
        }
        Ok(level)
    }
}

/// Pair answers with their questions by position.
///
/// # Errors
///
/// Returns `QuizError::NoQuestions` for an empty quiz,
/// `QuizError::AnswerCountMismatch` when lengths differ, and
/// `QuizError::BlankAnswer` for the first whitespace-only answer.
pub fn pair_answers(questions: &[Question], answers: &[String]) -> Result<Vec<QuizAnswer>, QuizError> {
    if questions.is_empty() {
        return Err(QuizError::NoQuestions);
    }
    if questions.len() != answers.len() {
        return Err(QuizError::AnswerCountMismatch {
            expected: questions.len(),
            actual: answers.len(),
        });
    }
    if let Some(index) = answers.iter().position(|answer| answer.trim().is_empty()) {
        return Err(QuizError::BlankAnswer { index });
    }

    Ok(questions
        .iter()
        .zip(answers)
        .map(|(question, answer)| QuizAnswer {
            question: question.question.clone(),
            answer: answer.clone(),
        })
        .collect())
}
