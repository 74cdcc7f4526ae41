use std::sync::Arc;

use pathfinder_core::model::{QuizStart, pair_answers};
use storage::repository::SessionStore;

use crate::api::PathfinderApi;
use crate::error::ServiceError;

/// Submits quiz answers and interprets the level reply.
#[derive(Clone)]
pub struct QuizService {
    api: Arc<dyn PathfinderApi>,
    store: Arc<dyn SessionStore>,
}

impl QuizService {
    #[must_use]
    pub fn new(api: Arc<dyn PathfinderApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Submit `answers` for `quiz` and return the detected level.
    ///
    /// Answers are checked locally first; nothing is sent unless every
    /// question has a non-blank answer. The session identifier comes from
    /// the store, not from `quiz`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MissingSession` when no identifier is stored.
    /// Returns `ServiceError::Quiz` for blank answers or a reply without a level.
    /// Returns `ServiceError::Api` if the backend rejects the submission.
    pub async fn submit(&self, quiz: &QuizStart, answers: &[String]) -> Result<String, ServiceError> {
        let session_id = self
            .store
            .load_session_id()
            .await?
            .ok_or(ServiceError::MissingSession)?;
        let paired = pair_answers(&quiz.questions, answers)?;

        let prediction = self
            .api
            .submit_answers(&session_id, &quiz.quiz_id, &paired)
            .await
            .map_err(|err| {
                tracing::warn!(%session_id, error = %err, "quiz submission failed");
                err
            })?;
        let level = prediction.into_level()?;
        tracing::info!(%session_id, %level, "quiz scored");
        Ok(level)
    }
}
