use std::env;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use pathfinder_core::model::{
    CareerTrack, Domain, LevelPrediction, QuizAnswer, QuizId, QuizStart, SessionDetails,
    SessionId, SessionSummary, TrackId, TrackRoadmap, Week,
};
use pathfinder_core::roadmap::TaskUpdate;

use super::PathfinderApi;
use crate::error::ApiError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if `raw` is not an absolute URL that
    /// can carry a path.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(raw.trim()).map_err(|_| ApiError::InvalidUrl(raw.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(raw.to_string()));
        }
        Ok(Self { base_url })
    }

    /// Read `PATHFINDER_API_URL`, falling back to [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, ApiError> {
        let raw = env::var("PATHFINDER_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self::parse(&raw)
    }
}

#[derive(Clone)]
pub struct HttpPathfinderApi {
    client: Client,
    base_url: Url,
}

impl HttpPathfinderApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.url(segments)?;
        tracing::debug!(method = "GET", path = url.path(), "api request");
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    async fn send<B, T>(&self, method: Method, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        tracing::debug!(method = %method, path = url.path(), "api request");
        let response = self.client.request(method, url).json(body).send().await?;
        decode(response).await
    }
}

/// Backend error body. FastAPI validation errors carry a list here, plain
/// `HTTPException`s a string.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let path = response.url().path().to_string();
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .map(|value| match value {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            });
        tracing::warn!(%status, %path, detail = detail.as_deref(), "api request failed");
        return Err(ApiError::Status { status, detail });
    }
    Ok(response.json::<T>().await?)
}

#[derive(Debug, Serialize)]
struct InitDomainRequest<'a> {
    domain: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitAnswersRequest<'a> {
    session_id: &'a SessionId,
    quiz_id: &'a QuizId,
    answers: &'a [QuizAnswer],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnrollRequest {
    is_enrolled: bool,
}

#[async_trait]
impl PathfinderApi for HttpPathfinderApi {
    async fn init_domain(&self, domain: &Domain) -> Result<QuizStart, ApiError> {
        let body = InitDomainRequest {
            domain: domain.as_str(),
        };
        self.send(Method::POST, &["init-domain"], &body).await
    }

    async fn submit_answers(
        &self,
        session_id: &SessionId,
        quiz_id: &QuizId,
        answers: &[QuizAnswer],
    ) -> Result<LevelPrediction, ApiError> {
        let body = SubmitAnswersRequest {
            session_id,
            quiz_id,
            answers,
        };
        self.send(Method::POST, &["submit-answers"], &body).await
    }

    async fn career_tracks(&self, session_id: &SessionId) -> Result<Vec<CareerTrack>, ApiError> {
        self.get(&["career-tracks", session_id.as_str()]).await
    }

    async fn roadmap(&self, track_id: &TrackId) -> Result<TrackRoadmap, ApiError> {
        self.get(&["roadmap", track_id.as_str()]).await
    }

    async fn tracker(&self, session_id: &SessionId) -> Result<Vec<Week>, ApiError> {
        self.get(&["tracker", session_id.as_str()]).await
    }

    async fn update_task(
        &self,
        session_id: &SessionId,
        update: &TaskUpdate,
    ) -> Result<Week, ApiError> {
        self.send(Method::PATCH, &["tracker", session_id.as_str()], update)
            .await
    }

    async fn session_summary(&self, session_id: &SessionId) -> Result<SessionSummary, ApiError> {
        self.get(&["session-summary", session_id.as_str()]).await
    }

    async fn session_details(&self, session_id: &SessionId) -> Result<SessionDetails, ApiError> {
        self.get(&["session", session_id.as_str()]).await
    }

    async fn sessions(&self) -> Result<Vec<SessionDetails>, ApiError> {
        self.get(&["sessions"]).await
    }

    async fn set_enrollment(
        &self,
        track_id: &TrackId,
        is_enrolled: bool,
    ) -> Result<CareerTrack, ApiError> {
        self.send(
            Method::PATCH,
            &["career-tracks", track_id.as_str(), "enroll"],
            &EnrollRequest { is_enrolled },
        )
        .await
    }
}
