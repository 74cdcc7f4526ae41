use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::ids::TrackId;

/// One checklist item inside a roadmap week.
///
/// Tasks have no stable id: the backend matches updates by
/// `(week number, task text)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub resource_link: Option<String>,
}

impl Task {
    #[must_use]
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            is_completed: false,
            resource_link: None,
        }
    }

    #[must_use]
    pub fn with_resource(mut self, link: impl Into<String>) -> Self {
        self.resource_link = Some(link.into());
        self
    }

    #[must_use]
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// The resource link, when it parses as an http(s) URL.
    #[must_use]
    pub fn resource_url(&self) -> Option<Url> {
        let raw = self.resource_link.as_deref()?.trim();
        let url = Url::parse(raw).ok()?;
        matches!(url.scheme(), "http" | "https").then_some(url)
    }
}

/// A numbered week of a roadmap. Week numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub week: u32,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Week {
    #[must_use]
    pub fn new(week: u32, tasks: Vec<Task>) -> Self {
        Self { week, tasks }
    }
}

/// A recommended career path and, once generated, its roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTrack {
    #[serde(rename = "_id", alias = "trackId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TrackId>,
    pub title: String,
    #[serde(default)]
    pub avg_salary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub growth: String,
    #[serde(default)]
    pub is_enrolled: bool,
    #[serde(default)]
    pub roadmap: Option<Vec<Week>>,
}

impl CareerTrack {
    #[must_use]
    pub fn new(id: Option<TrackId>, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            avg_salary: String::new(),
            skills: Vec::new(),
            tools: Vec::new(),
            growth: String::new(),
            is_enrolled: false,
            roadmap: None,
        }
    }

    /// Roadmap weeks, empty when none has been generated.
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        self.roadmap.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn has_roadmap(&self) -> bool {
        !self.weeks().is_empty()
    }

    /// Copy of `self` with only the enrollment flag taken from `confirmed`.
    ///
    /// Everything else the client already shows (title, skills, roadmap, ...)
    /// stays as it was.
    #[must_use]
    pub fn with_enrollment_from(&self, confirmed: &CareerTrack) -> CareerTrack {
        CareerTrack {
            is_enrolled: confirmed.is_enrolled,
            ..self.clone()
        }
    }
}
