use pathfinder_core::model::CareerTrack;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackCardVm {
    pub id: Option<String>,
    pub title: String,
    pub avg_salary: String,
    pub skills: String,
    pub tools: String,
    pub growth: String,
    pub is_enrolled: bool,
}

impl From<&CareerTrack> for TrackCardVm {
    fn from(track: &CareerTrack) -> Self {
        Self {
            id: track.id.as_ref().map(|id| id.as_str().to_string()),
            title: track.title.clone(),
            avg_salary: track.avg_salary.clone(),
            skills: track.skills.join(", "),
            tools: track.tools.join(", "),
            growth: track.growth.clone(),
            is_enrolled: track.is_enrolled,
        }
    }
}

#[must_use]
pub fn map_track_cards(tracks: &[CareerTrack]) -> Vec<TrackCardVm> {
    tracks.iter().map(TrackCardVm::from).collect()
}

#[must_use]
pub fn enrollment_badge(is_enrolled: bool) -> &'static str {
    if is_enrolled { "Enrolled" } else { "Not enrolled" }
}

#[must_use]
pub fn enrollment_action(is_enrolled: bool) -> &'static str {
    if is_enrolled {
        "Leave this track"
    } else {
        "Enroll in this track"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder_core::model::TrackId;

    #[test]
    fn joins_lists_for_display() {
        let mut track = CareerTrack::new(Some(TrackId::new("t1")), "Data Engineer");
        track.skills = vec!["SQL".into(), "Python".into()];
        track.tools = vec!["Airflow".into()];
        let card = TrackCardVm::from(&track);
        assert_eq!(card.id.as_deref(), Some("t1"));
        assert_eq!(card.skills, "SQL, Python");
        assert_eq!(card.tools, "Airflow");
        assert!(!card.is_enrolled);
    }
}
