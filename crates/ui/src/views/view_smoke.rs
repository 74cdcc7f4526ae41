use reqwest::StatusCode;

use pathfinder_core::model::SessionId;
use services::Endpoint;
use storage::repository::{InMemoryRepository, SessionStore};

use super::test_harness::{
    ViewKind, complete_journey, score_session, seeded_backend, setup_view_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn domain_selection_renders_form() {
    let mut harness = setup_view_harness(
        ViewKind::DomainSelection,
        seeded_backend(),
        InMemoryRepository::new(),
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Domain of Interest"));
    assert!(html.contains("Start Quiz"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_without_pending_start_shows_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Quiz, seeded_backend(), InMemoryRepository::new());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("No quiz questions found."));
    assert!(!html.contains("Submit Answers"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_renders_pending_questions() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    let (start, _) = complete_journey(&api, &repo, "Rust Systems").await;

    let mut harness = setup_view_harness(ViewKind::Quiz, api, repo);
    harness.context.set_pending_quiz(Some(start));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("What is ownership?"));
    assert!(html.contains("What is a trait?"));
    assert!(html.contains("Submit Answers"));
}

#[tokio::test(flavor = "current_thread")]
async fn career_tracks_without_session_asks_to_start() {
    let mut harness = setup_view_harness(
        ViewKind::CareerTracks,
        seeded_backend(),
        InMemoryRepository::new(),
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Session not found. Please start from the Domain Selection."));
    assert!(harness.api.calls().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn career_tracks_list_recommendations() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    complete_journey(&api, &repo, "Rust Systems").await;

    let mut harness = setup_view_harness(ViewKind::CareerTracks, api, repo);
    harness.context.set_detected_level(Some("Intermediate".into()));
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Recommended Career Tracks"));
    assert!(html.contains("Your detected level: Intermediate"));
    assert!(html.contains("Backend Engineer"));
    assert!(html.contains("Data Engineer"));
    assert!(html.contains("Rust, SQL"));
    assert!(html.contains("View Roadmap"));
}

#[tokio::test(flavor = "current_thread")]
async fn career_tracks_surface_server_detail() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    complete_journey(&api, &repo, "Rust Systems").await;
    api.fail(
        Endpoint::CareerTracks,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Recommendation engine offline.",
    );

    let mut harness = setup_view_harness(ViewKind::CareerTracks, api, repo);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Failed to load career tracks. Recommendation engine offline."));
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_renders_weeks_and_enrollment() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    let (_, tracks) = complete_journey(&api, &repo, "Rust Systems").await;
    let track_id = tracks[0].id.clone().expect("track id");

    let mut harness = setup_view_harness(ViewKind::Roadmap(track_id.to_string()), api, repo);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Your Personalized Roadmap"));
    assert!(html.contains("Backend Engineer"));
    assert!(html.contains("Week 1"));
    assert!(html.contains("Week 2"));
    assert!(html.contains("Read the book"));
    assert!(html.contains("https://doc.rust-lang.org/book/"));
    assert!(html.contains("0/3 tasks completed (0%)"));
    assert!(html.contains("Not enrolled"));
    assert!(html.contains("Enroll in this track"));
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_without_weeks_shows_empty_state() {
    let api = seeded_backend().with_roadmap_template(Vec::new());
    let repo = InMemoryRepository::new();
    let (_, tracks) = complete_journey(&api, &repo, "Rust Systems").await;
    let track_id = tracks[1].id.clone().expect("track id");

    let mut harness = setup_view_harness(ViewKind::Roadmap(track_id.to_string()), api, repo);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("No roadmap generated for this track yet."));
    assert!(html.contains("Data Engineer"));
    assert!(html.contains("Not enrolled"));
    assert!(html.contains("Enroll in this track"));
}

#[tokio::test(flavor = "current_thread")]
async fn enrollment_toggles_on_a_track_without_roadmap() {
    let api = seeded_backend().with_roadmap_template(Vec::new());
    let repo = InMemoryRepository::new();
    let (_, tracks) = score_session(&api, &repo, "Rust Systems").await;
    let track_id = tracks[1].id.clone().expect("track id");

    let mut harness = setup_view_harness(ViewKind::Roadmap(track_id.to_string()), api, repo);
    harness.rebuild();
    harness.settle().await;

    harness.toggle_enrollment();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Leave this track"));
    assert!(!html.contains("Not enrolled"));
    assert!(html.contains("Data Engineer"));
    assert!(html.contains("No roadmap generated for this track yet."));
    let stored = harness
        .api
        .session(&SessionId::new("session-1"))
        .expect("session");
    assert!(stored.career_tracks[1].is_enrolled);
    assert!(!stored.career_tracks[0].is_enrolled);
}

#[tokio::test(flavor = "current_thread")]
async fn failed_enrollment_keeps_prior_badge() {
    let api = seeded_backend().with_roadmap_template(Vec::new());
    let repo = InMemoryRepository::new();
    let (_, tracks) = score_session(&api, &repo, "Rust Systems").await;
    let track_id = tracks[1].id.clone().expect("track id");
    api.fail(
        Endpoint::Enrollment,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Enrollment store offline.",
    );

    let mut harness = setup_view_harness(ViewKind::Roadmap(track_id.to_string()), api, repo);
    harness.rebuild();
    harness.settle().await;

    harness.toggle_enrollment();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Not enrolled"));
    assert!(html.contains("Enroll in this track"));
    assert!(html.contains("Failed to update enrollment. Enrollment store offline."));
}

#[tokio::test(flavor = "current_thread")]
async fn enrollment_ignores_repeat_while_in_flight() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    let (_, tracks) = complete_journey(&api, &repo, "Rust Systems").await;
    let track_id = tracks[0].id.clone().expect("track id");

    let mut harness = setup_view_harness(ViewKind::Roadmap(track_id.to_string()), api, repo);
    harness.rebuild();
    harness.settle().await;

    harness.toggle_enrollment();
    harness.toggle_enrollment();
    harness.settle().await;

    let sent = harness
        .api
        .calls()
        .into_iter()
        .filter(|call| *call == Endpoint::Enrollment)
        .count();
    assert_eq!(sent, 1);
    assert!(harness.render().contains("Leave this track"));
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_with_blank_track_id_reports_it() {
    let mut harness = setup_view_harness(
        ViewKind::Roadmap("  ".into()),
        seeded_backend(),
        InMemoryRepository::new(),
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("No track ID provided for roadmap."));
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_toggle_without_session_changes_nothing() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    let (_, tracks) = complete_journey(&api, &repo, "Rust Systems").await;
    let track_id = tracks[0].id.clone().expect("track id");
    repo.clear_session_id().await.expect("clear");

    let mut harness = setup_view_harness(ViewKind::Roadmap(track_id.to_string()), api, repo);
    harness.rebuild();
    harness.settle().await;

    harness.toggle_task(0, 0);
    harness.settle().await;

    assert!(!harness.task_completed(0, 0));
    assert!(!harness.api.calls().contains(&Endpoint::UpdateTask));
    let html = harness.render();
    assert!(html.contains("Session not found. Please start from the Domain Selection."));
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_toggle_is_persisted() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    complete_journey(&api, &repo, "Rust Systems").await;

    let mut harness = setup_view_harness(ViewKind::Tracker, api, repo);
    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains("Progress Tracker for: Backend Engineer"));

    harness.toggle_task(0, 1);
    assert!(harness.task_completed(0, 1));
    harness.settle().await;

    assert!(harness.task_completed(0, 1));
    let stored = harness
        .api
        .session(&SessionId::new("session-1"))
        .expect("session");
    let track = stored.active_track().expect("active track");
    assert!(track.weeks()[0].tasks[1].is_completed);
    assert!(harness.render().contains("1/3 tasks completed (33%)"));
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_failed_toggle_rolls_back() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    complete_journey(&api, &repo, "Rust Systems").await;
    api.fail(
        Endpoint::UpdateTask,
        StatusCode::NOT_FOUND,
        "Task or week not found in the roadmap.",
    );

    let mut harness = setup_view_harness(ViewKind::Tracker, api, repo);
    harness.rebuild();
    harness.settle().await;

    harness.toggle_task(0, 0);
    assert!(harness.task_completed(0, 0), "flip is visible before the reply");
    harness.settle().await;

    assert!(!harness.task_completed(0, 0));
    let html = harness.render();
    assert!(html.contains("Failed to update task. Task or week not found in the roadmap."));
    assert!(html.contains("0/3 tasks completed (0%)"));
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_without_roadmap_offers_new_journey() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    score_session(&api, &repo, "Rust Systems").await;

    let mut harness = setup_view_harness(ViewKind::Tracker, api, repo);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("No active roadmap found."));
    assert!(html.contains("Start New Journey"));
}

#[tokio::test(flavor = "current_thread")]
async fn summary_route_parameter_wins_over_stored_session() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    complete_journey(&api, &repo, "Rust Systems").await;
    complete_journey(&api, &repo, "Data Science").await;

    let mut harness = setup_view_harness(
        ViewKind::Summary(Some("session-1".into())),
        api,
        repo,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Full Session Summary"));
    assert!(html.contains("Rust Systems"));
    assert!(!html.contains("Data Science"));
}

#[tokio::test(flavor = "current_thread")]
async fn summary_uses_stored_session() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    complete_journey(&api, &repo, "Rust Systems").await;
    complete_journey(&api, &repo, "Data Science").await;

    let mut harness = setup_view_harness(ViewKind::Summary(None), api, repo);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Data Science"));
    assert!(html.contains("Intermediate"));
    assert!(html.contains("Backend Engineer"));
    assert!(html.contains("Start Another Journey"));
}

#[tokio::test(flavor = "current_thread")]
async fn summary_without_session_asks_to_start() {
    let mut harness = setup_view_harness(
        ViewKind::Summary(None),
        seeded_backend(),
        InMemoryRepository::new(),
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Session not found. Please start from the Domain Selection."));
}

#[tokio::test(flavor = "current_thread")]
async fn all_sessions_list_newest_first() {
    let api = seeded_backend();
    let repo = InMemoryRepository::new();
    complete_journey(&api, &repo, "Rust Systems").await;
    complete_journey(&api, &repo, "Data Science").await;

    let mut harness = setup_view_harness(ViewKind::AllSessions, api, repo);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("All Previous Sessions"));
    let newer = html.find("Data Science").expect("newer session");
    let older = html.find("Rust Systems").expect("older session");
    assert!(newer < older);
    assert_eq!(html.matches("View Summary").count(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn all_sessions_empty_state() {
    let mut harness = setup_view_harness(
        ViewKind::AllSessions,
        seeded_backend(),
        InMemoryRepository::new(),
    );
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("No sessions found."));
}

#[tokio::test(flavor = "current_thread")]
async fn footer_shows_clock_year() {
    let mut harness = setup_view_harness(ViewKind::Footer, seeded_backend(), InMemoryRepository::new());
    harness.rebuild();

    assert!(harness.render().contains("© 2023 Career Pathfinder"));
}
