use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use pathfinder_core::model::{CareerTrack, Question, QuizStart, Task, Week};
use pathfinder_core::time::fixed_clock;
use services::{
    AppServices, Clock, InMemoryPathfinderApi, QuizService, RoadmapService, SessionService,
    TrackService,
};
use storage::repository::{InMemoryRepository, Storage};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::routes::Footer;
use crate::views::components::ToggleTestHandles;
use crate::views::roadmap::EnrollTestHandles;
use crate::views::{
    AllSessionsView, CareerTracksView, DomainSelectionView, QuizView, RoadmapView,
    SessionSummaryByIdView, SessionSummaryView, TrackerView,
};

#[derive(Clone)]
struct TestApp {
    clock: Clock,
    services: AppServices,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn sessions(&self) -> Arc<SessionService> {
        self.services.sessions()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn tracks(&self) -> Arc<TrackService> {
        self.services.tracks()
    }

    fn roadmaps(&self) -> Arc<RoadmapService> {
        self.services.roadmaps()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    DomainSelection,
    Quiz,
    CareerTracks,
    Roadmap(String),
    Tracker,
    Summary(Option<String>),
    AllSessions,
    Footer,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
    toggles: ToggleTestHandles,
    enrolls: EnrollTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.toggles.clone());
    use_context_provider(|| props.enrolls.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::DomainSelection => rsx! { DomainSelectionView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::CareerTracks => rsx! { CareerTracksView {} },
        ViewKind::Roadmap(track_id) => rsx! { RoadmapView { track_id } },
        ViewKind::Tracker => rsx! { TrackerView {} },
        ViewKind::Summary(None) => rsx! { SessionSummaryView {} },
        ViewKind::Summary(Some(session_id)) => rsx! { SessionSummaryByIdView { session_id } },
        ViewKind::AllSessions => rsx! { AllSessionsView {} },
        ViewKind::Footer => rsx! { Footer {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemoryPathfinderApi,
    pub repo: InMemoryRepository,
    pub context: AppContext,
    pub toggles: ToggleTestHandles,
    pub enrolls: EnrollTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Build, then let resources and spawned tasks run to completion.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn toggle_task(&self, week_index: usize, task_index: usize) {
        let toggle = self.toggles.toggle();
        self.dom.in_runtime(|| toggle.call((week_index, task_index)));
    }

    pub fn toggle_enrollment(&self) {
        let enroll = self.enrolls.enroll();
        self.dom.in_runtime(|| enroll.call(()));
    }

    pub fn task_completed(&self, week_index: usize, task_index: usize) -> bool {
        let weeks = self.toggles.weeks();
        self.dom
            .in_runtime(|| weeks.peek()[week_index].tasks[task_index].is_completed)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Backend with two questions, two recommended tracks and a two-week roadmap.
pub fn seeded_backend() -> InMemoryPathfinderApi {
    let mut backend = CareerTrack::new(None, "Backend Engineer");
    backend.avg_salary = "$120k".into();
    backend.skills = vec!["Rust".into(), "SQL".into()];
    backend.tools = vec!["Docker".into()];
    backend.growth = "Staff engineer in 6 years".into();

    InMemoryPathfinderApi::new(fixed_clock())
        .with_questions(vec![
            Question {
                id: 1,
                question: "What is ownership?".into(),
            },
            Question {
                id: 2,
                question: "What is a trait?".into(),
            },
        ])
        .with_recommendations(vec![backend, CareerTrack::new(None, "Data Engineer")])
        .with_roadmap_template(vec![
            Week::new(
                1,
                vec![
                    Task::new("Read the book").with_resource("https://doc.rust-lang.org/book/"),
                    Task::new("Write a CLI"),
                ],
            ),
            Week::new(2, vec![Task::new("Ship a service")]),
        ])
}

/// Start a session and score its quiz. Returns the quiz start and the
/// recommended tracks.
pub async fn score_session(
    api: &InMemoryPathfinderApi,
    repo: &InMemoryRepository,
    domain: &str,
) -> (QuizStart, Vec<CareerTrack>) {
    let services = wire(api, repo);
    let start = services.sessions().start(domain).await.expect("start");
    services
        .quiz()
        .submit(&start, &["One owner".into(), "Shared behaviour".into()])
        .await
        .expect("submit");
    let tracks = services
        .tracks()
        .list_for_current_session()
        .await
        .expect("tracks");
    (start, tracks)
}

/// Score a session and open the roadmap of its first track.
pub async fn complete_journey(
    api: &InMemoryPathfinderApi,
    repo: &InMemoryRepository,
    domain: &str,
) -> (QuizStart, Vec<CareerTrack>) {
    let (start, tracks) = score_session(api, repo, domain).await;
    if let Some(track_id) = tracks[0].id.as_ref() {
        wire(api, repo)
            .roadmaps()
            .load(track_id)
            .await
            .expect("roadmap");
    }
    (start, tracks)
}

fn wire(api: &InMemoryPathfinderApi, repo: &InMemoryRepository) -> AppServices {
    let storage = Storage {
        sessions: Arc::new(repo.clone()),
    };
    AppServices::new(Arc::new(api.clone()), &storage)
}

pub fn setup_view_harness(
    view: ViewKind,
    api: InMemoryPathfinderApi,
    repo: InMemoryRepository,
) -> ViewHarness {
    let services = wire(&api, &repo);
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        clock: fixed_clock(),
        services,
    });
    let context = build_app_context(&app);
    let toggles = ToggleTestHandles::default();
    let enrolls = EnrollTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            context: context.clone(),
            view,
            toggles: toggles.clone(),
            enrolls: enrolls.clone(),
        },
    );

    ViewHarness {
        dom,
        api,
        repo,
        context,
        toggles,
        enrolls,
    }
}
