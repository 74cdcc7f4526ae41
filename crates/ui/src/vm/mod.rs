mod actions;
mod roadmap_vm;
mod session_vm;
mod time_fmt;
mod track_vm;

pub use actions::{start_journey, submit_quiz, sync_task, toggle_enrollment};
pub use roadmap_vm::{TaskVm, WeekVm, map_weeks, overall_progress_label, resolve_toggle};
pub use session_vm::{
    PREVIEW_TASKS, PREVIEW_WEEKS, SessionCardVm, SummaryVm, TrackPreviewVm, WeekPreviewVm,
    map_session_cards,
};
pub use time_fmt::format_datetime;
pub use track_vm::{TrackCardVm, enrollment_action, enrollment_badge, map_track_cards};
