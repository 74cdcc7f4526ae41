use pathfinder_core::model::Week;
use pathfinder_core::roadmap::{Progress, TaskToggle, WeekStatus, accept_task, revert_toggle};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskVm {
    pub week_index: usize,
    pub task_index: usize,
    pub text: String,
    pub is_completed: bool,
    pub resource_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekVm {
    pub index: usize,
    pub number: u32,
    pub status: WeekStatus,
    pub progress_label: String,
    pub tasks: Vec<TaskVm>,
}

impl WeekVm {
    #[must_use]
    pub fn bullet(&self) -> &'static str {
        match self.status {
            WeekStatus::Completed => "✓",
            WeekStatus::Active | WeekStatus::Pending => "",
        }
    }

    #[must_use]
    pub fn status_class(&self) -> String {
        format!("week-bullet week-{}", self.status.as_str())
    }
}

#[must_use]
pub fn map_weeks(weeks: &[Week]) -> Vec<WeekVm> {
    weeks
        .iter()
        .enumerate()
        .map(|(index, week)| {
            let progress = Progress::of_week(week);
            WeekVm {
                index,
                number: week.week,
                status: progress.status(),
                progress_label: format!("{}/{} tasks", progress.completed, progress.total),
                tasks: week
                    .tasks
                    .iter()
                    .enumerate()
                    .map(|(task_index, task)| TaskVm {
                        week_index: index,
                        task_index,
                        text: task.task.clone(),
                        is_completed: task.is_completed,
                        resource_url: task.resource_url().map(|url| url.to_string()),
                    })
                    .collect(),
            }
        })
        .collect()
}

#[must_use]
pub fn overall_progress_label(weeks: &[Week]) -> String {
    let progress = Progress::of_roadmap(weeks);
    format!(
        "{}/{} tasks completed ({}%)",
        progress.completed,
        progress.total,
        progress.percent()
    )
}

/// Settle an optimistic toggle against the latest roadmap state.
///
/// Success installs the week the server echoed back, keeping other local
/// flips in that week. Failure restores the toggled task only and returns
/// the error to show.
#[must_use]
pub fn resolve_toggle(
    latest: &[Week],
    toggle: &TaskToggle,
    result: Result<Week, ViewError>,
) -> (Vec<Week>, Option<ViewError>) {
    match result {
        Ok(week) => (accept_task(latest, week, toggle), None),
        Err(err) => (revert_toggle(latest, toggle), Some(err)),
    }
}
