//! Roadmap progress derivation and the optimistic task toggle.
//!
//! A toggle is split into three pure steps so the view can show the new state
//! before the server answers:
//!
//! 1. [`apply_toggle`] flips one task on a copy of the roadmap and returns a
//!    [`TaskToggle`] describing the change.
//! 2. The caller sends [`TaskToggle::update`] to the backend.
//! 3. On success [`accept_task`] installs the week the server echoed back,
//!    keeping local state for the other tasks of that week; on failure
//!    [`revert_toggle`] restores that single task.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Week;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoadmapError {
    #[error("no task at week index {week_index}, task index {task_index}")]
    TaskOutOfRange { week_index: usize, task_index: usize },
}

/// Display status of a week, derived from its tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekStatus {
    Pending,
    Active,
    Completed,
}

impl WeekStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WeekStatus::Pending => "pending",
            WeekStatus::Active => "active",
            WeekStatus::Completed => "completed",
        }
    }
}

/// Completed vs total task count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn of_week(week: &Week) -> Self {
        Self {
            completed: week.tasks.iter().filter(|task| task.is_completed).count(),
            total: week.tasks.len(),
        }
    }

    #[must_use]
    pub fn of_roadmap(weeks: &[Week]) -> Self {
        weeks.iter().map(Self::of_week).fold(Self::default(), |acc, p| Self {
            completed: acc.completed + p.completed,
            total: acc.total + p.total,
        })
    }

    /// Whole-number percentage, 0 for an empty roadmap.
    #[must_use]
    pub fn percent(self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = self.completed * 100 / self.total;
        u8::try_from(pct).unwrap_or(100)
    }

    #[must_use]
    pub fn status(self) -> WeekStatus {
        if self.total == 0 || self.completed == 0 {
            WeekStatus::Pending
        } else if self.completed == self.total {
            WeekStatus::Completed
        } else {
            WeekStatus::Active
        }
    }
}

#[must_use]
pub fn week_status(week: &Week) -> WeekStatus {
    Progress::of_week(week).status()
}

/// Body of `PATCH /tracker/{sessionId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub week: u32,
    pub task: String,
    pub status: bool,
    pub resource_link: Option<String>,
}

/// Record of one optimistic flip, enough to send it and to undo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskToggle {
    pub week_index: usize,
    pub task_index: usize,
    pub week_number: u32,
    pub task: String,
    pub resource_link: Option<String>,
    pub previous: bool,
}

impl TaskToggle {
    #[must_use]
    pub fn next(&self) -> bool {
        !self.previous
    }

    #[must_use]
    pub fn update(&self) -> TaskUpdate {
        TaskUpdate {
            week: self.week_number,
            task: self.task.clone(),
            status: self.next(),
            resource_link: self.resource_link.clone(),
        }
    }
}

/// Flip task `(week_index, task_index)` on a copy of `weeks`.
///
/// # Errors
///
/// Returns `RoadmapError::TaskOutOfRange` if either index is out of bounds.
pub fn apply_toggle(
    weeks: &[Week],
    week_index: usize,
    task_index: usize,
) -> Result<(Vec<Week>, TaskToggle), RoadmapError> {
    let out_of_range = RoadmapError::TaskOutOfRange {
        week_index,
        task_index,
    };
    let week = weeks.get(week_index).ok_or(out_of_range.clone())?;
    let task = week.tasks.get(task_index).ok_or(out_of_range)?;

    let toggle = TaskToggle {
        week_index,
        task_index,
        week_number: week.week,
        task: task.task.clone(),
        resource_link: task.resource_link.clone(),
        previous: task.is_completed,
    };

    let mut next = weeks.to_vec();
    next[week_index].tasks[task_index].is_completed = toggle.next();
    Ok((next, toggle))
}

/// Undo `toggle` on `weeks`, touching only the toggled task.
///
/// The roadmap may have changed since the toggle was applied (other toggles
/// resolved, a week was replaced). The task is located by its recorded
/// indices and must still carry the same week number and text; otherwise the
/// roadmap is returned as is.
#[must_use]
pub fn revert_toggle(weeks: &[Week], toggle: &TaskToggle) -> Vec<Week> {
    let mut next = weeks.to_vec();
    if let Some(task) = next
        .get_mut(toggle.week_index)
        .filter(|week| week.week == toggle.week_number)
        .and_then(|week| week.tasks.get_mut(toggle.task_index))
        .filter(|task| task.task == toggle.task)
    {
        task.is_completed = toggle.previous;
    }
    next
}

/// Replace the week whose number matches `confirmed.week`.
#[must_use]
pub fn accept_week(weeks: &[Week], confirmed: Week) -> Vec<Week> {
    let mut next = weeks.to_vec();
    if let Some(slot) = next.iter_mut().find(|week| week.week == confirmed.week) {
        *slot = confirmed;
    }
    next
}

/// Install the echoed week for an acknowledged toggle.
///
/// Tasks other than the acknowledged one keep their local completion state,
/// matched by text; toggles still waiting on their own reply stay visible.
#[must_use]
pub fn accept_task(weeks: &[Week], mut confirmed: Week, toggle: &TaskToggle) -> Vec<Week> {
    if let Some(local) = weeks.iter().find(|week| week.week == confirmed.week) {
        for task in confirmed
            .tasks
            .iter_mut()
            .filter(|task| task.task != toggle.task)
        {
            if let Some(mine) = local.tasks.iter().find(|mine| mine.task == task.task) {
                task.is_completed = mine.is_completed;
            }
        }
    }
    accept_week(weeks, confirmed)
}
