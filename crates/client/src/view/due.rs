//! Due-date urgency labelling for the active list
//!
//! Recomputed against the current date each render, so a task slides from
//! "due later" to "overdue" without any status change.

use chrono::NaiveDate;

/// Anything due within this many days is highlighted as imminent
const CRITICAL_WINDOW_DAYS: i64 = 2;
/// Anything due within this many days still counts as "soon"
const SOON_WINDOW_DAYS: i64 = 5;

/// How close a task is to its due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    /// Days past the due date
    Overdue(i64),
    DueToday,
    /// Due within the soon window; days remaining
    DueSoon(i64),
    /// Days remaining beyond the soon window
    DueLater(i64),
    NoDueDate,
}

/// Display emphasis tiers used by the active list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Normal,
}

impl DueLabel {
    pub fn compute(due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(due) = due_date else {
            return Self::NoDueDate;
        };
        let days = (due - today).num_days();
        if days < 0 {
            Self::Overdue(-days)
        } else if days == 0 {
            Self::DueToday
        } else if days <= SOON_WINDOW_DAYS {
            Self::DueSoon(days)
        } else {
            Self::DueLater(days)
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Overdue(_) | Self::DueToday => Severity::Critical,
            Self::DueSoon(days) if *days <= CRITICAL_WINDOW_DAYS => Severity::Critical,
            Self::DueSoon(_) => Severity::Warning,
            Self::DueLater(_) | Self::NoDueDate => Severity::Normal,
        }
    }

    /// Human-readable text shown next to the task
    pub fn label(&self) -> String {
        match self {
            Self::Overdue(1) => "1 day overdue".to_string(),
            Self::Overdue(days) => format!("{} days overdue", days),
            Self::DueToday => "Due today".to_string(),
            Self::DueSoon(1) => "Due in 1 day".to_string(),
            Self::DueSoon(days) | Self::DueLater(days) => format!("Due in {} days", days),
            Self::NoDueDate => "No due date".to_string(),
        }
    }
}
