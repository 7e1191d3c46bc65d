//! Headless view-model logic for the browser client
//!
//! Rendering and styling stay in the frontend; everything the views compute
//! lives here so it can be tested.

mod due;
mod form;
mod list;

pub use due::{DueLabel, Severity};
pub use form::{FormError, TaskForm};
pub use list::{sort_by_due_date, ListSource, TaskListView};
