//! Client library for the todo service
//!
//! The browser-facing half of the application, as reusable logic:
//! - A typed HTTP binding over the REST API
//! - Per-status count aggregation with a periodic refresh
//! - View-model logic: per-status lists, due-date sorting, urgency labels,
//!   and create/edit form validation

pub mod client;
pub mod counts;
pub mod error;
pub mod view;

pub use client::{NewTodo, Todo, TodoClient, TodoPatch};
pub use counts::{CountAggregator, CountSnapshot, CountSource, TodoCounts};
pub use error::ClientError;

pub type Result<T> = std::result::Result<T, ClientError>;
