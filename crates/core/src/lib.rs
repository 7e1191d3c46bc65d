//! Core library for the todo service
//!
//! This crate contains the domain model and persistence, including:
//! - The task model and its status lifecycle
//! - The task repository trait and JSON file store

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
