//! Request handlers.
//!
//! Handlers validate input, delegate to the corresponding repository in
//! `todo_db` and map errors via [`AppError`](crate::error::AppError).

pub mod todo;
