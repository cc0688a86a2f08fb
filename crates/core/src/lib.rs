//! Domain types, errors and validation rules shared by the todo service crates.
//!
//! Nothing in here touches the database or HTTP; `todo-db` and `todo-api`
//! build on these definitions.

pub mod error;
pub mod todo;
pub mod types;
