//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Writes open their own
//! transaction, commit on success and roll back on every other path.

pub mod todo_repo;

pub use todo_repo::TodoRepo;
