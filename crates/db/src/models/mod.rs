//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request bodies as sent by clients (every field optional)
//! - Validated inputs that repositories accept
pub mod todo;
