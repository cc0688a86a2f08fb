//! Validation rules for todo items.
//!
//! Every persisted todo has a non-empty, trimmed title. Writes go through
//! [`normalize_title`] before reaching the database; the schema carries a
//! matching `CHECK` constraint.

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in not-found errors and log fields.
pub const ENTITY: &str = "Todo";

pub const TITLE_REQUIRED: &str = "Title is required";
pub const ID_AND_TITLE_REQUIRED: &str = "ID and title are required";
pub const ID_REQUIRED: &str = "ID is required";
pub const NO_ID_PROVIDED: &str = "No ID provided in URL parameter or request body";
pub const INVALID_ID_PARAM: &str = "Invalid ID format in URL parameter";

/// Trim a client-supplied title, rejecting a missing or blank one.
pub fn normalize_title(raw: Option<&str>) -> Result<String, CoreError> {
    match raw.map(str::trim) {
        Some(title) if !title.is_empty() => Ok(title.to_string()),
        _ => Err(CoreError::Validation(TITLE_REQUIRED.into())),
    }
}

/// Parse the `?id=` query parameter of a delete request.
///
/// A missing or blank parameter yields `Ok(None)` so the caller can fall
/// back to the request body. Surrounding whitespace is ignored; anything
/// else that is not a base-10 integer is rejected.
pub fn parse_id_param(raw: Option<&str>) -> Result<Option<DbId>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<DbId>()
            .map(Some)
            .map_err(|_| CoreError::Validation(INVALID_ID_PARAM.into())),
    }
}
