//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::error::CoreError;
use todo_core::todo::{normalize_title, ID_AND_TITLE_REQUIRED, ID_REQUIRED};
use todo_core::types::DbId;

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub completed: bool,
}

/// Body of `POST /todos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Body of `PUT /todos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Body of `DELETE /todos` when no `?id=` parameter is given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteTodoRequest {
    pub id: Option<DbId>,
}

/// Validated input for inserting a todo.
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub title: String,
    pub completed: bool,
}

/// Validated input for overwriting a todo. Both fields are always written.
#[derive(Debug, Clone)]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}

impl CreateTodoRequest {
    /// Trim the title and apply the `completed = false` default.
    pub fn validate(self) -> Result<CreateTodo, CoreError> {
        Ok(CreateTodo {
            title: normalize_title(self.title.as_deref())?,
            completed: self.completed.unwrap_or(false),
        })
    }
}

impl UpdateTodoRequest {
    /// Returns the target id together with the new field values.
    ///
    /// An omitted `completed` resets the flag to `false`.
    pub fn validate(self) -> Result<(DbId, UpdateTodo), CoreError> {
        let (Some(id), Some(title)) = (self.id, self.title) else {
            return Err(CoreError::Validation(ID_AND_TITLE_REQUIRED.into()));
        };
        let update = UpdateTodo {
            title: normalize_title(Some(&title))?,
            completed: self.completed.unwrap_or(false),
        };
        Ok((id, update))
    }
}

impl DeleteTodoRequest {
    pub fn validate(self) -> Result<DbId, CoreError> {
        self.id
            .ok_or_else(|| CoreError::Validation(ID_REQUIRED.into()))
    }
}
