//! Repository for the `todos` table.

use sqlx::{PgConnection, PgPool};
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, completed";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List all todos ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id ASC");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Find a todo by its id.
    ///
    /// No route reads a single todo; this backs the persistence tests.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new todo, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO todos (title, completed)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(input.completed)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(todo)
    }

    /// Overwrite the title and completed flag of a todo.
    ///
    /// Returns `None` (after rolling back) if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if Self::lock_by_id(&mut *tx, id).await?.is_none() {
            tracing::debug!(todo_id = id, "Todo not found for update, rolling back");
            tx.rollback().await?;
            return Ok(None);
        }

        let query = format!(
            "UPDATE todos SET title = $2, completed = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.completed)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(todo))
    }

    /// Permanently delete a todo by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if Self::lock_by_id(&mut *tx, id).await?.is_none() {
            tracing::debug!(todo_id = id, "Todo not found for delete, rolling back");
            tx.rollback().await?;
            return Ok(false);
        }

        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all todos. Used by tests to check that failed writes leave the
    /// table untouched.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Read a todo and hold a row lock until the surrounding transaction ends.
    async fn lock_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
