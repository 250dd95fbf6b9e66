use sqlx::PgPool;

use crate::error::ApiError;
use crate::exercises::models::{CreateExerciseRequest, Exercise, UpdateExerciseRequest};

/// Repository for database operations on exercises
#[derive(Clone)]
pub struct ExerciseRepository {
    pool: PgPool,
}

impl ExerciseRepository {
    /// Create a new ExerciseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new exercise owned by the given author
    pub async fn create(
        &self,
        author_id: i32,
        request: &CreateExerciseRequest,
    ) -> Result<Exercise, ApiError> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (name, description, length, video_url, is_public, author_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, length, video_url, is_public, author_id
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.length)
        .bind(&request.video_url)
        .bind(request.is_public)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exercise)
    }

    /// All public exercises
    pub async fn list_public(&self) -> Result<Vec<Exercise>, ApiError> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, name, description, length, video_url, is_public, author_id
            FROM exercises
            WHERE is_public = true
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(exercises)
    }

    /// All exercises owned by a user, private ones included
    pub async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<Exercise>, ApiError> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, name, description, length, video_url, is_public, author_id
            FROM exercises
            WHERE author_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(exercises)
    }

    /// Fetch an exercise by primary key
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Exercise>, ApiError> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, name, description, length, video_url, is_public, author_id
            FROM exercises
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(exercise)
    }

    /// Replace an exercise's mutable fields
    ///
    /// Returns None when the row vanished between the caller's
    /// existence check and this statement; author_id is never touched.
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateExerciseRequest,
    ) -> Result<Option<Exercise>, ApiError> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            UPDATE exercises
            SET name = $1, description = $2, length = $3, video_url = $4, is_public = $5
            WHERE id = $6
            RETURNING id, name, description, length, video_url, is_public, author_id
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.length)
        .bind(&request.video_url)
        .bind(request.is_public)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(exercise)
    }

    /// Delete an exercise; zero affected rows means it was already gone
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound {
                resource: "Exercise".to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
