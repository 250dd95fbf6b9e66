use sqlx::PgPool;

use crate::error::ApiError;
use crate::exercises::models::Exercise;
use crate::plans::models::{CreatePlanRequest, TrainingPlan, UpdatePlanRequest};

/// Repository for database operations on training plans and their
/// exercise associations
#[derive(Clone)]
pub struct PlanRepository {
    pool: PgPool,
}

impl PlanRepository {
    /// Create a new PlanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new training plan owned by the given author
    pub async fn create(
        &self,
        author_id: i32,
        request: &CreatePlanRequest,
    ) -> Result<TrainingPlan, ApiError> {
        let plan = sqlx::query_as::<_, TrainingPlan>(
            r#"
            INSERT INTO training_plans (name, description, is_public, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, is_public, author_id
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.is_public)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    /// All public training plans
    pub async fn list_public(&self) -> Result<Vec<TrainingPlan>, ApiError> {
        let plans = sqlx::query_as::<_, TrainingPlan>(
            r#"
            SELECT id, name, description, is_public, author_id
            FROM training_plans
            WHERE is_public = true
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    /// All plans owned by a user, private ones included
    pub async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<TrainingPlan>, ApiError> {
        let plans = sqlx::query_as::<_, TrainingPlan>(
            r#"
            SELECT id, name, description, is_public, author_id
            FROM training_plans
            WHERE author_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    /// Fetch a plan by primary key
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TrainingPlan>, ApiError> {
        let plan = sqlx::query_as::<_, TrainingPlan>(
            r#"
            SELECT id, name, description, is_public, author_id
            FROM training_plans
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    /// Replace a plan's mutable fields
    ///
    /// Returns None when the row vanished between the caller's
    /// existence check and this statement; author_id is never touched.
    pub async fn update(
        &self,
        id: i32,
        request: &UpdatePlanRequest,
    ) -> Result<Option<TrainingPlan>, ApiError> {
        let plan = sqlx::query_as::<_, TrainingPlan>(
            r#"
            UPDATE training_plans
            SET name = $1, description = $2, is_public = $3
            WHERE id = $4
            RETURNING id, name, description, is_public, author_id
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.is_public)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    /// Delete a plan; zero affected rows means it was already gone
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM training_plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound {
                resource: "Training plan".to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }

    /// Exercises attached to a plan through the association table
    pub async fn exercises_for_plan(&self, plan_id: i32) -> Result<Vec<Exercise>, ApiError> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT e.id, e.name, e.description, e.length, e.video_url, e.is_public, e.author_id
            FROM exercises e
            JOIN training_plan_exercises tpe ON e.id = tpe.exercise_id
            WHERE tpe.plan_id = $1
            ORDER BY e.id
            "#,
        )
        .bind(plan_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(exercises)
    }

    /// Whether an exercise is already part of a plan
    pub async fn association_exists(
        &self,
        plan_id: i32,
        exercise_id: i32,
    ) -> Result<bool, ApiError> {
        let exists: Option<bool> = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM training_plan_exercises WHERE plan_id = $1 AND exercise_id = $2)",
        )
        .bind(plan_id)
        .bind(exercise_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.unwrap_or(false))
    }

    /// Insert an association row
    ///
    /// The composite primary key catches a duplicate racing past the
    /// caller's existence check; a foreign-key failure means the
    /// exercise id does not exist.
    pub async fn attach(&self, plan_id: i32, exercise_id: i32) -> Result<(), ApiError> {
        sqlx::query(
            "INSERT INTO training_plan_exercises (plan_id, exercise_id) VALUES ($1, $2)",
        )
        .bind(plan_id)
        .bind(exercise_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return ApiError::Conflict {
                        message: "This exercise is already part of the training plan".to_string(),
                    };
                }
                if db_err.is_foreign_key_violation() {
                    return ApiError::NotFound {
                        resource: "Exercise".to_string(),
                        id: exercise_id.to_string(),
                    };
                }
            }
            ApiError::DatabaseError(e)
        })?;

        Ok(())
    }

    /// Delete an association row; absence is a successful no-op
    pub async fn detach(&self, plan_id: i32, exercise_id: i32) -> Result<(), ApiError> {
        sqlx::query(
            "DELETE FROM training_plan_exercises WHERE plan_id = $1 AND exercise_id = $2",
        )
        .bind(plan_id)
        .bind(exercise_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
