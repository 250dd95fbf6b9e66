mod access;
mod auth;
mod config;
mod db;
mod error;
mod exercises;
mod plans;

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use auth::{
    repository::UserRepository, service::AuthService, token::TokenService,
};
use config::Config;
use error::ApiError;
use exercises::{repository::ExerciseRepository, service::ExerciseService};
use plans::{repository::PlanRepository, service::PlanService};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::signup_handler,
        auth::handlers::login_handler,
        exercises::handlers::list_public_exercises_handler,
        exercises::handlers::list_my_exercises_handler,
        exercises::handlers::create_exercise_handler,
        exercises::handlers::get_exercise_handler,
        exercises::handlers::update_exercise_handler,
        exercises::handlers::delete_exercise_handler,
        plans::handlers::list_public_plans_handler,
        plans::handlers::list_my_plans_handler,
        plans::handlers::create_plan_handler,
        plans::handlers::get_plan_handler,
        plans::handlers::update_plan_handler,
        plans::handlers::delete_plan_handler,
        plans::handlers::attach_exercise_handler,
        plans::handlers::detach_exercise_handler,
    ),
    components(
        schemas(
            auth::models::SignupRequest,
            auth::models::LoginRequest,
            auth::models::TokenResponse,
            auth::models::UserResponse,
            exercises::models::Exercise,
            exercises::models::CreateExerciseRequest,
            exercises::models::UpdateExerciseRequest,
            plans::models::TrainingPlan,
            plans::models::TrainingPlanResponse,
            plans::models::CreatePlanRequest,
            plans::models::UpdatePlanRequest,
            plans::models::AttachExerciseRequest,
            plans::models::MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Account registration and login"),
        (name = "exercises", description = "Exercise catalog endpoints"),
        (name = "plans", description = "Training plan endpoints")
    ),
    info(
        title = "Training Catalog API",
        version = "1.0.0",
        description = "RESTful API for exercises and training plans with per-user ownership"
    )
)]
struct ApiDoc;

/// Registers the bearer-token security scheme referenced by protected
/// endpoints
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Application state shared across handlers
///
/// Constructed once at startup from the loaded configuration; the pool
/// and the token service are the only cross-request state, both
/// read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub exercise_service: ExerciseService,
    pub plan_service: PlanService,
}

impl AppState {
    /// Wire up repositories and services around a pool and a signing
    /// secret
    pub fn new(db: PgPool, jwt_secret: String) -> Self {
        let token_service = Arc::new(TokenService::new(jwt_secret));
        let auth_service = Arc::new(AuthService::new(
            UserRepository::new(db.clone()),
            token_service.clone(),
        ));
        let exercise_service = ExerciseService::new(ExerciseRepository::new(db.clone()));
        let plan_service = PlanService::new(PlanRepository::new(db.clone()));

        Self {
            db,
            token_service,
            auth_service,
            exercise_service,
            plan_service,
        }
    }
}

/// Handler for GET /
/// Liveness probe answering with the database clock
async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let now: (chrono::DateTime<chrono::Utc>,) = sqlx::query_as("SELECT NOW()")
        .fetch_one(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "now": now.0 })))
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        // Liveness
        .route("/", get(health_handler))
        // Account routes
        .route("/users/signup", post(auth::handlers::signup_handler))
        .route("/users/login", post(auth::handlers::login_handler))
        // Exercise routes
        .route(
            "/exercises/public",
            get(exercises::handlers::list_public_exercises_handler),
        )
        .route(
            "/exercises/mine",
            get(exercises::handlers::list_my_exercises_handler),
        )
        .route("/exercises", post(exercises::handlers::create_exercise_handler))
        .route("/exercises/:id", get(exercises::handlers::get_exercise_handler))
        .route("/exercises/:id", put(exercises::handlers::update_exercise_handler))
        .route(
            "/exercises/:id",
            delete(exercises::handlers::delete_exercise_handler),
        )
        // Training plan routes
        .route("/plans/public", get(plans::handlers::list_public_plans_handler))
        .route("/plans/mine", get(plans::handlers::list_my_plans_handler))
        .route("/plans", post(plans::handlers::create_plan_handler))
        .route("/plans/:id", get(plans::handlers::get_plan_handler))
        .route("/plans/:id", put(plans::handlers::update_plan_handler))
        .route("/plans/:id", delete(plans::handlers::delete_plan_handler))
        .route(
            "/plans/:id/exercises",
            post(plans::handlers::attach_exercise_handler),
        )
        .route(
            "/plans/:id/exercises/:exercise_id",
            delete(plans::handlers::detach_exercise_handler),
        )
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Training Catalog API - Starting...");

    // Load configuration once; everything downstream gets it injected
    let config = Config::from_env().expect("Invalid configuration");

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    // Create the application router
    let state = AppState::new(db_pool, config.jwt_secret.clone());
    let app = create_router(state);

    // Start the Axum server
    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Training Catalog API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

#[cfg(test)]
mod tests;
