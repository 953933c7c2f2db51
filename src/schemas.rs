use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// Offset/limit query parameters for list endpoints
#[derive(Debug, Deserialize, IntoParams)]
pub struct Pagination {
    /// Number of records to skip (default 0)
    pub skip: Option<u64>,
    /// Maximum number of records to return (default 100)
    pub limit: Option<u64>,
}

/// Error payload returned with 404 and 500 responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Human-readable error message
    pub detail: String,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::create_user,
        crate::handlers::users::get_users,
        crate::handlers::users::get_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
        crate::handlers::games::create_game,
        crate::handlers::games::get_games,
        crate::handlers::games::get_game,
        crate::handlers::games::update_game,
        crate::handlers::games::delete_game,
    ),
    components(
        schemas(
            crate::handlers::users::CreateUserRequest,
            crate::handlers::users::UpdateUserRequest,
            crate::handlers::users::UserResponse,
            crate::handlers::games::CreateGameRequest,
            crate::handlers::games::UpdateGameRequest,
            crate::handlers::games::GameResponse,
            ErrorDetail,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User CRUD endpoints"),
        (name = "games", description = "Game catalog CRUD endpoints"),
    ),
    info(
        title = "Boxit API",
        description = "Game store backend exposing user and game CRUD endpoints",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
