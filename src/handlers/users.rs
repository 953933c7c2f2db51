use crate::error::ApiError;
use crate::schemas::{AppState, ErrorDetail, Pagination};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::Utc;
use model::entities::user;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

/// Request body for creating a new user
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    pub name: String,
    /// Email address (must be unique)
    pub email: String,
    /// Password, stored verbatim
    pub password: String,
    /// Whether the account is active (default: true)
    pub is_active: Option<bool>,
    /// Wallet balance in cents (default: 0)
    pub wallet_balance: Option<i32>,
    /// URL or path of the profile picture
    pub profile_picture: Option<String>,
}

/// Request body for replacing a user.
///
/// Every field of the row is overwritten. Omitted optional fields fall back
/// to the shape defaults, not to the stored values — this is a full
/// replacement, not a patch.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_active: Option<bool>,
    pub wallet_balance: Option<i32>,
    pub profile_picture: Option<String>,
}

/// User response model
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub wallet_balance: i32,
    pub profile_picture: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password: model.password,
            is_active: model.is_active,
            wallet_balance: model.wallet_balance,
            profile_picture: model.profile_picture,
            created_at: model.created_at,
        }
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created successfully", body = UserResponse),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!("Creating user with email: {}", request.email);

    let new_user = user::ActiveModel {
        name: Set(request.name),
        email: Set(request.email),
        password: Set(request.password),
        is_active: Set(request.is_active.unwrap_or(true)),
        wallet_balance: Set(request.wallet_balance.unwrap_or(0)),
        profile_picture: Set(request.profile_picture),
        created_at: Set(Some(Utc::now().into())),
        ..Default::default()
    };

    // A duplicate email violates the unique index here and surfaces as a
    // store error, exactly like the upstream service.
    let user_model = new_user.insert(&state.db).await?;

    info!("User created with ID: {}", user_model.id);
    Ok(Json(UserResponse::from(user_model)))
}

/// Get all users
#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    params(Pagination),
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let skip = pagination.skip.unwrap_or(0);
    let limit = pagination.limit.unwrap_or(100);
    debug!("Listing users, skip: {}, limit: {}", skip, limit);

    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(&state.db)
        .await?;

    info!("Retrieved {} users", users.len());
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!("Fetching user with ID: {}", user_id);

    let user_model = user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(UserResponse::from(user_model)))
}

/// Replace a user
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn update_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!("Updating user with ID: {}", user_id);

    let existing = user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    // Full replacement, field by field. `id` and `created_at` keep their
    // insert-time values.
    let mut user_active: user::ActiveModel = existing.into();
    user_active.name = Set(request.name);
    user_active.email = Set(request.email);
    user_active.password = Set(request.password);
    user_active.is_active = Set(request.is_active.unwrap_or(true));
    user_active.wallet_balance = Set(request.wallet_balance.unwrap_or(0));
    user_active.profile_picture = Set(request.profile_picture);

    let updated = user_active.update(&state.db).await?;

    info!("User {} updated", updated.id);
    Ok(Json(UserResponse::from(updated)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User deleted, body is its last state", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn delete_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!("Deleting user with ID: {}", user_id);

    let user_model = user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    user::Entity::delete_by_id(user_id).exec(&state.db).await?;

    info!("User {} deleted", user_id);
    // The response body is the record as it was immediately before removal.
    Ok(Json(UserResponse::from(user_model)))
}
