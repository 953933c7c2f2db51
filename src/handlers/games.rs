use crate::error::ApiError;
use crate::schemas::{AppState, ErrorDetail, Pagination};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use model::entities::game;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

/// Request body for creating a new game
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateGameRequest {
    pub title: String,
    pub description: String,
    pub developer: String,
    pub publisher: String,
    pub genre: String,
    /// Price in cents
    pub price: i32,
    /// Free-form release date, kept as text
    pub release_date: String,
    /// Aggregate rating (default: 0)
    pub rating: Option<i32>,
    pub cover_image: Option<String>,
}

/// Request body for replacing a game. Full replacement, not a patch.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateGameRequest {
    pub title: String,
    pub description: String,
    pub developer: String,
    pub publisher: String,
    pub genre: String,
    pub price: i32,
    pub release_date: String,
    pub rating: Option<i32>,
    pub cover_image: Option<String>,
}

/// Game response model
#[derive(Debug, Serialize, ToSchema)]
pub struct GameResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub developer: String,
    pub publisher: String,
    pub genre: String,
    pub price: i32,
    pub release_date: String,
    pub rating: i32,
    pub cover_image: Option<String>,
}

impl From<game::Model> for GameResponse {
    fn from(model: game::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            developer: model.developer,
            publisher: model.publisher,
            genre: model.genre,
            price: model.price,
            release_date: model.release_date,
            rating: model.rating,
            cover_image: model.cover_image,
        }
    }
}

/// Create a new game
#[utoipa::path(
    post,
    path = "/games/",
    tag = "games",
    request_body = CreateGameRequest,
    responses(
        (status = 200, description = "Game created successfully", body = GameResponse),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    debug!("Creating game with title: {}", request.title);

    let new_game = game::ActiveModel {
        title: Set(request.title),
        description: Set(request.description),
        developer: Set(request.developer),
        publisher: Set(request.publisher),
        genre: Set(request.genre),
        price: Set(request.price),
        release_date: Set(request.release_date),
        rating: Set(request.rating.unwrap_or(0)),
        cover_image: Set(request.cover_image),
        ..Default::default()
    };

    let game_model = new_game.insert(&state.db).await?;

    info!("Game created with ID: {}", game_model.id);
    Ok(Json(GameResponse::from(game_model)))
}

/// Get all games
#[utoipa::path(
    get,
    path = "/games/",
    tag = "games",
    params(Pagination),
    responses(
        (status = 200, description = "Games retrieved successfully", body = Vec<GameResponse>),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn get_games(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<GameResponse>>, ApiError> {
    let skip = pagination.skip.unwrap_or(0);
    let limit = pagination.limit.unwrap_or(100);
    debug!("Listing games, skip: {}, limit: {}", skip, limit);

    let games = game::Entity::find()
        .order_by_asc(game::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(&state.db)
        .await?;

    info!("Retrieved {} games", games.len());
    Ok(Json(games.into_iter().map(GameResponse::from).collect()))
}

/// Get a specific game by ID
#[utoipa::path(
    get,
    path = "/games/{game_id}",
    tag = "games",
    params(
        ("game_id" = i32, Path, description = "Game ID"),
    ),
    responses(
        (status = 200, description = "Game retrieved successfully", body = GameResponse),
        (status = 404, description = "Game not found", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn get_game(
    Path(game_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<GameResponse>, ApiError> {
    debug!("Fetching game with ID: {}", game_id);

    let game_model = game::Entity::find_by_id(game_id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Game"))?;

    Ok(Json(GameResponse::from(game_model)))
}

/// Replace a game
#[utoipa::path(
    put,
    path = "/games/{game_id}",
    tag = "games",
    params(
        ("game_id" = i32, Path, description = "Game ID"),
    ),
    request_body = UpdateGameRequest,
    responses(
        (status = 200, description = "Game updated successfully", body = GameResponse),
        (status = 404, description = "Game not found", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn update_game(
    Path(game_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateGameRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    debug!("Updating game with ID: {}", game_id);

    let existing = game::Entity::find_by_id(game_id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Game"))?;

    // Full replacement, field by field.
    let mut game_active: game::ActiveModel = existing.into();
    game_active.title = Set(request.title);
    game_active.description = Set(request.description);
    game_active.developer = Set(request.developer);
    game_active.publisher = Set(request.publisher);
    game_active.genre = Set(request.genre);
    game_active.price = Set(request.price);
    game_active.release_date = Set(request.release_date);
    game_active.rating = Set(request.rating.unwrap_or(0));
    game_active.cover_image = Set(request.cover_image);

    let updated = game_active.update(&state.db).await?;

    info!("Game {} updated", updated.id);
    Ok(Json(GameResponse::from(updated)))
}

/// Delete a game
#[utoipa::path(
    delete,
    path = "/games/{game_id}",
    tag = "games",
    params(
        ("game_id" = i32, Path, description = "Game ID"),
    ),
    responses(
        (status = 200, description = "Game deleted, body is its last state", body = GameResponse),
        (status = 404, description = "Game not found", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn delete_game(
    Path(game_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<GameResponse>, ApiError> {
    debug!("Deleting game with ID: {}", game_id);

    let game_model = game::Entity::find_by_id(game_id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Game"))?;

    game::Entity::delete_by_id(game_id).exec(&state.db).await?;

    info!("Game {} deleted", game_id);
    Ok(Json(GameResponse::from(game_model)))
}
