//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

use questlog_domain::{
    DomainError, PageSpec, Player, PlayerOrder, PlayerPayload, SearchCriteria, SortDirection,
};

use crate::app::App;
use crate::use_cases::PlayerError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/rest/players", get(list_players).post(create_player))
        .route("/rest/players/count", get(count_players))
        .route(
            "/rest/players/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Players
// =============================================================================

async fn list_players(
    State(app): State<Arc<App>>,
    query: Result<Query<PlayerQuery>, QueryRejection>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let Query(query) = query?;
    let criteria = query.criteria()?;
    let page = query.page_spec()?;

    let players = app
        .use_cases
        .players
        .search
        .list(&page, &criteria)
        .await?;
    Ok(Json(players))
}

async fn count_players(
    State(app): State<Arc<App>>,
    query: Result<Query<PlayerQuery>, QueryRejection>,
) -> Result<Json<u64>, ApiError> {
    let Query(query) = query?;
    let total = app
        .use_cases
        .players
        .search
        .count(&query.criteria()?)
        .await?;
    Ok(Json(total))
}

async fn create_player(
    State(app): State<Arc<App>>,
    payload: Result<Json<PlayerPayload>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(payload) = payload?;
    let player = app.use_cases.players.manage.create(payload).await?;
    Ok(Json(player))
}

async fn get_player(
    State(app): State<Arc<App>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(id) = id?;
    let player = app.use_cases.players.manage.get(id).await?;
    Ok(Json(player))
}

async fn update_player(
    State(app): State<Arc<App>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PlayerPayload>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let player = app.use_cases.players.manage.update(id, payload).await?;
    Ok(Json(player))
}

async fn delete_player(
    State(app): State<Arc<App>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    app.use_cases.players.manage.delete(id).await?;
    Ok(StatusCode::OK)
}

/// Filter and paging parameters shared by the list and count endpoints.
///
/// Enumerations arrive as text and are parsed case-insensitively; dates are
/// epoch milliseconds.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerQuery {
    name: Option<String>,
    title: Option<String>,
    race: Option<String>,
    profession: Option<String>,
    after: Option<i64>,
    before: Option<i64>,
    banned: Option<bool>,
    min_experience: Option<i64>,
    max_experience: Option<i64>,
    min_level: Option<i64>,
    max_level: Option<i64>,
    page_number: Option<u32>,
    page_size: Option<u32>,
    #[serde(alias = "sortBy")]
    order: Option<String>,
    direction: Option<String>,
}

impl PlayerQuery {
    fn criteria(&self) -> Result<SearchCriteria, DomainError> {
        Ok(SearchCriteria {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race.as_deref().map(str::parse).transpose()?,
            profession: self.profession.as_deref().map(str::parse).transpose()?,
            after: self.after.map(instant).transpose()?,
            before: self.before.map(instant).transpose()?,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        })
    }

    fn page_spec(&self) -> Result<PageSpec, DomainError> {
        let defaults = PageSpec::default();
        let order = match &self.order {
            Some(order) => order.parse::<PlayerOrder>()?,
            None => defaults.order(),
        };
        let direction = match &self.direction {
            Some(direction) => direction.parse::<SortDirection>()?,
            None => defaults.direction(),
        };

        PageSpec::new(
            self.page_number.unwrap_or(defaults.page_number()),
            self.page_size.unwrap_or(defaults.page_size()),
            order,
            direction,
        )
    }
}

fn instant(millis: i64) -> Result<DateTime<Utc>, DomainError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DomainError::validation(format!("Timestamp {millis} is out of range")))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<PlayerError> for ApiError {
    fn from(e: PlayerError) -> Self {
        match e {
            PlayerError::InvalidInput(msg) => ApiError::BadRequest(msg),
            PlayerError::NotFound(_) => ApiError::NotFound,
            PlayerError::Storage(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}
