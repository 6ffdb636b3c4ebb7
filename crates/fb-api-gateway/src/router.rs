//! Route table and handlers.
//!
//! Routes mirror the public surface one-to-one; handlers only move data
//! between the wire and the subsystems.

use crate::config::GatewayConfig;
use crate::error::ApiError;
use crate::extract::Caller;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use fb_food_store::FoodStoreApi;
use fb_identity::IdentityGate;
use fb_workflow::WorkflowApi;
use serde::Deserialize;
use serde_json::json;
use shared_types::{Fields, FoodId, FoodItem, FoodRequest, FoodStatus, RequestView};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared handles handed to every handler.
///
/// One store handle per process, injected at startup; handlers never open
/// connections of their own.
#[derive(Clone)]
pub struct AppState {
    /// Food Store subsystem.
    pub foods: Arc<dyn FoodStoreApi>,
    /// Workflow Engine.
    pub workflow: Arc<dyn WorkflowApi>,
    /// Identity Gate.
    pub identity: Arc<dyn IdentityGate>,
}

/// Build the gateway router over the shared state.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/add-food", post(add_food))
        .route("/available-foods", get(available_foods))
        .route(
            "/food/:id",
            get(get_food).patch(update_food).delete(delete_food),
        )
        .route("/food-request", post(request_food))
        .route("/my-foods", get(my_foods))
        .route("/my-requests", get(my_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state)
}

async fn add_food(
    State(state): State<AppState>,
    Caller(claims): Caller,
    Json(fields): Json<Fields>,
) -> Result<(StatusCode, Json<FoodItem>), ApiError> {
    let item = state.foods.create(&claims, fields).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn available_foods(
    State(state): State<AppState>,
) -> Result<Json<Vec<FoodItem>>, ApiError> {
    Ok(Json(state.foods.list_by_status(FoodStatus::Available).await?))
}

async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<FoodId>,
) -> Result<Json<FoodItem>, ApiError> {
    Ok(Json(state.foods.get_by_id(id).await?))
}

async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<FoodId>,
    Caller(claims): Caller,
    Json(patch): Json<Fields>,
) -> Result<Json<FoodItem>, ApiError> {
    Ok(Json(state.foods.update(id, &claims.subject_id, patch).await?))
}

async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<FoodId>,
    Caller(claims): Caller,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.foods.delete(id, &claims.subject_id).await?;
    Ok(Json(json!({ "acknowledged": true, "id": id })))
}

/// Body of `POST /food-request`: the target item plus opaque request fields.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestFoodBody {
    food_id: FoodId,
    #[serde(flatten)]
    fields: Fields,
}

async fn request_food(
    State(state): State<AppState>,
    Caller(claims): Caller,
    Json(body): Json<RequestFoodBody>,
) -> Result<(StatusCode, Json<FoodRequest>), ApiError> {
    let request = state
        .workflow
        .request_food(&claims, body.food_id, body.fields)
        .await?;
    Ok((StatusCode::CREATED, Json(request)))
}

async fn my_foods(
    State(state): State<AppState>,
    Caller(claims): Caller,
) -> Result<Json<Vec<FoodItem>>, ApiError> {
    Ok(Json(state.foods.list_by_owner(&claims.subject_id).await?))
}

async fn my_requests(
    State(state): State<AppState>,
    Caller(claims): Caller,
) -> Result<Json<Vec<RequestView>>, ApiError> {
    Ok(Json(state.workflow.my_requests_detailed(&claims).await?))
}
