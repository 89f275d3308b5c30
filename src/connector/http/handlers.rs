use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::connector::api::Container;
use crate::domain::{ChatRequest, ChatResponse, ModelCatalog, ModelListing};

use super::error::ApiError;

pub const HEALTH_STATUS: &str = "the server is running and is healthy";

#[derive(Clone)]
pub struct AppState {
    pub container: Arc<Container>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// `GET /`: route -> description.
pub async fn root() -> Json<Value> {
    let mut routes = Map::new();
    for model in ModelCatalog::supported() {
        routes.insert(
            format!("/chat/{}", model.route),
            Value::from(model.description),
        );
    }
    routes.insert("/health".into(), Value::from("Health check endpoint"));
    routes.insert(
        "/models".into(),
        Value::from("GET endpoint to list supported models"),
    );
    Json(Value::Object(routes))
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HEALTH_STATUS,
    })
}

pub async fn models(State(state): State<AppState>) -> Json<ModelListing> {
    Json(state.container.list_models_use_case().execute())
}

pub async fn chat(
    State(state): State<AppState>,
    Path(model_route): Path<String>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let model = state
        .container
        .list_models_use_case()
        .find_by_route(&model_route)
        .ok_or(ApiError::NotFound)?;
    debug!("POST /chat/{} -> {}", model_route, model.provider_id);

    let Json(request) = body?;
    let response = state
        .container
        .chat_use_case()
        .with_model(model.provider_id)
        .execute(&request)
        .await?;
    Ok(Json(response))
}
