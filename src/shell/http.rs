use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::modules::spoken_time::use_cases::spell_time::inbound::http as spell_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/time-words", get(spell_http::handle))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
