use axum::{
    Json, extract::Query, extract::rejection::QueryRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::spoken_time::use_cases::spell_time::handler;

#[derive(Deserialize)]
pub struct SpellTimeParams {
    pub time: String,
}

#[derive(Serialize)]
pub struct SpellTimeResponse {
    pub time: String,
    pub phrase: String,
}

pub async fn handle(params: Result<Query<SpellTimeParams>, QueryRejection>) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match handler::handle(&params.time) {
        Ok(phrase) => (
            StatusCode::OK,
            Json(SpellTimeResponse {
                time: params.time,
                phrase,
            }),
        )
            .into_response(),
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
}
