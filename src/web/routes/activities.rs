use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::database::ActivityStore;
use crate::models::ActivityDirectory;
use crate::services::signup_service::{self, SignupError};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: Option<String>,
}

fn error_response(err: SignupError) -> (StatusCode, Json<Value>) {
    (
        err.status(),
        Json(serde_json::json!({ "detail": err.to_string() })),
    )
}

fn require_email(activity_name: &str, query: SignupQuery) -> Result<String, (StatusCode, Json<Value>)> {
    query.email.ok_or_else(|| {
        tracing::warn!(activity = %activity_name, "email query parameter missing");
        error_response(SignupError::MissingEmail)
    })
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<ActivityDirectory> {
    Json(signup_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let email = require_email(&activity_name, query)?;
    signup_service::signup(&store, &activity_name, &email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            tracing::warn!(activity = %activity_name, email = %email, error = %e, "signup_failed");
            error_response(e)
        })
}

pub async fn withdraw_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let email = require_email(&activity_name, query)?;
    signup_service::withdraw(&store, &activity_name, &email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            tracing::warn!(activity = %activity_name, email = %email, error = %e, "withdraw_failed");
            error_response(e)
        })
}
