//! Axum route handlers for the Greeting API.

use axum::{extract::State, Json};
use bytes::Bytes;

use crate::errors::AppError;
use crate::greeting::canned::canned_variants;
use crate::greeting::generator::generate_variants;
use crate::greeting::models::{GreetingRequest, GreetingResponse, MISSING_NAME_MESSAGE};
use crate::state::AppState;

/// POST /test
///
/// Canned greetings without calling the model. Missing fields get defaults;
/// an empty body counts as an empty request.
pub async fn handle_test(body: Bytes) -> Result<Json<GreetingResponse>, AppError> {
    let request = GreetingRequest::from_body(&body)?.unwrap_or_default();

    Ok(Json(GreetingResponse {
        variants: canned_variants(&request),
    }))
}

/// POST /generate
///
/// Full generation path: validate → prompt → model → parse (or fallback).
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GreetingResponse>, AppError> {
    let request = GreetingRequest::from_body(&body)?
        .ok_or_else(|| AppError::Validation(MISSING_NAME_MESSAGE.to_string()))?;
    request.validate()?;

    let variants = generate_variants(state.llm.as_ref(), &request).await?;

    Ok(Json(GreetingResponse { variants }))
}
