//! Match request API handlers.
//!
//! Sending either creates the pair's Pending request or merges into the
//! active one; only the receiver may respond.

use crate::api::{auth::CurrentUser, error_reply, response::ApiResponse, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use skilltrade_core::{
    models::{IncomingRequestView, MatchRequest, MatchRequestWithParties, SentRequestView},
    services,
};

/// Request to send or extend a match request
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMatchRequest {
    pub receiver_id: String,
    /// User-skill ids owned by the caller.
    #[serde(default)]
    pub skills_offered: Vec<String>,
    /// User-skill ids owned by the receiver.
    #[serde(default)]
    pub skills_requested: Vec<String>,
}

/// Request to respond to a match request
#[derive(Debug, Serialize, Deserialize)]
pub struct RespondRequest {
    /// "Accepted" or "Rejected"
    pub status: String,
}

/// Send a new match request or merge into the pair's active one
pub async fn send_match_request(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<SendMatchRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MatchRequestWithParties>>), (StatusCode, String)> {
    match services::match_requests::send_or_update(
        &state,
        &user_id,
        &payload.receiver_id,
        &payload.skills_offered,
        &payload.skills_requested,
    )
    .await
    {
        Ok((result, true)) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::ok_with_message(result, "New request created.")),
        )),
        Ok((result, false)) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok_with_message(
                result,
                "Request updated with new skills.",
            )),
        )),
        Err(e) => Err(error_reply(e)),
    }
}

/// Requests addressed to the caller
pub async fn incoming_requests(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ApiResponse<Vec<IncomingRequestView>>>, (StatusCode, String)> {
    match services::match_requests::list_incoming(&state, &user_id).await {
        Ok(views) => Ok(Json(ApiResponse::ok(views))),
        Err(e) => Err(error_reply(e)),
    }
}

/// Requests the caller has sent
pub async fn sent_requests(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ApiResponse<Vec<SentRequestView>>>, (StatusCode, String)> {
    match services::match_requests::list_sent(&state, &user_id).await {
        Ok(views) => Ok(Json(ApiResponse::ok(views))),
        Err(e) => Err(error_reply(e)),
    }
}

/// Accept or reject a match request (receiver only)
pub async fn respond_to_request(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<RespondRequest>,
) -> Result<Json<ApiResponse<MatchRequest>>, (StatusCode, String)> {
    match services::match_requests::respond(&state, &id, &user_id, &payload.status).await {
        Ok(request) => Ok(Json(ApiResponse::ok_with_message(
            request,
            format!("Request {}", payload.status),
        ))),
        Err(e) => Err(error_reply(e)),
    }
}
