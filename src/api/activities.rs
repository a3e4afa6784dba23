//! Activity signup API handlers
//!
//! Contains HTTP request handlers for listing activities and for the two
//! mutating operations on a participant list: signup and unregister.

use crate::error::AppError;
use crate::state::{Activity, ActivityName, AppState};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Activity response type
#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    /// Human-readable description of the activity
    pub description: String,
    /// Meeting schedule, free-form text
    pub schedule: String,
    /// Maximum number of participants (informational)
    pub max_participants: u32,
    /// Participant emails, in signup order
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.clone(),
        }
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation message
    pub message: String,
}

/// Query parameters for the signup and unregister endpoints
#[derive(Debug, Deserialize)]
pub struct EmailParam {
    /// Email address identifying the student
    pub email: String,
}

/// GET /activities - List all activities with their participants
pub async fn list_activities(
    State(state): State<Arc<RwLock<AppState>>>,
) -> Result<Json<BTreeMap<ActivityName, ActivityResponse>>, AppError> {
    let state = state.read().await;
    let activities: BTreeMap<ActivityName, ActivityResponse> = state
        .activities
        .iter()
        .map(|(name, activity)| (name.clone(), ActivityResponse::from(activity)))
        .collect();

    Ok(Json(activities))
}

/// POST /activities/:activity_name/signup - Sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParam>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut state = state.write().await;
    state.signup(&activity_name, &params.email)?;

    Ok(Json(MessageResponse {
        message: format!("{} signed up for {}", params.email, activity_name),
    }))
}

/// POST /activities/:activity_name/unregister - Remove a student's registration
pub async fn unregister(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParam>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut state = state.write().await;
    state.unregister(&activity_name, &params.email)?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", params.email, activity_name),
    }))
}
