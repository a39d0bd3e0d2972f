use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::{delete, patch, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

#[derive(Deserialize)]
struct CourseQueryParams {
    #[serde(default)]
    sort: CourseSort,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/{id}", get(get_course).delete(delete_course))
        .route(
            "/courses/{id}/sessions",
            get(list_sessions).post(create_session),
        )
        .route(
            "/courses/{id}/sessions/{session_id}",
            delete(delete_session),
        )
        .route(
            "/courses/{id}/sessions/{session_id}/close",
            patch(close_session),
        )
        .route(
            "/courses/{id}/sessions/{session_id}/reopen",
            patch(reopen_session),
        )
        .route(
            "/courses/{id}/sessions/{session_id}/responses",
            post(submit_response),
        )
        .route(
            "/courses/{id}/sessions/{session_id}/stats",
            get(session_stats),
        )
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<Vec<CourseSummary>>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.list_courses(params.sort)))
}

async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<NewCourseRequest>,
) -> Result<Json<Course>, AppError> {
    let mut store = state.store.write().await;
    let course = store.create_course(req)?;
    info!("created course {} ({})", course.name, course.code);
    Ok(Json(course))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.course(&id)?))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.write().await;
    store.delete_course(&id)?;
    info!("deleted course {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn list_sessions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Session>>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.sessions(&id)?))
}

async fn create_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<NewSessionRequest>,
) -> Result<Json<Session>, AppError> {
    let mut store = state.store.write().await;
    let session = store.create_session(&id, req)?;
    info!("created session {} in course {}", session.name, id);
    Ok(Json(session))
}

async fn delete_session(
    State(state): State<AppState>,
    Path((id, session_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.write().await;
    store.delete_session(&id, &session_id)?;
    info!("deleted session {} from course {}", session_id, id);
    Ok(StatusCode::NO_CONTENT)
}

async fn close_session(
    State(state): State<AppState>,
    Path((id, session_id)): Path<(String, String)>,
) -> Result<Json<Session>, AppError> {
    let mut store = state.store.write().await;
    let session = store.set_session_status(&id, &session_id, SessionStatus::Closed)?;
    info!("closed session {}", session_id);
    Ok(Json(session))
}

async fn reopen_session(
    State(state): State<AppState>,
    Path((id, session_id)): Path<(String, String)>,
) -> Result<Json<Session>, AppError> {
    let mut store = state.store.write().await;
    let session = store.set_session_status(&id, &session_id, SessionStatus::Active)?;
    info!("reopened session {}", session_id);
    Ok(Json(session))
}

async fn submit_response(
    State(state): State<AppState>,
    Path((id, session_id)): Path<(String, String)>,
    Json(req): Json<NewResponseRequest>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.write().await;
    store.submit_response(&id, &session_id, req)?;
    Ok(StatusCode::CREATED)
}

async fn session_stats(
    State(state): State<AppState>,
    Path((id, session_id)): Path<(String, String)>,
) -> Result<Json<SessionStats>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.session_stats(&id, &session_id)?))
}
