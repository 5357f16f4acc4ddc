use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    ApplicationId, ApplicationStatus, CandidateId, InterviewId, NewApplication, NewCandidate,
    NewInterview, OrganizationId, UserId,
};
use super::engine::CascadeError;
use super::repository::{RecruitmentRepository, RepositoryError};
use super::service::{RecruitmentService, RecruitmentServiceError};

/// Router builder exposing the recruitment pipeline endpoints.
pub fn recruitment_router<R>(service: Arc<RecruitmentService<R>>) -> Router
where
    R: RecruitmentRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/recruitment/candidates",
            post(register_candidate_handler::<R>),
        )
        .route(
            "/api/v1/recruitment/candidates/:candidate_id",
            get(candidate_handler::<R>),
        )
        .route(
            "/api/v1/recruitment/applications",
            post(submit_application_handler::<R>),
        )
        .route(
            "/api/v1/recruitment/applications/:application_id/status",
            patch(change_status_handler::<R>),
        )
        .route(
            "/api/v1/recruitment/applications/:application_id/interviews",
            post(schedule_interview_handler::<R>),
        )
        .route(
            "/api/v1/recruitment/interviews/:interview_id/feedback",
            post(feedback_handler::<R>),
        )
        .route(
            "/api/v1/recruitment/organizations/:organization_id/report",
            get(report_handler::<R>),
        )
        .with_state(service)
}

/// Direct status move, e.g. a Kanban drag on the board.
#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    pub status: ApplicationStatus,
    pub acting_user: UserId,
}

/// Feedback payload; the result stays free text so the engine's own
/// validation is the one that rejects unknown values.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub result: String,
    pub acting_user: UserId,
}

pub(crate) async fn register_candidate_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    axum::Json(candidate): axum::Json<NewCandidate>,
) -> Response
where
    R: RecruitmentRepository + 'static,
{
    match service.register_candidate(candidate) {
        Ok(stored) => (StatusCode::CREATED, axum::Json(stored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn candidate_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(candidate_id): Path<i64>,
) -> Response
where
    R: RecruitmentRepository + 'static,
{
    match service.candidate_pipeline(CandidateId(candidate_id)) {
        Ok(pipeline) => (StatusCode::OK, axum::Json(pipeline)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_application_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    axum::Json(application): axum::Json<NewApplication>,
) -> Response
where
    R: RecruitmentRepository + 'static,
{
    match service.submit_application(application) {
        Ok(stored) => (StatusCode::CREATED, axum::Json(stored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn change_status_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(application_id): Path<i64>,
    axum::Json(request): axum::Json<ChangeStatusRequest>,
) -> Response
where
    R: RecruitmentRepository + 'static,
{
    match service.change_application_status(
        ApplicationId(application_id),
        request.status,
        request.acting_user,
    ) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn schedule_interview_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(application_id): Path<i64>,
    axum::Json(interview): axum::Json<NewInterview>,
) -> Response
where
    R: RecruitmentRepository + 'static,
{
    match service.schedule_interview(ApplicationId(application_id), interview) {
        Ok((round, cascade)) => (
            StatusCode::CREATED,
            axum::Json(json!({ "interview": round, "cascade": cascade })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn feedback_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(interview_id): Path<i64>,
    axum::Json(request): axum::Json<FeedbackRequest>,
) -> Response
where
    R: RecruitmentRepository + 'static,
{
    match service.submit_feedback(
        InterviewId(interview_id),
        &request.result,
        request.acting_user,
    ) {
        Ok((round, cascade)) => (
            StatusCode::OK,
            axum::Json(json!({ "interview": round, "cascade": cascade })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<RecruitmentService<R>>>,
    Path(organization_id): Path<i64>,
) -> Response
where
    R: RecruitmentRepository + 'static,
{
    match service.pipeline_report(OrganizationId(organization_id)) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: RecruitmentServiceError) -> Response {
    let status = match &error {
        RecruitmentServiceError::Cascade(CascadeError::InvalidResult(_)) => {
            StatusCode::BAD_REQUEST
        }
        RecruitmentServiceError::Cascade(
            CascadeError::ApplicationNotFound(_) | CascadeError::CandidateNotFound(_),
        ) => StatusCode::NOT_FOUND,
        RecruitmentServiceError::Cascade(CascadeError::Repository(repository))
        | RecruitmentServiceError::Repository(repository) => match repository {
            RepositoryError::NotFound => StatusCode::NOT_FOUND,
            RepositoryError::Conflict => StatusCode::CONFLICT,
            RepositoryError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        },
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
