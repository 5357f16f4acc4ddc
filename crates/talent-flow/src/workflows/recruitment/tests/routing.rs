use super::common::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::recruitment::engine::CascadePolicy;
use crate::workflows::recruitment::recruitment_router;
use crate::workflows::recruitment::repository::RecruitmentRepository;
use crate::workflows::recruitment::router;
use crate::workflows::recruitment::service::RecruitmentService;

fn router_with_memory() -> (axum::Router, Arc<MemoryRepository>) {
    let (service, repository) = build_service();
    (recruitment_router(Arc::new(service)), repository)
}

#[tokio::test]
async fn register_candidate_route_returns_created() {
    let (router, _repository) = router_with_memory();

    let payload = json!({
        "organization_id": 1,
        "full_name": "Dana Whitfield",
        "created_by": 7,
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/recruitment/candidates")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body.get("status"), Some(&json!("new")));
}

#[tokio::test]
async fn duplicate_application_route_returns_conflict() {
    let (router, repository) = router_with_memory();
    let candidate = seed_candidate(&repository);
    seed_application(&repository, candidate.id, 10);

    let payload = json!({
        "organization_id": 1,
        "candidate_id": candidate.id.0,
        "job_position_id": 10,
        "created_by": 7,
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/recruitment/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn status_change_returns_not_found_for_missing_application() {
    let (router, _repository) = router_with_memory();

    let payload = json!({ "status": "shortlisted", "acting_user": 7 });
    let response = router
        .oneshot(
            axum::http::Request::patch("/api/v1/recruitment/applications/404/status")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn feedback_route_rejects_unknown_results() {
    let (router, repository) = router_with_memory();
    let candidate = seed_candidate(&repository);
    let application = seed_application(&repository, candidate.id, 10);
    let round = repository
        .insert_interview(application.id, interview("Round 1", false, 14))
        .expect("round inserts");

    let payload = json!({ "result": "maybe", "acting_user": 7 });
    let response = router
        .oneshot(
            axum::http::Request::post(format!(
                "/api/v1/recruitment/interviews/{}/feedback",
                round.id.0
            ))
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(payload.to_string()))
            .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn schedule_route_returns_interview_and_cascade() {
    let (router, repository) = router_with_memory();
    let candidate = seed_candidate(&repository);
    let application = seed_application(&repository, candidate.id, 10);

    let payload = json!({
        "round_name": "Round 1",
        "final_round": false,
        "scheduled_on": "2026-04-14",
        "created_by": 7,
    });
    let response = router
        .oneshot(
            axum::http::Request::post(format!(
                "/api/v1/recruitment/applications/{}/interviews",
                application.id.0
            ))
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(payload.to_string()))
            .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(
        body.pointer("/cascade/application_status"),
        Some(&json!("interview_scheduled"))
    );
    assert_eq!(
        body.pointer("/cascade/candidate_status"),
        Some(&json!("in_process"))
    );
}

#[tokio::test]
async fn unavailable_repository_maps_to_internal_error() {
    let service = Arc::new(RecruitmentService::new(
        Arc::new(UnavailableRepository),
        CascadePolicy::default(),
    ));

    let response = router::candidate_handler::<UnavailableRepository>(State(service), Path(1))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn report_route_returns_snapshot() {
    let (router, repository) = router_with_memory();
    let candidate = seed_candidate(&repository);
    seed_application(&repository, candidate.id, 10);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/recruitment/organizations/1/report")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("total_candidates"), Some(&json!(1)));
    assert_eq!(body.get("total_applications"), Some(&json!(1)));
}
