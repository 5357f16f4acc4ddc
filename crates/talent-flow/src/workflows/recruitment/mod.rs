//! Recruitment pipeline: candidates, applications, interview rounds, and the
//! status-sync engine that keeps their statuses mutually consistent.
//!
//! Controllers call the [`service::RecruitmentService`] facade; every mutation
//! that touches an application or one of its interview rounds ends with the
//! engine re-deriving the dependent statuses before the request returns.

pub mod domain;
pub mod engine;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, CandidateStatus,
    InterviewFeedback, InterviewId, InterviewResult, InterviewSchedule, InterviewStatus,
    JobPositionId, NewApplication, NewCandidate, NewInterview, OrganizationId, UserId,
};
pub use engine::{CascadeError, CascadeOutcome, CascadePolicy, StatusSyncEngine};
pub use report::{AwaitingFeedbackEntry, PipelineSnapshot, StatusCountEntry};
pub use repository::{RecruitmentRepository, RepositoryError};
pub use router::recruitment_router;
pub use service::{CandidatePipeline, RecruitmentService, RecruitmentServiceError};
