use super::domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, CandidateStatus,
    InterviewId, InterviewResult, InterviewSchedule, NewApplication, NewCandidate, NewInterview,
    OrganizationId, UserId,
};

/// Storage abstraction so the engine and service can be exercised in
/// isolation. Methods are synchronous; the data store client owns its own
/// I/O timeouts and the cascade runs to completion within the request.
pub trait RecruitmentRepository: Send + Sync {
    fn insert_candidate(&self, candidate: NewCandidate) -> Result<Candidate, RepositoryError>;

    /// Rejects a second application for the same (candidate, position) pair
    /// with `Conflict`, and a missing candidate with `NotFound`.
    fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, RepositoryError>;

    fn insert_interview(
        &self,
        application_id: ApplicationId,
        interview: NewInterview,
    ) -> Result<InterviewSchedule, RepositoryError>;

    fn find_candidate(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError>;

    fn find_application(&self, id: ApplicationId) -> Result<Option<Application>, RepositoryError>;

    fn find_interview(&self, id: InterviewId)
        -> Result<Option<InterviewSchedule>, RepositoryError>;

    fn update_application_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
        updated_by: UserId,
    ) -> Result<Application, RepositoryError>;

    fn update_candidate_status(
        &self,
        id: CandidateId,
        status: CandidateStatus,
        updated_by: UserId,
    ) -> Result<Candidate, RepositoryError>;

    /// Marks the round `Completed` and stores the submitted result.
    fn record_interview_outcome(
        &self,
        id: InterviewId,
        result: InterviewResult,
        updated_by: UserId,
    ) -> Result<InterviewSchedule, RepositoryError>;

    fn applications_for_candidate(
        &self,
        candidate_id: CandidateId,
    ) -> Result<Vec<Application>, RepositoryError>;

    fn candidates_for_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Candidate>, RepositoryError>;

    fn applications_for_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Application>, RepositoryError>;

    fn interviews_for_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<InterviewSchedule>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
