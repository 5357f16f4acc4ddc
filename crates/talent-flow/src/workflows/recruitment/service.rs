use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, InterviewFeedback,
    InterviewId, InterviewResult, InterviewSchedule, NewApplication, NewCandidate, NewInterview,
    OrganizationId, UserId,
};
use super::engine::{CascadeError, CascadeOutcome, CascadePolicy, StatusSyncEngine};
use super::report::PipelineSnapshot;
use super::repository::{RecruitmentRepository, RepositoryError};

/// Facade composing the repository and the status-sync engine. Controllers
/// go through here so every application mutation ends with the cascade run.
pub struct RecruitmentService<R> {
    repository: Arc<R>,
    engine: StatusSyncEngine<R>,
}

/// Candidate read view: the aggregate root with its applications.
#[derive(Debug, Clone, Serialize)]
pub struct CandidatePipeline {
    pub candidate: Candidate,
    pub applications: Vec<Application>,
}

impl<R: RecruitmentRepository> RecruitmentService<R> {
    pub fn new(repository: Arc<R>, policy: CascadePolicy) -> Self {
        let engine = StatusSyncEngine::new(repository.clone(), policy);
        Self { repository, engine }
    }

    /// Register a candidate record. New candidates start at `New` with no
    /// applications, so no cascade is needed.
    pub fn register_candidate(
        &self,
        candidate: NewCandidate,
    ) -> Result<Candidate, RecruitmentServiceError> {
        Ok(self.repository.insert_candidate(candidate)?)
    }

    /// Submit an application for an existing candidate. The new row starts
    /// at `Applied`; the owning candidate is re-aggregated because any change
    /// to the application set can change the derived status.
    pub fn submit_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, RecruitmentServiceError> {
        let acting_user = application.created_by;
        let stored = self.repository.insert_application(application)?;
        self.engine
            .update_candidate_status_from_applications(stored.candidate_id, acting_user)?;
        Ok(stored)
    }

    /// Schedule an interview round, then let the engine advance the
    /// application and re-derive the candidate.
    pub fn schedule_interview(
        &self,
        application_id: ApplicationId,
        interview: NewInterview,
    ) -> Result<(InterviewSchedule, CascadeOutcome), RecruitmentServiceError> {
        let acting_user = interview.created_by;
        let round = self.repository.insert_interview(application_id, interview)?;
        let outcome = self.engine.on_interview_scheduled(application_id, acting_user)?;
        info!(
            interview = round.id.0,
            application = application_id.0,
            round = %round.round_name,
            "interview round scheduled"
        );
        Ok((round, outcome))
    }

    /// Record feedback for a round and cascade the outcome.
    ///
    /// The result value is validated before the round is marked completed,
    /// so a bad payload cannot close a round without an outcome. Finality
    /// comes from the flag recorded at scheduling time.
    pub fn submit_feedback(
        &self,
        interview_id: InterviewId,
        raw_result: &str,
        acting_user: UserId,
    ) -> Result<(InterviewSchedule, CascadeOutcome), RecruitmentServiceError> {
        let result = InterviewResult::parse(raw_result)
            .ok_or_else(|| CascadeError::InvalidResult(raw_result.to_string()))?;
        let round = self
            .repository
            .find_interview(interview_id)?
            .ok_or(RepositoryError::NotFound)?;

        let round = self
            .repository
            .record_interview_outcome(round.id, result, acting_user)?;
        let feedback = InterviewFeedback {
            result: raw_result.to_string(),
            round_name: round.round_name.clone(),
            final_round: Some(round.final_round),
        };
        let outcome =
            self.engine
                .on_interview_feedback(round.application_id, &feedback, acting_user)?;
        info!(
            interview = round.id.0,
            application = round.application_id.0,
            result = result.label(),
            "interview feedback recorded"
        );
        Ok((round, outcome))
    }

    /// Direct status change (e.g. a Kanban drag). The caller picks the new
    /// status; the engine only re-aggregates the owning candidate.
    pub fn change_application_status(
        &self,
        application_id: ApplicationId,
        status: ApplicationStatus,
        acting_user: UserId,
    ) -> Result<CascadeOutcome, RecruitmentServiceError> {
        let updated =
            self.repository
                .update_application_status(application_id, status, acting_user)?;
        let candidate_status = self
            .engine
            .update_candidate_status_from_applications(updated.candidate_id, acting_user)?;
        Ok(CascadeOutcome {
            application_id: updated.id,
            application_status: updated.status,
            candidate_id: updated.candidate_id,
            candidate_status,
        })
    }

    /// Fetch a candidate with their applications for API responses.
    pub fn candidate_pipeline(
        &self,
        candidate_id: CandidateId,
    ) -> Result<CandidatePipeline, RecruitmentServiceError> {
        let candidate = self
            .repository
            .find_candidate(candidate_id)?
            .ok_or(RepositoryError::NotFound)?;
        let applications = self.repository.applications_for_candidate(candidate_id)?;
        Ok(CandidatePipeline {
            candidate,
            applications,
        })
    }

    /// Snapshot of an organization's pipeline for reporting surfaces.
    pub fn pipeline_report(
        &self,
        organization_id: OrganizationId,
    ) -> Result<PipelineSnapshot, RecruitmentServiceError> {
        let candidates = self.repository.candidates_for_organization(organization_id)?;
        let applications = self
            .repository
            .applications_for_organization(organization_id)?;
        let interviews = self
            .repository
            .interviews_for_organization(organization_id)?;
        Ok(PipelineSnapshot::from_records(
            &candidates,
            &applications,
            &interviews,
        ))
    }
}

/// Error raised by the recruitment service.
#[derive(Debug, thiserror::Error)]
pub enum RecruitmentServiceError {
    #[error(transparent)]
    Cascade(#[from] CascadeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
