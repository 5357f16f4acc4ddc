mod policy;

pub use policy::CascadePolicy;

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, CandidateId, CandidateStatus, InterviewFeedback,
    InterviewResult, UserId,
};
use super::repository::{RecruitmentRepository, RepositoryError};
use policy::{aggregate_candidate_status, status_after_feedback, status_after_scheduling};

/// Keeps `Application.status` and `Candidate.status` derived from interview
/// events so controllers never embed the derivation rules themselves.
///
/// The cascade is two repository writes with no transaction around them: a
/// failure between the application update and the candidate aggregation
/// leaves the candidate stale and surfaces as an error on the triggering
/// request. Concurrent mutations of the same application are not locked
/// against each other; recruitment changes are human-paced and the race is
/// an accepted limitation.
pub struct StatusSyncEngine<R> {
    repository: Arc<R>,
    policy: CascadePolicy,
}

/// What a cascade invocation left behind, for responses and logging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CascadeOutcome {
    pub application_id: ApplicationId,
    pub application_status: ApplicationStatus,
    pub candidate_id: CandidateId,
    pub candidate_status: CandidateStatus,
}

/// Failures the engine propagates uncaught; the calling controller maps them
/// onto HTTP responses. Missing rows are fatal rather than skipped, since a
/// silent skip would leave derived state stale without signal.
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
    #[error("application {0} not found")]
    ApplicationNotFound(ApplicationId),
    #[error("candidate {0} not found")]
    CandidateNotFound(CandidateId),
    #[error("unrecognized interview result '{0}'")]
    InvalidResult(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl<R: RecruitmentRepository> StatusSyncEngine<R> {
    pub fn new(repository: Arc<R>, policy: CascadePolicy) -> Self {
        Self { repository, policy }
    }

    /// A new interview round was persisted for the application.
    ///
    /// `Applied` and `Shortlisted` advance to `InterviewScheduled`; anything
    /// further along is left untouched. Candidate aggregation runs either
    /// way: a fresh round is a signal at the candidate level even when the
    /// application status is already past it.
    pub fn on_interview_scheduled(
        &self,
        application_id: ApplicationId,
        acting_user: UserId,
    ) -> Result<CascadeOutcome, CascadeError> {
        let application = self.require_application(application_id)?;
        let application = match status_after_scheduling(application.status) {
            Some(next) => self.transition_application(application, next, acting_user)?,
            None => application,
        };
        self.finish_cascade(application, acting_user)
    }

    /// Feedback was persisted for one of the application's rounds.
    ///
    /// The raw result value is validated here as well as at the controller;
    /// an unknown value aborts the cascade before any write.
    pub fn on_interview_feedback(
        &self,
        application_id: ApplicationId,
        feedback: &InterviewFeedback,
        acting_user: UserId,
    ) -> Result<CascadeOutcome, CascadeError> {
        let result = InterviewResult::parse(&feedback.result)
            .ok_or_else(|| CascadeError::InvalidResult(feedback.result.clone()))?;
        let application = self.require_application(application_id)?;
        let final_round = self
            .policy
            .is_final_round(&feedback.round_name, feedback.final_round);

        let application = match status_after_feedback(application.status, result, final_round) {
            Some(next) if next != application.status => {
                self.transition_application(application, next, acting_user)?
            }
            _ => application,
        };
        self.finish_cascade(application, acting_user)
    }

    /// Re-derives the candidate status from the current application set and
    /// persists it when it changed. Idempotent: the derivation is a pure
    /// function of the set, so repeated calls with no intervening mutation
    /// settle on the same status.
    pub fn update_candidate_status_from_applications(
        &self,
        candidate_id: CandidateId,
        acting_user: UserId,
    ) -> Result<CandidateStatus, CascadeError> {
        let candidate = self
            .repository
            .find_candidate(candidate_id)?
            .ok_or(CascadeError::CandidateNotFound(candidate_id))?;
        let applications = self.repository.applications_for_candidate(candidate_id)?;
        let statuses: Vec<ApplicationStatus> = applications
            .iter()
            .map(|application| application.status)
            .collect();

        let next = aggregate_candidate_status(&statuses);
        if next != candidate.status {
            self.repository
                .update_candidate_status(candidate_id, next, acting_user)?;
            debug!(
                candidate = candidate_id.0,
                from = candidate.status.label(),
                to = next.label(),
                "candidate status re-derived"
            );
        }
        Ok(next)
    }

    fn require_application(
        &self,
        application_id: ApplicationId,
    ) -> Result<Application, CascadeError> {
        self.repository
            .find_application(application_id)?
            .ok_or(CascadeError::ApplicationNotFound(application_id))
    }

    fn transition_application(
        &self,
        application: Application,
        next: ApplicationStatus,
        acting_user: UserId,
    ) -> Result<Application, CascadeError> {
        let updated = self
            .repository
            .update_application_status(application.id, next, acting_user)?;
        debug!(
            application = application.id.0,
            from = application.status.label(),
            to = next.label(),
            "application status advanced"
        );
        Ok(updated)
    }

    fn finish_cascade(
        &self,
        application: Application,
        acting_user: UserId,
    ) -> Result<CascadeOutcome, CascadeError> {
        let candidate_status =
            self.update_candidate_status_from_applications(application.candidate_id, acting_user)?;
        Ok(CascadeOutcome {
            application_id: application.id,
            application_status: application.status,
            candidate_id: application.candidate_id,
            candidate_status,
        })
    }
}
