use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::recruitment::domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, CandidateStatus,
    InterviewId, InterviewResult, InterviewSchedule, InterviewStatus, JobPositionId,
    NewApplication, NewCandidate, NewInterview, OrganizationId, UserId,
};
use crate::workflows::recruitment::engine::{CascadePolicy, StatusSyncEngine};
use crate::workflows::recruitment::repository::{RecruitmentRepository, RepositoryError};
use crate::workflows::recruitment::service::RecruitmentService;

pub(super) fn acting_user() -> UserId {
    UserId(7)
}

pub(super) fn organization() -> OrganizationId {
    OrganizationId(1)
}

pub(super) fn build_service() -> (RecruitmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = RecruitmentService::new(repository.clone(), CascadePolicy::default());
    (service, repository)
}

pub(super) fn build_engine() -> (StatusSyncEngine<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let engine = StatusSyncEngine::new(repository.clone(), CascadePolicy::default());
    (engine, repository)
}

pub(super) fn seed_candidate(repository: &MemoryRepository) -> Candidate {
    repository
        .insert_candidate(NewCandidate {
            organization_id: organization(),
            full_name: "Dana Whitfield".to_string(),
            created_by: acting_user(),
        })
        .expect("candidate inserts")
}

pub(super) fn seed_application(
    repository: &MemoryRepository,
    candidate_id: CandidateId,
    position: i64,
) -> Application {
    repository
        .insert_application(NewApplication {
            organization_id: organization(),
            candidate_id,
            job_position_id: JobPositionId(position),
            created_by: acting_user(),
        })
        .expect("application inserts")
}

pub(super) fn interview(round_name: &str, final_round: bool, day: u32) -> NewInterview {
    NewInterview {
        round_name: round_name.to_string(),
        final_round,
        scheduled_on: NaiveDate::from_ymd_opt(2026, 4, day).expect("valid date"),
        created_by: acting_user(),
    }
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    candidates: Mutex<HashMap<CandidateId, Candidate>>,
    applications: Mutex<HashMap<ApplicationId, Application>>,
    interviews: Mutex<HashMap<InterviewId, InterviewSchedule>>,
    candidate_sequence: AtomicI64,
    application_sequence: AtomicI64,
    interview_sequence: AtomicI64,
}

impl RecruitmentRepository for MemoryRepository {
    fn insert_candidate(&self, candidate: NewCandidate) -> Result<Candidate, RepositoryError> {
        let id = CandidateId(self.candidate_sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let stored = Candidate {
            id,
            organization_id: candidate.organization_id,
            full_name: candidate.full_name,
            status: CandidateStatus::New,
            updated_by: Some(candidate.created_by),
        };
        let mut guard = self.candidates.lock().expect("candidate mutex poisoned");
        guard.insert(id, stored.clone());
        Ok(stored)
    }

    fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, RepositoryError> {
        let candidates = self.candidates.lock().expect("candidate mutex poisoned");
        if !candidates.contains_key(&application.candidate_id) {
            return Err(RepositoryError::NotFound);
        }
        drop(candidates);

        let mut guard = self.applications.lock().expect("application mutex poisoned");
        let duplicate = guard.values().any(|existing| {
            existing.candidate_id == application.candidate_id
                && existing.job_position_id == application.job_position_id
        });
        if duplicate {
            return Err(RepositoryError::Conflict);
        }

        let id = ApplicationId(self.application_sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let stored = Application {
            id,
            organization_id: application.organization_id,
            candidate_id: application.candidate_id,
            job_position_id: application.job_position_id,
            status: ApplicationStatus::Applied,
            updated_by: Some(application.created_by),
        };
        guard.insert(id, stored.clone());
        Ok(stored)
    }

    fn insert_interview(
        &self,
        application_id: ApplicationId,
        interview: NewInterview,
    ) -> Result<InterviewSchedule, RepositoryError> {
        let applications = self.applications.lock().expect("application mutex poisoned");
        if !applications.contains_key(&application_id) {
            return Err(RepositoryError::NotFound);
        }
        drop(applications);

        let id = InterviewId(self.interview_sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let stored = InterviewSchedule {
            id,
            application_id,
            round_name: interview.round_name,
            final_round: interview.final_round,
            scheduled_on: interview.scheduled_on,
            status: InterviewStatus::Scheduled,
            result: None,
            updated_by: Some(interview.created_by),
        };
        let mut guard = self.interviews.lock().expect("interview mutex poisoned");
        guard.insert(id, stored.clone());
        Ok(stored)
    }

    fn find_candidate(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.candidates.lock().expect("candidate mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn find_application(&self, id: ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let guard = self.applications.lock().expect("application mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn find_interview(
        &self,
        id: InterviewId,
    ) -> Result<Option<InterviewSchedule>, RepositoryError> {
        let guard = self.interviews.lock().expect("interview mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn update_application_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
        updated_by: UserId,
    ) -> Result<Application, RepositoryError> {
        let mut guard = self.applications.lock().expect("application mutex poisoned");
        let application = guard.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        application.status = status;
        application.updated_by = Some(updated_by);
        Ok(application.clone())
    }

    fn update_candidate_status(
        &self,
        id: CandidateId,
        status: CandidateStatus,
        updated_by: UserId,
    ) -> Result<Candidate, RepositoryError> {
        let mut guard = self.candidates.lock().expect("candidate mutex poisoned");
        let candidate = guard.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        candidate.status = status;
        candidate.updated_by = Some(updated_by);
        Ok(candidate.clone())
    }

    fn record_interview_outcome(
        &self,
        id: InterviewId,
        result: InterviewResult,
        updated_by: UserId,
    ) -> Result<InterviewSchedule, RepositoryError> {
        let mut guard = self.interviews.lock().expect("interview mutex poisoned");
        let round = guard.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        round.status = InterviewStatus::Completed;
        round.result = Some(result);
        round.updated_by = Some(updated_by);
        Ok(round.clone())
    }

    fn applications_for_candidate(
        &self,
        candidate_id: CandidateId,
    ) -> Result<Vec<Application>, RepositoryError> {
        let guard = self.applications.lock().expect("application mutex poisoned");
        let mut applications: Vec<Application> = guard
            .values()
            .filter(|application| application.candidate_id == candidate_id)
            .cloned()
            .collect();
        applications.sort_by_key(|application| application.id);
        Ok(applications)
    }

    fn candidates_for_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Candidate>, RepositoryError> {
        let guard = self.candidates.lock().expect("candidate mutex poisoned");
        let mut candidates: Vec<Candidate> = guard
            .values()
            .filter(|candidate| candidate.organization_id == organization_id)
            .cloned()
            .collect();
        candidates.sort_by_key(|candidate| candidate.id);
        Ok(candidates)
    }

    fn applications_for_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Application>, RepositoryError> {
        let guard = self.applications.lock().expect("application mutex poisoned");
        let mut applications: Vec<Application> = guard
            .values()
            .filter(|application| application.organization_id == organization_id)
            .cloned()
            .collect();
        applications.sort_by_key(|application| application.id);
        Ok(applications)
    }

    fn interviews_for_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<InterviewSchedule>, RepositoryError> {
        let applications = self.applications_for_organization(organization_id)?;
        let guard = self.interviews.lock().expect("interview mutex poisoned");
        let mut interviews: Vec<InterviewSchedule> = guard
            .values()
            .filter(|round| {
                applications
                    .iter()
                    .any(|application| application.id == round.application_id)
            })
            .cloned()
            .collect();
        interviews.sort_by_key(|round| round.id);
        Ok(interviews)
    }
}

/// Repository double that fails every call, for 500-mapping tests.
pub(super) struct UnavailableRepository;

impl UnavailableRepository {
    fn offline<T>() -> Result<T, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

impl RecruitmentRepository for UnavailableRepository {
    fn insert_candidate(&self, _candidate: NewCandidate) -> Result<Candidate, RepositoryError> {
        Self::offline()
    }

    fn insert_application(
        &self,
        _application: NewApplication,
    ) -> Result<Application, RepositoryError> {
        Self::offline()
    }

    fn insert_interview(
        &self,
        _application_id: ApplicationId,
        _interview: NewInterview,
    ) -> Result<InterviewSchedule, RepositoryError> {
        Self::offline()
    }

    fn find_candidate(&self, _id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Self::offline()
    }

    fn find_application(
        &self,
        _id: ApplicationId,
    ) -> Result<Option<Application>, RepositoryError> {
        Self::offline()
    }

    fn find_interview(
        &self,
        _id: InterviewId,
    ) -> Result<Option<InterviewSchedule>, RepositoryError> {
        Self::offline()
    }

    fn update_application_status(
        &self,
        _id: ApplicationId,
        _status: ApplicationStatus,
        _updated_by: UserId,
    ) -> Result<Application, RepositoryError> {
        Self::offline()
    }

    fn update_candidate_status(
        &self,
        _id: CandidateId,
        _status: CandidateStatus,
        _updated_by: UserId,
    ) -> Result<Candidate, RepositoryError> {
        Self::offline()
    }

    fn record_interview_outcome(
        &self,
        _id: InterviewId,
        _result: InterviewResult,
        _updated_by: UserId,
    ) -> Result<InterviewSchedule, RepositoryError> {
        Self::offline()
    }

    fn applications_for_candidate(
        &self,
        _candidate_id: CandidateId,
    ) -> Result<Vec<Application>, RepositoryError> {
        Self::offline()
    }

    fn candidates_for_organization(
        &self,
        _organization_id: OrganizationId,
    ) -> Result<Vec<Candidate>, RepositoryError> {
        Self::offline()
    }

    fn applications_for_organization(
        &self,
        _organization_id: OrganizationId,
    ) -> Result<Vec<Application>, RepositoryError> {
        Self::offline()
    }

    fn interviews_for_organization(
        &self,
        _organization_id: OrganizationId,
    ) -> Result<Vec<InterviewSchedule>, RepositoryError> {
        Self::offline()
    }
}
