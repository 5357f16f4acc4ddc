use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use talent_flow::workflows::recruitment::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, CandidateStatus,
    InterviewId, InterviewResult, InterviewSchedule, InterviewStatus, NewApplication,
    NewCandidate, NewInterview, OrganizationId, RecruitmentRepository, RepositoryError, UserId,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store backing the service until a relational repository is
/// wired in. Identifier sequences start at 1 like the upstream schema's.
#[derive(Default)]
pub(crate) struct InMemoryRecruitmentRepository {
    candidates: Mutex<HashMap<CandidateId, Candidate>>,
    applications: Mutex<HashMap<ApplicationId, Application>>,
    interviews: Mutex<HashMap<InterviewId, InterviewSchedule>>,
    candidate_sequence: AtomicI64,
    application_sequence: AtomicI64,
    interview_sequence: AtomicI64,
}

impl RecruitmentRepository for InMemoryRecruitmentRepository {
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
        if self
            .candidates
            .lock()
            .expect("candidate mutex poisoned")
            .get(&application.candidate_id)
            .is_none()
        {
            return Err(RepositoryError::NotFound);
        }

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
        if self
            .applications
            .lock()
            .expect("application mutex poisoned")
            .get(&application_id)
            .is_none()
        {
            return Err(RepositoryError::NotFound);
        }

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

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
