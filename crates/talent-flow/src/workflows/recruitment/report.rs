use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateStatus, InterviewId,
    InterviewSchedule, InterviewStatus,
};

const CANDIDATE_STATUS_ORDER: [CandidateStatus; 5] = [
    CandidateStatus::New,
    CandidateStatus::InProcess,
    CandidateStatus::Selected,
    CandidateStatus::Rejected,
    CandidateStatus::OnHold,
];

const APPLICATION_STATUS_ORDER: [ApplicationStatus; 5] = [
    ApplicationStatus::Applied,
    ApplicationStatus::Shortlisted,
    ApplicationStatus::InterviewScheduled,
    ApplicationStatus::Selected,
    ApplicationStatus::Rejected,
];

/// Per-status tally for one pipeline dimension.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCountEntry {
    pub status_label: &'static str,
    pub count: usize,
}

/// A round that is still open: scheduled or rescheduled with no result yet.
#[derive(Debug, Clone, Serialize)]
pub struct AwaitingFeedbackEntry {
    pub interview_id: InterviewId,
    pub application_id: ApplicationId,
    pub round_name: String,
    pub final_round: bool,
    pub scheduled_on: NaiveDate,
    pub status_label: &'static str,
}

/// Point-in-time view of an organization's recruitment pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSnapshot {
    pub total_candidates: usize,
    pub total_applications: usize,
    pub candidate_statuses: Vec<StatusCountEntry>,
    pub application_statuses: Vec<StatusCountEntry>,
    pub awaiting_feedback: Vec<AwaitingFeedbackEntry>,
}

impl PipelineSnapshot {
    pub fn from_records(
        candidates: &[Candidate],
        applications: &[Application],
        interviews: &[InterviewSchedule],
    ) -> Self {
        let candidate_statuses = CANDIDATE_STATUS_ORDER
            .iter()
            .map(|status| StatusCountEntry {
                status_label: status.label(),
                count: candidates
                    .iter()
                    .filter(|candidate| candidate.status == *status)
                    .count(),
            })
            .collect();

        let application_statuses = APPLICATION_STATUS_ORDER
            .iter()
            .map(|status| StatusCountEntry {
                status_label: status.label(),
                count: applications
                    .iter()
                    .filter(|application| application.status == *status)
                    .count(),
            })
            .collect();

        let mut awaiting_feedback: Vec<AwaitingFeedbackEntry> = interviews
            .iter()
            .filter(|round| {
                matches!(
                    round.status,
                    InterviewStatus::Scheduled | InterviewStatus::Rescheduled
                ) && round.result.is_none()
            })
            .map(|round| AwaitingFeedbackEntry {
                interview_id: round.id,
                application_id: round.application_id,
                round_name: round.round_name.clone(),
                final_round: round.final_round,
                scheduled_on: round.scheduled_on,
                status_label: round.status.label(),
            })
            .collect();
        awaiting_feedback.sort_by(|a, b| a.scheduled_on.cmp(&b.scheduled_on));

        Self {
            total_candidates: candidates.len(),
            total_applications: applications.len(),
            candidate_statuses,
            application_statuses,
            awaiting_feedback,
        }
    }
}
