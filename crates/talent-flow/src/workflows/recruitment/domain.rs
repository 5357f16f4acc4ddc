use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for candidates. All recruitment rows are keyed by the
/// integer identifiers the upstream schema assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub i64);

/// Identifier wrapper for applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub i64);

/// Identifier wrapper for interview rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InterviewId(pub i64);

/// Identifier wrapper for the owning organization (tenant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationId(pub i64);

/// Identifier wrapper for job positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobPositionId(pub i64);

/// Identifier wrapper for the acting user, carried for audit stamping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for InterviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Overall state of a candidate, derived from their applications.
///
/// Only the status-sync engine writes this field, with one exception:
/// `OnHold` is a manual override and is never produced by aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    InProcess,
    Selected,
    Rejected,
    OnHold,
}

impl CandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProcess => "In Process",
            Self::Selected => "Selected",
            Self::Rejected => "Rejected",
            Self::OnHold => "On Hold",
        }
    }
}

/// State of one application to one job position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    InterviewScheduled,
    Selected,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Shortlisted => "Shortlisted",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::Selected => "Selected",
            Self::Rejected => "Rejected",
        }
    }
}

/// Scheduling state of an interview round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}

impl InterviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Rescheduled => "Rescheduled",
        }
    }
}

/// Outcome recorded when feedback is submitted for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewResult {
    Pass,
    Fail,
    OnHold,
}

impl InterviewResult {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::OnHold => "On Hold",
        }
    }

    /// Lenient parse for the wire value. Returns `None` for anything outside
    /// the three recognized outcomes; callers turn that into their own error.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pass" => Some(Self::Pass),
            "fail" => Some(Self::Fail),
            "on hold" | "on_hold" | "hold" => Some(Self::OnHold),
            _ => None,
        }
    }
}

/// A person under recruitment consideration, aggregate of their applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub organization_id: OrganizationId,
    pub full_name: String,
    pub status: CandidateStatus,
    pub updated_by: Option<UserId>,
}

/// One candidate's application to one job position. Unique per
/// (candidate, position) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub organization_id: OrganizationId,
    pub candidate_id: CandidateId,
    pub job_position_id: JobPositionId,
    pub status: ApplicationStatus,
    pub updated_by: Option<UserId>,
}

/// One scheduled or completed interview round tied to an application.
///
/// `final_round` is recorded at scheduling time so a later pass result can
/// conclude the pipeline without guessing from the round name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSchedule {
    pub id: InterviewId,
    pub application_id: ApplicationId,
    pub round_name: String,
    pub final_round: bool,
    pub scheduled_on: NaiveDate,
    pub status: InterviewStatus,
    pub result: Option<InterviewResult>,
    pub updated_by: Option<UserId>,
}

/// Intake payload for a new candidate record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCandidate {
    pub organization_id: OrganizationId,
    pub full_name: String,
    pub created_by: UserId,
}

/// Intake payload for a new application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplication {
    pub organization_id: OrganizationId,
    pub candidate_id: CandidateId,
    pub job_position_id: JobPositionId,
    pub created_by: UserId,
}

/// Intake payload for scheduling an interview round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInterview {
    pub round_name: String,
    #[serde(default)]
    pub final_round: bool,
    pub scheduled_on: NaiveDate,
    pub created_by: UserId,
}

/// Feedback event handed to the status-sync engine.
///
/// `result` stays raw text: the controller validates it, and the engine
/// rejects unknown values again rather than trusting its caller. When
/// `final_round` is absent the engine falls back to matching the configured
/// marker against `round_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewFeedback {
    pub result: String,
    pub round_name: String,
    #[serde(default)]
    pub final_round: Option<bool>,
}
