use super::super::domain::{ApplicationStatus, CandidateStatus, InterviewResult};

/// One row of the candidate aggregation table.
pub(crate) struct AggregationRule {
    pub(crate) applies: fn(&[ApplicationStatus]) -> bool,
    pub(crate) status: CandidateStatus,
}

/// Ordered highest-precedence-first; the first matching rule decides and the
/// walk stops. `OnHold` has no row: it is a manual override and aggregation
/// never produces it. No rule matching (empty set, or a residue of
/// `Applied` possibly mixed with `Rejected`) falls back to `New`.
pub(crate) const AGGREGATION_RULES: &[AggregationRule] = &[
    AggregationRule {
        applies: |statuses| {
            statuses
                .iter()
                .any(|status| *status == ApplicationStatus::Selected)
        },
        status: CandidateStatus::Selected,
    },
    AggregationRule {
        applies: |statuses| {
            statuses
                .iter()
                .any(|status| *status == ApplicationStatus::InterviewScheduled)
        },
        status: CandidateStatus::InProcess,
    },
    AggregationRule {
        applies: |statuses| {
            statuses
                .iter()
                .any(|status| *status == ApplicationStatus::Shortlisted)
        },
        status: CandidateStatus::InProcess,
    },
    AggregationRule {
        applies: |statuses| {
            !statuses.is_empty()
                && statuses
                    .iter()
                    .all(|status| *status == ApplicationStatus::Rejected)
        },
        status: CandidateStatus::Rejected,
    },
];

/// Pure function of the application set, so re-running it is idempotent.
pub(crate) fn aggregate_candidate_status(statuses: &[ApplicationStatus]) -> CandidateStatus {
    for rule in AGGREGATION_RULES {
        if (rule.applies)(statuses) {
            return rule.status;
        }
    }
    CandidateStatus::New
}

/// Application transition when a new round is scheduled. `None` keeps the
/// current status: scheduling never regresses a more advanced state.
pub(crate) fn status_after_scheduling(current: ApplicationStatus) -> Option<ApplicationStatus> {
    match current {
        ApplicationStatus::Applied | ApplicationStatus::Shortlisted => {
            Some(ApplicationStatus::InterviewScheduled)
        }
        ApplicationStatus::InterviewScheduled
        | ApplicationStatus::Selected
        | ApplicationStatus::Rejected => None,
    }
}

/// Application transition when round feedback lands.
///
/// A failed round ends the pipeline regardless of other pending rounds. A
/// pass concludes it only on the final round. On-hold re-affirms
/// `InterviewScheduled` without regressing anything further along.
pub(crate) fn status_after_feedback(
    current: ApplicationStatus,
    result: InterviewResult,
    final_round: bool,
) -> Option<ApplicationStatus> {
    match result {
        InterviewResult::Fail => Some(ApplicationStatus::Rejected),
        InterviewResult::Pass if final_round => Some(ApplicationStatus::Selected),
        InterviewResult::Pass => None,
        InterviewResult::OnHold => status_after_scheduling(current),
    }
}

/// Decides whether a round concludes the pipeline on a pass.
///
/// The explicit flag recorded at scheduling time is authoritative. The marker
/// match on the round name exists only for events that never carried the
/// flag, preserving the behavior of callers that send free-text rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadePolicy {
    final_round_marker: String,
}

impl CascadePolicy {
    pub fn new(final_round_marker: impl Into<String>) -> Self {
        Self {
            final_round_marker: final_round_marker.into().to_ascii_lowercase(),
        }
    }

    pub fn is_final_round(&self, round_name: &str, explicit: Option<bool>) -> bool {
        match explicit {
            Some(flag) => flag,
            None => round_name
                .to_ascii_lowercase()
                .contains(&self.final_round_marker),
        }
    }
}

impl Default for CascadePolicy {
    fn default() -> Self {
        Self::new("final")
    }
}
