use crate::infra::InMemoryRecruitmentRepository;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use std::sync::Arc;
use talent_flow::error::AppError;
use talent_flow::workflows::recruitment::{
    CandidatePipeline, CascadeOutcome, CascadePolicy, InterviewSchedule, JobPositionId,
    NewApplication, NewCandidate, NewInterview, OrganizationId, PipelineSnapshot,
    RecruitmentService, RecruitmentServiceError, UserId,
};

const DEMO_ORGANIZATION: OrganizationId = OrganizationId(1);
const DEMO_USER: UserId = UserId(7);

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date for the first scheduled round (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) first_round_on: Option<NaiveDate>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let first_round_on = args
        .first_round_on
        .unwrap_or_else(|| Local::now().date_naive());
    let service = demo_service();

    println!("Recruitment status cascade demo");

    if let Err(err) = walk_pipeline(&service, first_round_on) {
        println!("  Demo aborted: {err}");
        return Ok(());
    }

    match service.pipeline_report(DEMO_ORGANIZATION) {
        Ok(snapshot) => {
            println!();
            render_snapshot(&snapshot);
        }
        Err(err) => println!("  Pipeline report unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn run_pipeline_report() -> Result<(), AppError> {
    let first_round_on = Local::now().date_naive();
    let service = demo_service();

    if let Err(err) = walk_pipeline(&service, first_round_on) {
        println!("Seeding failed: {err}");
        return Ok(());
    }

    match service.pipeline_report(DEMO_ORGANIZATION) {
        Ok(snapshot) => render_snapshot(&snapshot),
        Err(err) => println!("Pipeline report unavailable: {err}"),
    }

    Ok(())
}

fn demo_service() -> RecruitmentService<InMemoryRecruitmentRepository> {
    let repository = Arc::new(InMemoryRecruitmentRepository::default());
    RecruitmentService::new(repository, CascadePolicy::default())
}

/// Two candidates walk the pipeline: one passes the final round, one fails
/// the first. Each step prints the statuses the cascade left behind.
fn walk_pipeline(
    service: &RecruitmentService<InMemoryRecruitmentRepository>,
    first_round_on: NaiveDate,
) -> Result<(), RecruitmentServiceError> {
    let selected = service.register_candidate(NewCandidate {
        organization_id: DEMO_ORGANIZATION,
        full_name: "Priya Raman".to_string(),
        created_by: DEMO_USER,
    })?;
    println!(
        "- Registered {} -> candidate status {}",
        selected.full_name,
        selected.status.label()
    );

    let application = service.submit_application(NewApplication {
        organization_id: DEMO_ORGANIZATION,
        candidate_id: selected.id,
        job_position_id: JobPositionId(42),
        created_by: DEMO_USER,
    })?;
    println!(
        "  Applied to position {} -> application status {}",
        application.job_position_id.0,
        application.status.label()
    );

    let (round, cascade) = service.schedule_interview(
        application.id,
        NewInterview {
            round_name: "Technical Screen".to_string(),
            final_round: false,
            scheduled_on: first_round_on,
            created_by: DEMO_USER,
        },
    )?;
    print_round(&round, &cascade);

    let (round, cascade) = service.submit_feedback(round.id, "Pass", DEMO_USER)?;
    print_feedback(&round, &cascade);

    let (round, cascade) = service.schedule_interview(
        application.id,
        NewInterview {
            round_name: "Final Round".to_string(),
            final_round: true,
            scheduled_on: first_round_on + Duration::days(7),
            created_by: DEMO_USER,
        },
    )?;
    print_round(&round, &cascade);

    let (round, cascade) = service.submit_feedback(round.id, "Pass", DEMO_USER)?;
    print_feedback(&round, &cascade);

    let rejected = service.register_candidate(NewCandidate {
        organization_id: DEMO_ORGANIZATION,
        full_name: "Miles Archer".to_string(),
        created_by: DEMO_USER,
    })?;
    println!(
        "- Registered {} -> candidate status {}",
        rejected.full_name,
        rejected.status.label()
    );

    let application = service.submit_application(NewApplication {
        organization_id: DEMO_ORGANIZATION,
        candidate_id: rejected.id,
        job_position_id: JobPositionId(42),
        created_by: DEMO_USER,
    })?;
    let (round, cascade) = service.schedule_interview(
        application.id,
        NewInterview {
            round_name: "Technical Screen".to_string(),
            final_round: false,
            scheduled_on: first_round_on + Duration::days(1),
            created_by: DEMO_USER,
        },
    )?;
    print_round(&round, &cascade);

    let (round, cascade) = service.submit_feedback(round.id, "Fail", DEMO_USER)?;
    print_feedback(&round, &cascade);

    for candidate_id in [selected.id, rejected.id] {
        let CandidatePipeline {
            candidate,
            applications,
        } = service.candidate_pipeline(candidate_id)?;
        println!(
            "- {}: candidate {} with {} application(s)",
            candidate.full_name,
            candidate.status.label(),
            applications.len()
        );
    }

    Ok(())
}

fn print_round(round: &InterviewSchedule, cascade: &CascadeOutcome) {
    println!(
        "  Scheduled {} for {} -> application {}, candidate {}",
        round.round_name,
        round.scheduled_on,
        cascade.application_status.label(),
        cascade.candidate_status.label()
    );
}

fn print_feedback(round: &InterviewSchedule, cascade: &CascadeOutcome) {
    let result = round
        .result
        .map(|result| result.label())
        .unwrap_or("pending");
    println!(
        "  Feedback {} on {} -> application {}, candidate {}",
        result,
        round.round_name,
        cascade.application_status.label(),
        cascade.candidate_status.label()
    );
}

fn render_snapshot(snapshot: &PipelineSnapshot) {
    println!(
        "Pipeline snapshot: {} candidate(s), {} application(s)",
        snapshot.total_candidates, snapshot.total_applications
    );

    println!("Candidates by status");
    for entry in &snapshot.candidate_statuses {
        println!("- {}: {}", entry.status_label, entry.count);
    }

    println!("Applications by status");
    for entry in &snapshot.application_statuses {
        println!("- {}: {}", entry.status_label, entry.count);
    }

    if snapshot.awaiting_feedback.is_empty() {
        println!("Rounds awaiting feedback: none");
    } else {
        println!("Rounds awaiting feedback");
        for entry in &snapshot.awaiting_feedback {
            println!(
                "- {} (application {}), scheduled {}, status {}",
                entry.round_name, entry.application_id.0, entry.scheduled_on, entry.status_label
            );
        }
    }
}
