//! Job routing - Tagged analytics jobs and their dispatcher.
//!
//! A job arrives as `{"task": "<name>", "payload": {...}}`. The dispatcher
//! runs it on the blocking pool, bounded by the configured concurrency, and
//! answers with a [`JobReport`] carrying a fresh job id.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tracing::{debug, warn};
use uuid::Uuid;

use super::handlers::*;
use crate::config::{EngineConfig, WorkerConfig, MAX_CONCURRENT_JOBS_LIMIT};
use crate::domain::foundation::{ComputationError, EngineError, Envelope, ValidationError};
use crate::domain::optimizer::OptimizationResult;
use crate::domain::position::PositionDraft;
use crate::domain::risk::RiskAssessment;
use crate::domain::zopa::ZopaReport;
use crate::ports::Clock;

/// An analytics job as received from a worker queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "task", content = "payload", rename_all = "snake_case")]
pub enum AnalyticsJob {
    OptimizeBundles(OptimizeBundlesCommand),
    CheckZopa(CheckZopaCommand),
    BuildRiskTree(BuildRiskTreeCommand),
    ProposeOffer(Box<ProposeOfferCommand>),
    DraftPosition(Box<DraftPositionCommand>),
    ConsolidatePackage(Box<ConsolidatePackageCommand>),
    RecordApproval(Box<RecordApprovalCommand>),
}

impl AnalyticsJob {
    /// Wire name of the job's task.
    pub fn task_name(&self) -> &'static str {
        match self {
            AnalyticsJob::OptimizeBundles(_) => "optimize_bundles",
            AnalyticsJob::CheckZopa(_) => "check_zopa",
            AnalyticsJob::BuildRiskTree(_) => "build_risk_tree",
            AnalyticsJob::ProposeOffer(_) => "propose_offer",
            AnalyticsJob::DraftPosition(_) => "draft_position",
            AnalyticsJob::ConsolidatePackage(_) => "consolidate_package",
            AnalyticsJob::RecordApproval(_) => "record_approval",
        }
    }

    /// Parses one JSON-lines entry.
    pub fn from_json_line(line: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(line).map_err(|err| ValidationError::invalid_format("job", err.to_string()))
    }

    /// Parses a YAML or JSON document holding one job or a list of jobs.
    pub fn batch_from_document(document: &str) -> Result<Vec<Self>, ValidationError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Batch {
            Many(Vec<AnalyticsJob>),
            One(AnalyticsJob),
        }

        match serde_yaml::from_str(document) {
            Ok(Batch::Many(jobs)) => Ok(jobs),
            Ok(Batch::One(job)) => Ok(vec![job]),
            Err(err) => Err(ValidationError::invalid_format("document", err.to_string())),
        }
    }
}

/// Task name reported for input that could not be parsed into a job.
pub const UNPARSED_TASK: &str = "unknown";

/// Success payload of any job.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JobOutput {
    Optimization(OptimizationResult),
    Zopa(ZopaReport),
    Risk(RiskAssessment),
    Offer(ProposeOfferResult),
    Position(PositionDraft),
    Package(ConsolidatePackageResult),
    Approval(RecordApprovalResult),
}

/// Outcome of one job, as written back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub job_id: Uuid,
    pub task: String,
    #[serde(flatten)]
    pub outcome: Envelope<JobOutput>,
}

impl JobReport {
    /// Report for input that never became a job.
    pub fn rejected(task: impl Into<String>, err: ValidationError) -> Self {
        Self {
            job_id: Uuid::new_v4(),
            task: task.into(),
            outcome: Envelope::from_result(Err(err.into())),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

struct Handlers {
    optimize: OptimizeBundlesHandler,
    zopa: CheckZopaHandler,
    risk: BuildRiskTreeHandler,
    offer: ProposeOfferHandler,
    position: DraftPositionHandler,
    package: ConsolidatePackageHandler,
    approval: RecordApprovalHandler,
}

/// Routes jobs to their handlers.
///
/// Cloning is cheap; clones share handlers and the concurrency limit.
#[derive(Clone)]
pub struct JobDispatcher {
    handlers: Arc<Handlers>,
    permits: Arc<Semaphore>,
}

impl JobDispatcher {
    /// Creates a dispatcher.
    ///
    /// The concurrency limit is clamped to `1..=MAX_CONCURRENT_JOBS_LIMIT`, so
    /// an unvalidated zero still lets jobs run one at a time.
    pub fn new(engine: &EngineConfig, worker: &WorkerConfig, clock: Arc<dyn Clock>) -> Self {
        let permits = worker.max_concurrent_jobs.clamp(1, MAX_CONCURRENT_JOBS_LIMIT);
        if permits != worker.max_concurrent_jobs {
            warn!(
                configured = worker.max_concurrent_jobs,
                effective = permits,
                "Concurrency limit out of range, clamped"
            );
        }

        let handlers = Handlers {
            optimize: OptimizeBundlesHandler::new(engine.solver_settings(), engine.default_max_points),
            zopa: CheckZopaHandler::new(),
            risk: BuildRiskTreeHandler::new(),
            offer: ProposeOfferHandler::new(clock.clone()),
            position: DraftPositionHandler::new(),
            package: ConsolidatePackageHandler::new(engine.risk_note_threshold),
            approval: RecordApprovalHandler::new(clock),
        };

        Self {
            handlers: Arc::new(handlers),
            permits: Arc::new(Semaphore::new(permits)),
        }
    }

    /// Runs a job on the current thread.
    pub fn run(&self, job: AnalyticsJob) -> Envelope<JobOutput> {
        let h = &self.handlers;
        match job {
            AnalyticsJob::OptimizeBundles(cmd) => h.optimize.handle(cmd).map(JobOutput::Optimization),
            AnalyticsJob::CheckZopa(cmd) => h.zopa.handle(cmd).map(JobOutput::Zopa),
            AnalyticsJob::BuildRiskTree(cmd) => h.risk.handle(cmd).map(JobOutput::Risk),
            AnalyticsJob::ProposeOffer(cmd) => h.offer.handle(*cmd).map(JobOutput::Offer),
            AnalyticsJob::DraftPosition(cmd) => h.position.handle(*cmd).map(JobOutput::Position),
            AnalyticsJob::ConsolidatePackage(cmd) => h.package.handle(*cmd).map(JobOutput::Package),
            AnalyticsJob::RecordApproval(cmd) => h.approval.handle(*cmd).map(JobOutput::Approval),
        }
    }

    /// Runs a job on the blocking pool once a concurrency permit is free.
    ///
    /// A panicking or cancelled job is reported as a computation failure.
    pub async fn dispatch(&self, job: AnalyticsJob) -> JobReport {
        let job_id = Uuid::new_v4();
        let task = job.task_name();

        let outcome = match self.permits.clone().acquire_owned().await {
            Ok(permit) => {
                debug!(%job_id, task, "Dispatching job");
                let dispatcher = self.clone();
                let joined = tokio::task::spawn_blocking(move || {
                    let _permit = permit;
                    dispatcher.run(job)
                })
                .await;

                joined.unwrap_or_else(|err| {
                    warn!(%job_id, task, error = %err, "Job did not complete");
                    aborted(err.to_string())
                })
            }
            Err(err) => aborted(err.to_string()),
        };

        JobReport {
            job_id,
            task: task.to_string(),
            outcome,
        }
    }

    /// Dispatches a batch concurrently and returns reports in input order.
    ///
    /// Entries that failed to parse are reported as validation failures
    /// without being run.
    pub async fn dispatch_all(&self, batch: Vec<Result<AnalyticsJob, ValidationError>>) -> Vec<JobReport> {
        let pending: Vec<_> = batch
            .into_iter()
            .map(|entry| match entry {
                Ok(job) => {
                    let task = job.task_name();
                    let dispatcher = self.clone();
                    Ok((task, tokio::spawn(async move { dispatcher.dispatch(job).await })))
                }
                Err(err) => Err(JobReport::rejected(UNPARSED_TASK, err)),
            })
            .collect();

        let mut reports = Vec::with_capacity(pending.len());
        for entry in pending {
            let report = match entry {
                Ok((task, handle)) => handle.await.unwrap_or_else(|err| JobReport {
                    job_id: Uuid::new_v4(),
                    task: task.to_string(),
                    outcome: aborted(err.to_string()),
                }),
                Err(report) => report,
            };
            reports.push(report);
        }
        reports
    }
}

fn aborted(reason: String) -> Envelope<JobOutput> {
    Envelope::from_result(Err(EngineError::from(ComputationError::Aborted(reason))))
}
