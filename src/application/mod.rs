//! Application layer - Commands, Handlers and the job dispatcher.
//!
//! Handlers wrap the pure domain analyzers, add logging and failure context,
//! and turn every outcome into an envelope. The dispatcher routes tagged
//! jobs to handlers and runs them off the async runtime.

pub mod handlers;
pub mod jobs;

pub use handlers::{
    BuildRiskTreeCommand, BuildRiskTreeHandler, CheckZopaCommand, CheckZopaHandler,
    ConsolidatePackageCommand, ConsolidatePackageHandler, ConsolidatePackageResult,
    DraftPositionCommand, DraftPositionHandler, OptimizeBundlesCommand, OptimizeBundlesHandler,
    ProposeOfferCommand, ProposeOfferHandler, ProposeOfferResult, RecordApprovalCommand,
    RecordApprovalHandler, RecordApprovalResult,
};
pub use jobs::{AnalyticsJob, JobDispatcher, JobOutput, JobReport, UNPARSED_TASK};
