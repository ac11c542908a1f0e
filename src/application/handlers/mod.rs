//! Application handlers.
//!
//! One command handler per analytics job. Handlers never return `Err`; every
//! outcome is reported through an [`Envelope`](crate::domain::foundation::Envelope).

pub mod build_risk_tree;
pub mod check_zopa;
pub mod consolidate_package;
pub mod draft_position;
pub mod optimize_bundles;
pub mod propose_offer;
pub mod record_approval;

pub use build_risk_tree::{BuildRiskTreeCommand, BuildRiskTreeHandler};
pub use check_zopa::{CheckZopaCommand, CheckZopaHandler};
pub use consolidate_package::{
    ConsolidatePackageCommand, ConsolidatePackageHandler, ConsolidatePackageResult,
};
pub use draft_position::{DraftPositionCommand, DraftPositionHandler};
pub use optimize_bundles::{OptimizeBundlesCommand, OptimizeBundlesHandler};
pub use propose_offer::{ProposeOfferCommand, ProposeOfferHandler, ProposeOfferResult};
pub use record_approval::{RecordApprovalCommand, RecordApprovalHandler, RecordApprovalResult};
