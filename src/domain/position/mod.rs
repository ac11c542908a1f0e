//! Position Module - Public and private position briefs.
//!
//! A public brief is what a party can say at the table. A private brief is
//! the internal assessment behind it: priority, BATNA leverage and the
//! concession plan.

mod brief;
mod drafter;

pub use brief::{
    BatnaAnalysis, BatnaStrength, FlexibilityLevel, InternalInterests, NegotiationApproach,
    PositionBrief, PositionKind, PriorityLevel, PrivatePosition, PublicInterests, PublicPosition,
    StrategyDetails,
};
pub use drafter::{DraftRequest, PositionDraft, PositionDrafter};
