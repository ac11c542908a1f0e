//! Strategy Module - Per-round offer heuristics.
//!
//! # Components
//!
//! - `ConcessionAnalysis` - Reads a party's concession behavior from its prior offers
//! - `OfferStrategy` - Deterministic strategy table keyed by round, weight and pattern
//! - `OfferProposer` - Proposed value, confidence, flexibility and rationale
//!
//! All functions are pure. The offer timestamp is supplied by the caller.

mod concession;
mod offer;
mod proposer;

pub use concession::{ConcessionAnalysis, ConcessionPattern, Consistency, PriorOffer};
pub use offer::{offer_confidence, Flexibility, Offer, OfferStrategy, MAX_CONFIDENCE, MIN_CONFIDENCE};
pub use proposer::{OfferProposer, OfferRequest};
