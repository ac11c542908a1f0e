//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types, the result envelope and the
//! timestamp value object that form the vocabulary of the engine.

mod envelope;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use envelope::{Envelope, FailureReport};
pub use errors::{ensure_finite, ComputationError, EngineError, ErrorCode, ValidationError};
pub use ids::{IssueId, NegotiationId, PartyId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
