//! Domain layer containing the analytics engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, errors, envelope, timestamp, state machine)
//! - `negotiation` - Input model: issues, parties, preferences
//! - `optimizer` - Pareto bundle search over discretized issues
//! - `zopa` - Zone of possible agreement per issue
//! - `risk` - Scenario-weighted expected impact
//! - `strategy` - Per-round offer heuristics
//! - `position` - Public and private position briefs
//! - `package` - Final package consolidation and approvals
//!
//! Every engine component is a pure function of its request. Nothing here
//! performs I/O or reads the clock.

pub mod foundation;
pub mod negotiation;
pub mod optimizer;
pub mod package;
pub mod position;
pub mod risk;
pub mod strategy;
pub mod zopa;
