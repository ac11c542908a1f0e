//! ZOPA Module - Zone of possible agreement per issue.
//!
//! Each party accepts any value between its reservation and its target. The
//! zone of possible agreement for an issue is the intersection of those
//! ranges across all parties.

mod analyzer;

pub use analyzer::{
    IssueZopa, PartyIssueValues, PartyRange, ZopaAnalyzer, ZopaInterval, ZopaReport, ZopaRequest,
};
