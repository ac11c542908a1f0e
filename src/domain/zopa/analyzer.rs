//! ZOPA Analyzer - Intersection of party acceptance ranges.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ensure_finite, EngineError, IssueId, PartyId};
use crate::domain::negotiation::Issue;

/// Party id → issue id → value.
pub type PartyIssueValues = BTreeMap<PartyId, BTreeMap<IssueId, f64>>;

/// Input for a ZOPA check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZopaRequest {
    pub issues: Vec<Issue>,
    /// The parties taking part are the keys of this map.
    pub reservations: PartyIssueValues,
    #[serde(default)]
    pub targets: PartyIssueValues,
}

/// Closed interval `[low, high]`, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ZopaInterval {
    pub low: f64,
    pub high: f64,
}

impl ZopaInterval {
    /// Width of the interval. Zero for a single agreeable point.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if `value` lies inside the interval.
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl From<(f64, f64)> for ZopaInterval {
    fn from((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }
}

impl From<ZopaInterval> for (f64, f64) {
    fn from(interval: ZopaInterval) -> Self {
        (interval.low, interval.high)
    }
}

/// One party's acceptance range for an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyRange {
    pub party_id: PartyId,
    pub low: f64,
    pub high: f64,
}

/// ZOPA outcome for a single issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueZopa {
    pub issue_id: IssueId,
    pub has_zopa: bool,
    pub interval: Option<ZopaInterval>,
    pub party_ranges: Vec<PartyRange>,
}

/// ZOPA outcome for all issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZopaReport {
    pub issues: Vec<IssueZopa>,
    pub all_issues_have_zopa: bool,
}

impl ZopaReport {
    /// Issues with no zone of possible agreement, in input order.
    pub fn infeasible_issue_ids(&self) -> Vec<&IssueId> {
        self.issues
            .iter()
            .filter(|issue| !issue.has_zopa)
            .map(|issue| &issue.issue_id)
            .collect()
    }

    /// Looks up the outcome for one issue.
    pub fn issue(&self, issue_id: &str) -> Option<&IssueZopa> {
        self.issues.iter().find(|issue| issue.issue_id.as_str() == issue_id)
    }
}

/// Analyzer for zones of possible agreement.
pub struct ZopaAnalyzer;

impl ZopaAnalyzer {
    /// Computes the per-issue ZOPA and global feasibility.
    ///
    /// A party's range is `[min(r, t), max(r, t)]`, so reversed reservation
    /// and target values are tolerated. Missing reservations default to the
    /// issue minimum and missing targets to the issue maximum.
    ///
    /// # Edge Cases
    /// - No parties: every issue has no ZOPA
    /// - No issues: `all_issues_have_zopa` is false
    /// - Touching ranges: a zero-width interval counts as a ZOPA
    ///
    /// # Errors
    /// - `ComputationError` if any bound, reservation or target is non-finite
    pub fn check(request: &ZopaRequest) -> Result<ZopaReport, EngineError> {
        let issues = request
            .issues
            .iter()
            .map(|issue| Self::check_issue(issue, request))
            .collect::<Result<Vec<_>, _>>()?;

        let all_issues_have_zopa = !issues.is_empty() && issues.iter().all(|i| i.has_zopa);

        Ok(ZopaReport {
            issues,
            all_issues_have_zopa,
        })
    }

    fn check_issue(issue: &Issue, request: &ZopaRequest) -> Result<IssueZopa, EngineError> {
        issue.validate()?;

        let mut party_ranges = Vec::with_capacity(request.reservations.len());
        for (party_id, reservations) in &request.reservations {
            let reservation = reservations
                .get(&issue.id)
                .copied()
                .unwrap_or(issue.min_value);
            let target = request
                .targets
                .get(party_id)
                .and_then(|targets| targets.get(&issue.id))
                .copied()
                .unwrap_or(issue.max_value);

            let reservation = ensure_finite("reservation_value", reservation)?;
            let target = ensure_finite("target_value", target)?;

            party_ranges.push(PartyRange {
                party_id: party_id.clone(),
                low: reservation.min(target),
                high: reservation.max(target),
            });
        }

        let interval = Self::intersect(&party_ranges);

        Ok(IssueZopa {
            issue_id: issue.id.clone(),
            has_zopa: interval.is_some(),
            interval,
            party_ranges,
        })
    }

    fn intersect(ranges: &[PartyRange]) -> Option<ZopaInterval> {
        let low = ranges.iter().map(|r| r.low).reduce(f64::max)?;
        let high = ranges.iter().map(|r| r.high).reduce(f64::min)?;

        (low <= high).then_some(ZopaInterval { low, high })
    }
}
