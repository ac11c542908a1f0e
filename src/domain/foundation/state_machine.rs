//! Transition tables for workflow status enums.

use super::ValidationError;

/// A status enum whose legal moves are listed in a static table.
///
/// ```ignore
/// let decided = ApprovalStatus::Pending.transition_to(ApprovalStatus::Approved)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// States reachable in one step from `self`.
    fn successors(&self) -> &'static [Self];

    fn can_transition_to(&self, target: &Self) -> bool {
        self.successors().contains(target)
    }

    /// Returns `target` if the table allows the move.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "status",
                format!("{:?} cannot move to {:?}", self, target),
            ));
        }
        Ok(target)
    }

    /// No successors.
    fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }
}
