//! Clock port - Source of the current time.
//!
//! Offers and package decisions carry timestamps. Handlers read them through
//! this port so tests can pin the time.

use crate::domain::foundation::Timestamp;

/// Port for reading the current time.
///
/// # Example
///
/// ```ignore
/// let offer = OfferProposer::propose(&request, clock.now())?;
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}
