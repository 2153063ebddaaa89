//! Request lifecycle shared by every domain slice.

/// Phase of one asynchronous operation.
///
/// Every dispatch walks the same three-phase machine: `Pending` on issue,
/// then exactly one of `Fulfilled` or `Rejected` when the round trip
/// settles. Failure is terminal for the dispatch; a retry is a new user
/// intent, never automatic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<E> {
    /// The request is in flight: `loading` set, prior `error` cleared.
    Pending,
    /// The request succeeded with an operation-specific result.
    Fulfilled(E),
    /// The request failed; entity data is left untouched.
    Rejected(String),
}
