//! Vote toggling for drawings.
//!
//! A user holds at most one vote per subject. Requesting the vote already held
//! retracts it; requesting the other polarity switches it. [`reconcile`] turns
//! the previous vote and the request into the next stored vote and the counter
//! deltas, and [`VoteLedger`] plays the storage side of that exchange.

/// Vote error types.
pub mod error;
/// In-memory vote storage with per-subject tallies.
pub mod ledger;
/// The vote toggle table.
pub mod reconcile;
/// Vote polarity and identifier types.
pub mod types;

pub use error::VoteError;
pub use ledger::{Tally, VoteLedger, VoteReceipt};
pub use reconcile::{Reconciliation, StorageOp, reconcile, reconcile_request};
pub use types::{SubjectId, UserId, VoteType};
