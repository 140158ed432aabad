// src/services/mod.rs
// The back-office batch jobs.
//
// Each job fetches its candidates once, handles them one at a time and
// records per-item failures instead of aborting the run. A failure on
// one auction never stops the next one from being processed.
pub mod auction_closer;
pub mod notifier;
pub mod payment_generator;

pub use self::{auction_closer::*, notifier::*, payment_generator::*};

use thiserror::Error;

use crate::domain::{AuctionId, EvaluationError};
use crate::persistence::PersistenceError;

/// Something that went wrong during a batch run without stopping it.
#[derive(Debug, Error)]
pub enum BatchFailure {
    #[error("Could not fetch auctions: {0}")]
    Fetch(#[source] PersistenceError),

    #[error("Could not persist auction {auction_id}: {source}")]
    Persistence {
        auction_id: AuctionId,
        #[source]
        source: PersistenceError,
    },

    #[error("Could not notify closure of auction {auction_id}: {source}")]
    Notification {
        auction_id: AuctionId,
        #[source]
        source: NotificationError,
    },

    #[error("Could not evaluate bids of auction {auction_id}: {source}")]
    Evaluation {
        auction_id: AuctionId,
        #[source]
        source: EvaluationError,
    },
}

impl BatchFailure {
    pub fn auction_id(&self) -> Option<AuctionId> {
        match self {
            BatchFailure::Fetch(_) => None,
            BatchFailure::Persistence { auction_id, .. }
            | BatchFailure::Notification { auction_id, .. }
            | BatchFailure::Evaluation { auction_id, .. } => Some(*auction_id),
        }
    }
}
