// src/services/auction_closer.rs
use log::{debug, error, info, warn};

use crate::domain::{Auction, Clock};
use crate::persistence::AuctionRepository;
use super::{BatchFailure, Notifier};

/// Closes open auctions that have been running for at least a week.
///
/// Every auction found due counts towards [`AuctionCloser::total_closed`],
/// including the ones whose update could not be stored. The count means
/// "decided to close", not "closed and saved"; check
/// [`AuctionCloser::failures`] for the ones that did not make it.
pub struct AuctionCloser<'a> {
    auctions: &'a dyn AuctionRepository,
    notifier: &'a dyn Notifier,
    clock: &'a dyn Clock,
    total_closed: usize,
    failures: Vec<BatchFailure>,
}

impl<'a> AuctionCloser<'a> {
    pub fn new(
        auctions: &'a dyn AuctionRepository,
        notifier: &'a dyn Notifier,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            auctions,
            notifier,
            clock,
            total_closed: 0,
            failures: Vec::new(),
        }
    }

    /// Runs one pass over the open auctions and returns how many were closed.
    pub fn run(&mut self) -> usize {
        self.total_closed = 0;
        self.failures.clear();

        let open = match self.auctions.current_open_auctions() {
            Ok(open) => open,
            Err(e) => {
                error!("Fetching open auctions failed: {}", e);
                self.failures.push(BatchFailure::Fetch(e));
                return 0;
            }
        };

        let today = self.clock.today();
        debug!("Checking {} open auction(s) as of {}", open.len(), today);

        for mut auction in open {
            if !auction.is_due_for_closing(today) {
                continue;
            }
            auction.close();
            self.total_closed += 1;
            self.store_and_notify(&auction);
        }

        info!(
            "Closed {} auction(s), {} failure(s)",
            self.total_closed,
            self.failures.len()
        );
        self.total_closed
    }

    fn store_and_notify(&mut self, auction: &Auction) {
        if let Err(source) = self.auctions.persist_update(auction) {
            error!("Persisting closed auction {} failed: {}", auction.auction_id, source);
            self.failures.push(BatchFailure::Persistence {
                auction_id: auction.auction_id,
                source,
            });
            return;
        }

        if let Err(source) = self.notifier.notify_closed(auction) {
            warn!("Notifying closure of auction {} failed: {}", auction.auction_id, source);
            self.failures.push(BatchFailure::Notification {
                auction_id: auction.auction_id,
                source,
            });
        }
    }

    pub fn total_closed(&self) -> usize {
        self.total_closed
    }

    /// Failures recorded during the last run.
    pub fn failures(&self) -> &[BatchFailure] {
        &self.failures
    }
}
