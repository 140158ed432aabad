// src/services/payment_generator.rs
use log::{error, info, warn};

use crate::domain::{payment_due_date, Auction, BidEvaluator, Clock, Payment, SystemClock};
use crate::persistence::{AuctionRepository, PaymentRepository};
use super::BatchFailure;

/// Creates a payment for every closed auction.
pub struct PaymentGenerator<'a> {
    auctions: &'a dyn AuctionRepository,
    payments: &'a dyn PaymentRepository,
    evaluator: &'a dyn BidEvaluator,
    clock: &'a dyn Clock,
    total_generated: usize,
    failures: Vec<BatchFailure>,
}

impl<'a> PaymentGenerator<'a> {
    /// Uses the host's calendar for due dates.
    pub fn new(
        auctions: &'a dyn AuctionRepository,
        payments: &'a dyn PaymentRepository,
        evaluator: &'a dyn BidEvaluator,
    ) -> Self {
        Self::with_clock(auctions, payments, evaluator, &SystemClock)
    }

    pub fn with_clock(
        auctions: &'a dyn AuctionRepository,
        payments: &'a dyn PaymentRepository,
        evaluator: &'a dyn BidEvaluator,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            auctions,
            payments,
            evaluator,
            clock,
            total_generated: 0,
            failures: Vec::new(),
        }
    }

    pub fn run(&mut self) {
        self.total_generated = 0;
        self.failures.clear();

        let closed = match self.auctions.closed_auctions() {
            Ok(closed) => closed,
            Err(e) => {
                error!("Fetching closed auctions failed: {}", e);
                self.failures.push(BatchFailure::Fetch(e));
                return;
            }
        };

        for auction in &closed {
            match self.generate(auction) {
                Ok(()) => self.total_generated += 1,
                Err(failure) => {
                    warn!("{}", failure);
                    self.failures.push(failure);
                }
            }
        }

        info!(
            "Generated {} payment(s), {} failure(s)",
            self.total_generated,
            self.failures.len()
        );
    }

    fn generate(&self, auction: &Auction) -> Result<(), BatchFailure> {
        let amount = self
            .evaluator
            .evaluate(auction.bids())
            .map_err(|source| BatchFailure::Evaluation {
                auction_id: auction.auction_id,
                source,
            })?;

        let payment = Payment {
            for_auction: auction.auction_id,
            amount,
            due_date: payment_due_date(self.clock.today()),
        };

        self.payments
            .save(&payment)
            .map_err(|source| BatchFailure::Persistence {
                auction_id: auction.auction_id,
                source,
            })
    }

    pub fn total_generated(&self) -> usize {
        self.total_generated
    }

    /// Failures recorded during the last run.
    pub fn failures(&self) -> &[BatchFailure] {
        &self.failures
    }
}
