// src/persistence/in_memory.rs
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::*;

/// Fake in-memory auction store.
///
/// Auctions are kept ordered by id so fetches are deterministic.
#[derive(Debug, Default)]
pub struct InMemoryAuctionRepository {
    auctions: Mutex<BTreeMap<AuctionId, Auction>>,
}

impl InMemoryAuctionRepository {
    pub fn new(auctions: impl IntoIterator<Item = Auction>) -> Self {
        Self {
            auctions: Mutex::new(
                auctions
                    .into_iter()
                    .map(|auction| (auction.auction_id, auction))
                    .collect(),
            ),
        }
    }

    pub fn get(&self, auction_id: AuctionId) -> Option<Auction> {
        self.lock().ok()?.get(&auction_id).cloned()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<AuctionId, Auction>>, PersistenceError> {
        self.auctions
            .lock()
            .map_err(|_| PersistenceError::Unavailable("auction store lock poisoned".to_string()))
    }

    fn matching(&self, closed: bool) -> Result<Vec<Auction>, PersistenceError> {
        Ok(self
            .lock()?
            .values()
            .filter(|auction| auction.is_closed() == closed)
            .cloned()
            .collect())
    }
}

impl AuctionRepository for InMemoryAuctionRepository {
    fn current_open_auctions(&self) -> Result<Vec<Auction>, PersistenceError> {
        self.matching(false)
    }

    fn closed_auctions(&self) -> Result<Vec<Auction>, PersistenceError> {
        self.matching(true)
    }

    fn persist_update(&self, auction: &Auction) -> Result<(), PersistenceError> {
        let mut auctions = self.lock()?;
        match auctions.get_mut(&auction.auction_id) {
            Some(stored) => {
                *stored = auction.clone();
                Ok(())
            }
            None => Err(PersistenceError::UnknownAuction(auction.auction_id)),
        }
    }
}

/// Fake in-memory payment store, keeping payments in the order they were saved.
#[derive(Debug, Default)]
pub struct InMemoryPaymentRepository {
    payments: Mutex<Vec<Payment>>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payments(&self) -> Vec<Payment> {
        self.payments
            .lock()
            .map(|payments| payments.clone())
            .unwrap_or_default()
    }
}

impl PaymentRepository for InMemoryPaymentRepository {
    fn save(&self, payment: &Payment) -> Result<(), PersistenceError> {
        self.payments
            .lock()
            .map_err(|_| PersistenceError::Unavailable("payment store lock poisoned".to_string()))?
            .push(payment.clone());
        Ok(())
    }
}
