// src/persistence/mod.rs
// Storage capabilities consumed by the batch jobs.
//
// The jobs only ever see these traits. The in-memory stores back the
// tests and demos, the JSON file stores back the `auction-batch` binary.
pub mod in_memory;
pub mod json_file;

use thiserror::Error;

use crate::domain::{Auction, AuctionId, Payment};

pub use self::in_memory::{InMemoryAuctionRepository, InMemoryPaymentRepository};
pub use self::json_file::{JsonFileAuctionRepository, JsonFilePaymentRepository};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown auction: {0}")]
    UnknownAuction(AuctionId),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub trait AuctionRepository {
    /// Auctions that have not been closed yet, in storage order.
    fn current_open_auctions(&self) -> Result<Vec<Auction>, PersistenceError>;

    fn closed_auctions(&self) -> Result<Vec<Auction>, PersistenceError>;

    /// Stores the current state of an auction that already exists.
    fn persist_update(&self, auction: &Auction) -> Result<(), PersistenceError>;
}

pub trait PaymentRepository {
    fn save(&self, payment: &Payment) -> Result<(), PersistenceError>;
}
