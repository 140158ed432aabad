// src/services/notifier.rs
use log::info;
use thiserror::Error;

use crate::domain::Auction;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Notification transport failed: {0}")]
    Transport(String),
}

/// Tells interested parties that an auction has closed.
pub trait Notifier {
    fn notify_closed(&self, auction: &Auction) -> Result<(), NotificationError>;
}

/// Writes the closure to the log instead of sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_closed(&self, auction: &Auction) -> Result<(), NotificationError> {
        info!(
            "Auction {} ({}) closed with {} bid(s)",
            auction.auction_id,
            auction.description,
            auction.bids().len()
        );
        Ok(())
    }
}
