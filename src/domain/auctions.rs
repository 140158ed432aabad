// src/domain/auctions.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::bids::Bid;
use super::core::AuctionId;

/// Number of days an auction stays open before the closer picks it up.
pub const CLOSING_AGE_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    #[serde(rename = "id")]
    pub auction_id: AuctionId,
    pub description: String,
    #[serde(rename = "openedAt")]
    pub opened_at: NaiveDate,
    #[serde(default)]
    bids: Vec<Bid>,
    #[serde(default)]
    closed: bool,
}

impl Auction {
    pub fn new(auction_id: AuctionId, description: impl Into<String>, opened_at: NaiveDate) -> Self {
        Auction {
            auction_id,
            description: description.into(),
            opened_at,
            bids: Vec::new(),
            closed: false,
        }
    }

    /// Bids in the order they were placed.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn place_bid(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Closing is one way; nothing in the batch reopens an auction.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whether the auction has been open for at least [`CLOSING_AGE_DAYS`] as of `today`.
    pub fn is_due_for_closing(&self, today: NaiveDate) -> bool {
        (today - self.opened_at).num_days() >= CLOSING_AGE_DAYS
    }
}
