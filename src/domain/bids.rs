// src/domain/bids.rs
use serde::{Deserialize, Serialize};
use crate::money::Amount;
use super::core::{Errors, User};

/// A single offer on an auction. Its identity is its position in the
/// auction's bid list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBid")]
pub struct Bid {
    bidder: User,
    #[serde(rename = "amount")]
    bid_amount: Amount,
}

impl Bid {
    pub fn new(bidder: User, bid_amount: Amount) -> Result<Self, Errors> {
        if !bid_amount.is_positive() {
            return Err(Errors::NonPositiveBid(bid_amount));
        }
        Ok(Bid { bidder, bid_amount })
    }

    pub fn bidder(&self) -> &User {
        &self.bidder
    }

    pub fn bid_amount(&self) -> Amount {
        self.bid_amount
    }
}

#[derive(Deserialize)]
struct RawBid {
    bidder: User,
    amount: Amount,
}

impl TryFrom<RawBid> for Bid {
    type Error = Errors;

    fn try_from(raw: RawBid) -> Result<Self, Self::Error> {
        Bid::new(raw.bidder, raw.amount)
    }
}
