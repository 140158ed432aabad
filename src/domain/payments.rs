// src/domain/payments.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::money::Amount;
use super::core::AuctionId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "auctionId")]
    pub for_auction: AuctionId,
    pub amount: Amount,
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,
}
