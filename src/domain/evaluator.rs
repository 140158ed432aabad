// src/domain/evaluator.rs
use thiserror::Error;
use crate::money::{Amount, Currency};
use super::bids::Bid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Cannot evaluate an auction without bids")]
    EmptyBids,

    #[error("Bids in different currencies: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },
}

/// Strategy for turning an auction's bids into the amount to be paid.
pub trait BidEvaluator {
    fn evaluate(&self, bids: &[Bid]) -> Result<Amount, EvaluationError>;
}

/// The winner pays what they bid.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestBid;

impl BidEvaluator for HighestBid {
    fn evaluate(&self, bids: &[Bid]) -> Result<Amount, EvaluationError> {
        let mut amounts = bids.iter().map(|bid| bid.bid_amount());
        let mut highest = amounts.next().ok_or(EvaluationError::EmptyBids)?;

        for amount in amounts {
            if amount.currency() != highest.currency() {
                return Err(EvaluationError::CurrencyMismatch {
                    expected: highest.currency(),
                    found: amount.currency(),
                });
            }
            if amount.value() > highest.value() {
                highest = amount;
            }
        }

        Ok(highest)
    }
}
