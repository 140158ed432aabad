// src/domain/mod.rs
pub mod auctions;
pub mod bids;
pub mod calendar;
pub mod core;
pub mod evaluator;
pub mod payments;

pub use self::auctions::*;
pub use self::bids::*;
pub use self::calendar::*;
pub use self::core::*;
pub use self::evaluator::*;
pub use self::payments::*;
