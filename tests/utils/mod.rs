// Not every test file uses every helper
#![allow(dead_code)]

use auction_batch::domain::{Auction, AuctionId, Bid, Clock, User};
use auction_batch::money::{Amount, Currency};
use auction_batch::persistence::{AuctionRepository, PaymentRepository, PersistenceError};
use auction_batch::services::{NotificationError, Notifier};
use auction_batch::domain::Payment;
use chrono::{Days, NaiveDate};
use mockall::mock;
use std::sync::atomic::{AtomicI64, Ordering};
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

mock! {
    pub AuctionRepo {}

    impl AuctionRepository for AuctionRepo {
        fn current_open_auctions(&self) -> Result<Vec<Auction>, PersistenceError>;
        fn closed_auctions(&self) -> Result<Vec<Auction>, PersistenceError>;
        fn persist_update(&self, auction: &Auction) -> Result<(), PersistenceError>;
    }
}

mock! {
    pub PaymentRepo {}

    impl PaymentRepository for PaymentRepo {
        fn save(&self, payment: &Payment) -> Result<(), PersistenceError>;
    }
}

mock! {
    pub Mailer {}

    impl Notifier for Mailer {
        fn notify_closed(&self, auction: &Auction) -> Result<(), NotificationError>;
    }
}

mock! {
    pub Calendar {}

    impl Clock for Calendar {
        fn today(&self) -> NaiveDate;
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn sample_today() -> NaiveDate {
    date(2017, 11, 20)
}

pub fn a_long_time_ago() -> NaiveDate {
    date(1999, 2, 20)
}

pub fn yesterday() -> NaiveDate {
    sample_today() - Days::new(1)
}

pub fn days_ago(days: u64) -> NaiveDate {
    sample_today() - Days::new(days)
}

pub fn jose() -> User {
    User::new("jose", "José da Silva")
}

pub fn maria() -> User {
    User::new("maria", "Maria da Penha")
}

pub fn brl(value: i64) -> Amount {
    Amount::new(Currency::BRL, value)
}

pub fn db_down() -> PersistenceError {
    PersistenceError::Unavailable("database is down".to_string())
}

pub fn smtp_down() -> NotificationError {
    NotificationError::Transport("smtp server unreachable".to_string())
}

static NEXT_AUCTION_ID: AtomicI64 = AtomicI64::new(1);

/// Builds auctions for tests, one call chain per auction.
pub struct AuctionBuilder {
    auction_id: AuctionId,
    description: String,
    opened_at: NaiveDate,
    bids: Vec<Bid>,
    closed: bool,
}

impl AuctionBuilder {
    pub fn new() -> Self {
        AuctionBuilder {
            auction_id: NEXT_AUCTION_ID.fetch_add(1, Ordering::SeqCst),
            description: "auction".to_string(),
            opened_at: sample_today(),
            bids: Vec::new(),
            closed: false,
        }
    }

    pub fn for_item(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn opened_on(mut self, opened_at: NaiveDate) -> Self {
        self.opened_at = opened_at;
        self
    }

    pub fn bid(mut self, bidder: User, value: i64) -> Self {
        self.bids.push(Bid::new(bidder, brl(value)).unwrap());
        self
    }

    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    pub fn build(self) -> Auction {
        let mut auction = Auction::new(self.auction_id, self.description, self.opened_at);
        for bid in self.bids {
            auction.place_bid(bid);
        }
        if self.closed {
            auction.close();
        }
        auction
    }
}
