// src/main.rs
use auction_batch::config::{BatchConfig, ConfigError};
use auction_batch::domain::{HighestBid, SystemClock};
use auction_batch::persistence::{JsonFileAuctionRepository, JsonFilePaymentRepository};
use auction_batch::services::{AuctionCloser, LogNotifier, PaymentGenerator};
use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
enum BatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn run_batch(config: &BatchConfig) {
    let auctions = JsonFileAuctionRepository::new(config.auctions_path.clone());
    let payments = JsonFilePaymentRepository::new(config.payments_path.clone());
    let clock = SystemClock;

    if config.job.closes_auctions() {
        let mut closer = AuctionCloser::new(&auctions, &LogNotifier, &clock);
        closer.run();
    }

    if config.job.generates_payments() {
        let mut generator = PaymentGenerator::with_clock(&auctions, &payments, &HighestBid, &clock);
        generator.run();
    }
}

fn main() -> Result<(), BatchError> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "auction_batch=info");
    }
    env_logger::init();

    let config = BatchConfig::from_env()?;
    info!(
        "Running {:?} against {} and {}",
        config.job,
        config.auctions_path.display(),
        config.payments_path.display()
    );

    run_batch(&config);
    Ok(())
}
