// src/persistence/json_file.rs
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_reader, to_string_pretty};

use super::*;

fn read_json_array<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>, PersistenceError> {
    let file = match File::open(path) {
        Ok(file) => file,
        // A missing file is an empty store
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(from_reader(BufReader::new(file))?)
}

fn write_json_array<T: Serialize, P: AsRef<Path>>(path: P, items: &[T]) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let tmp_path = staging_path(path);

    let json = to_string_pretty(items)?;
    let mut file = File::create(&tmp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;

    // The store is swapped whole; readers see the old or the new contents
    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Sibling file the new contents are written to before being renamed over `path`.
fn staging_path(path: &Path) -> PathBuf {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    PathBuf::from(staging)
}

/// Auctions stored as a single JSON array, rewritten on every update.
#[derive(Debug, Clone)]
pub struct JsonFileAuctionRepository {
    path: PathBuf,
}

impl JsonFileAuctionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn all(&self) -> Result<Vec<Auction>, PersistenceError> {
        read_json_array(&self.path)
    }
}

impl AuctionRepository for JsonFileAuctionRepository {
    fn current_open_auctions(&self) -> Result<Vec<Auction>, PersistenceError> {
        Ok(self.all()?.into_iter().filter(|a| !a.is_closed()).collect())
    }

    fn closed_auctions(&self) -> Result<Vec<Auction>, PersistenceError> {
        Ok(self.all()?.into_iter().filter(|a| a.is_closed()).collect())
    }

    fn persist_update(&self, auction: &Auction) -> Result<(), PersistenceError> {
        let mut auctions = self.all()?;
        let stored = auctions
            .iter_mut()
            .find(|stored| stored.auction_id == auction.auction_id)
            .ok_or(PersistenceError::UnknownAuction(auction.auction_id))?;
        *stored = auction.clone();

        debug!("Writing auction {} to {}", auction.auction_id, self.path.display());
        write_json_array(&self.path, &auctions)
    }
}

/// Payments appended to a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonFilePaymentRepository {
    path: PathBuf,
}

impl JsonFilePaymentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn all(&self) -> Result<Vec<Payment>, PersistenceError> {
        read_json_array(&self.path)
    }
}

impl PaymentRepository for JsonFilePaymentRepository {
    fn save(&self, payment: &Payment) -> Result<(), PersistenceError> {
        let mut payments = self.all()?;
        payments.push(payment.clone());

        debug!("Writing payment for auction {} to {}", payment.for_auction, self.path.display());
        write_json_array(&self.path, &payments)
    }
}
