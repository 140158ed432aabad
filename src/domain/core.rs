// src/domain/core.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use crate::money::Amount;

pub type UserId = String;
pub type AuctionId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
}

impl User {
    pub fn new(user_id: impl Into<UserId>, name: impl Into<String>) -> Self {
        User {
            user_id: user_id.into(),
            name: name.into(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let parts: Vec<&str> = text.split('|').collect();

        match parts.as_slice() {
            [user_id, name] => Ok(User::new(*user_id, *name)),
            _ => Err(serde::de::Error::custom(
                format!("parsing User failed, could not interpret values: {:?}", parts)
            )),
        }
    }
}

impl Serialize for User {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.user_id, self.name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Errors {
    #[error("Bid amount must be positive: {0}")]
    NonPositiveBid(Amount),
}
