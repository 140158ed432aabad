// src/lib.rs
pub mod config;
pub mod domain;
pub mod money;
pub mod persistence;
pub mod services;

pub use domain::*;
pub use money::*;
