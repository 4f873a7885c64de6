//! Outbound client for the KOBIS (Korean Film Council) daily box-office API.
//!
//! The crate owns everything that crosses the wire: the target-date format,
//! the JSON envelope, the domain types the UI renders, and the error taxonomy.

pub mod client;
pub mod config;
pub mod date;
pub mod error;
pub mod model;

pub use client::{RankingClient, RankingSource};
pub use config::ApiConfig;
pub use date::TargetDate;
pub use error::{DateError, ErrorKind, FetchError};
pub use model::{RankingEntry, RankingResult};
