//! Publication analytics for comparing academic author profiles.
//!
//! The external analysis service scrapes a scholar profile and returns a
//! finished [`models::AuthorSnapshot`]; everything after that point happens
//! here, in memory. The [`engine`] module turns a snapshot's records into
//! the views a comparison UI renders: canonical venue names, rank tiers,
//! authorship roles, yearly timelines, merged keyword sets, and the
//! filtered/sorted/paginated publication table.
//!
//! # Example
//!
//! ```no_run
//! use scholar_compare::{AnalysisClient, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = AnalysisClient::new(config)?;
//!
//!     let snapshot = client
//!         .fetch_snapshot("https://scholar.google.com/citations?user=abc123", false)
//!         .await?;
//!     let venues = scholar_compare::engine::top_venues(&snapshot.records, 5);
//!     println!("{venues:?}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod formatters;
pub mod models;

pub use client::AnalysisClient;
pub use config::Config;
pub use error::{ClientError, ServiceError};
