//! A Rust client for the ORNL DAAC MODIS/VIIRS Land Products Subsets
//! RESTful web service.
//!
//! This crate implements a `nasawebservice`-style flow: list products, bands
//! and composite dates, then extract spatial subsets around a point, one
//! composite date at a time or as a concurrency-limited batch.
//!
//! Every web operation resolves to a `serde_json::Value`: the upstream
//! payload when the call succeeded, or a uniform error record `{status,
//! title, url, detail}` when it did not (transport failures carry the 777
//! sentinel status). Use [`is_error`] to tell the two apart.
//!
//! ## Quick start
//! ```no_run
//! use anyhow::Result;
//! use modisrest::{Mod13Q1Band, ModisClient, Product};
//!
//! fn main() -> Result<()> {
//!     let client = ModisClient::from_env()?;
//!     let subset = client.subset(
//!         Product::Mod13Q1,
//!         44.0478,
//!         10.3526,
//!         Mod13Q1Band::Ndvi,
//!         "A2020337",
//!         "A2020337",
//!         0,
//!         0,
//!     );
//!     println!("{subset:#}");
//!     Ok(())
//! }
//! ```
//!
//! For batches beyond the 10-date cap of a single `subset` call, see
//! [`ModisClient::execute_range`] (lazy, sequential) and
//! [`ModisClient::execute_range_concurrent`] (chunked fan-out).

#![forbid(unsafe_code)]

mod bands;
mod batch;
mod catalog;
mod client;
mod concurrent;
mod dates;
mod error;
mod response;

pub use bands::*;
pub use batch::SubsetSeries;
pub use catalog::{Product, Sensor, Tool};
pub use client::{DEFAULT_BASE_URL, ModisClient};
pub use dates::{interval, nearest};
pub use error::Error;
pub use response::{NO_HTTP_STATUS, is_error};
