//! Client for railwayapi.com's v2 REST API.
//!
//! The API reports Indian Railways data (PNR status, live running status,
//! routes, seat availability, fares, arrivals boards, lookups) as JSON
//! whose temporal fields are loosely formatted strings. This crate decodes
//! those responses into typed values: clock times become
//! [`chrono::NaiveTime`], calendar dates [`chrono::NaiveDate`], durations
//! [`chrono::Duration`], and `"Y"`/`"N"` flags `bool`. Absent or
//! placeholder text decodes to `None`; malformed text fails the decode
//! with an error naming the offending field.
//!
//! ```no_run
//! use rail_client::client::{RailClient, RailConfig};
//! use rail_client::request::{LiveStatusRequest, PnrStatusRequest};
//!
//! # async fn run() -> Result<(), rail_client::error::RailError> {
//! let client = RailClient::new(RailConfig::new("my-api-key"))?;
//!
//! let pnr = client.pnr_status(PnrStatusRequest { pnr: 2124289856 }).await?;
//! println!("chart prepared: {:?}", pnr.chart_prepared);
//!
//! let live = client
//!     .live_train_status(LiveStatusRequest {
//!         train_number: 12138,
//!         date: chrono::NaiveDate::from_ymd_opt(2018, 4, 5).unwrap(),
//!     })
//!     .await?;
//! for stop in &live.route {
//!     println!("{}: {:?}", stop.station.code, stop.actual_arrival);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod convert;
pub mod error;
pub mod model;
pub mod norm;
pub mod request;
pub mod types;

pub use client::{RailClient, RailConfig};
pub use error::{FormatError, RailError};
