//! avantage-rs: Alpha Vantage market-data client with a per-trading-day
//! snapshot cache.
//!
//! The provider finalizes fundamentals once per trading session and enforces
//! a strict per-minute call quota, so company-overview snapshots are cached
//! per symbol for the current reference trading day and repeat indicator
//! lookups are served from memory. Intraday prices move within the session
//! and are always fetched fresh.
//!
//! ```no_run
//! use avantage_rs::AvClient;
//!
//! # async fn run() -> Result<(), avantage_rs::AvError> {
//! let client = AvClient::builder().api_key("demo").build()?;
//!
//! let pe = client.fundamental("AAPL", "PERatio").await?;
//! println!("{} = {:?} (as of {})", pe.indicator, pe.value, pe.latest_trading_day);
//!
//! let quote = client.price("AAPL").await?;
//! println!("last close {} at {}", quote.price, quote.last_refreshed);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod calendar;
pub mod core;
pub mod fundamentals;
pub mod indicators;
pub mod price;

pub use cache::{Snapshot, SnapshotCache};
pub use core::{AvClient, AvClientBuilder, AvError, Clock, SystemClock};
pub use fundamentals::{Fundamental, IndicatorValue};
pub use indicators::IndicatorType;
pub use price::PriceQuote;
