//! Intraday price lookups.
//!
//! Prices move within the trading session, so nothing here touches the
//! snapshot cache: every call goes to the network.

mod wire;

use serde_json::Value;

use crate::core::{AvClient, AvError, net};

/// The latest traded price for a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// The most recent one-minute bar's close, rounded to two decimals.
    pub price: f64,
    /// The provider's last-refresh timestamp, in US Eastern time.
    pub last_refreshed: String,
}

/// Fetch the latest price for `symbol` from the 1-minute intraday series.
///
/// # Errors
///
/// - [`AvError::SymbolNotFound`] / [`AvError::RateLimited`] for the
///   provider's in-band error markers.
/// - [`AvError::MalformedResponse`] if the metadata, the series, or the bar
///   at the last-refreshed timestamp is missing, or the close does not
///   parse. An empty series is malformed, not a silent null.
/// - [`AvError::Network`] for transport failures and non-2xx statuses.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch(client: &AvClient, symbol: &str) -> Result<PriceQuote, AvError> {
    let object = net::get_object(
        client,
        &[
            ("function", "TIME_SERIES_INTRADAY"),
            ("symbol", symbol),
            ("interval", "1min"),
            ("datatype", "json"),
        ],
    )
    .await?;
    net::check_markers(&object, symbol)?;

    let envelope: wire::IntradayEnvelope = serde_json::from_value(Value::Object(object))
        .map_err(|e| AvError::MalformedResponse(format!("intraday envelope: {e}")))?;

    let last_refreshed = envelope
        .meta
        .and_then(|m| m.last_refreshed)
        .ok_or_else(|| {
            AvError::MalformedResponse(
                "intraday metadata is missing the last-refreshed timestamp".into(),
            )
        })?;

    let close = envelope
        .series
        .as_ref()
        .and_then(|series| series.get(&last_refreshed))
        .and_then(|bar| bar.close.as_deref())
        .ok_or_else(|| {
            AvError::MalformedResponse(format!("no intraday close at '{last_refreshed}'"))
        })?
        .parse::<f64>()
        .map_err(|_| AvError::MalformedResponse("intraday close is not a number".into()))?;

    Ok(PriceQuote {
        price: round2(close),
        last_refreshed,
    })
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
