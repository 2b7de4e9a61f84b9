//! Fundamental indicator lookups, backed by the per-day snapshot cache.

mod wire;

use serde_json::{Map, Value};

use crate::cache::Snapshot;
use crate::calendar;
use crate::core::{AvClient, AvError, net};
use crate::indicators::IndicatorType;

/// A successfully resolved indicator observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fundamental {
    /// The symbol as supplied by the caller.
    pub symbol: String,
    pub indicator: IndicatorType,
    pub value: IndicatorValue,
    /// The most recent trading day the provider reported for the symbol
    /// (`YYYY-MM-DD`).
    pub latest_trading_day: String,
}

/// A raw overview field value.
///
/// The provider serializes most metrics as JSON strings, numbers appear for
/// a handful of fields, and missing data comes back as JSON null or the
/// literal string `"None"`.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorValue {
    Number(f64),
    Text(String),
    Null,
}

impl IndicatorValue {
    fn from_field(value: &Value) -> Result<Self, AvError> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::String(s) if s == "None" => Ok(Self::Null),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(Self::Number).ok_or_else(|| {
                AvError::MalformedResponse("numeric overview field out of range".into())
            }),
            _ => Err(AvError::MalformedResponse(
                "overview field is neither scalar nor null".into(),
            )),
        }
    }
}

/// Fetch `indicator` for `symbol`, reusing the day's cached overview
/// snapshot when it is still current.
///
/// At most one OVERVIEW call and one GLOBAL_QUOTE call go out per symbol per
/// reference trading day; repeat lookups for any indicator of the same
/// symbol within that day are served from memory. Marker-bearing error
/// payloads are never cached, so a transient quota error does not pin the
/// symbol to `RateLimited` for the rest of the day: the next call goes back
/// to the network.
///
/// # Errors
///
/// - [`AvError::UnknownIndicator`] if `indicator` is not in the catalog
///   (no network call is made).
/// - [`AvError::SymbolNotFound`] / [`AvError::RateLimited`] for the
///   provider's in-band error markers.
/// - [`AvError::MalformedResponse`] if the overview lacks the requested
///   field or the quote lookup lacks a trading day.
/// - [`AvError::Network`] for transport failures and non-2xx statuses.
/// - [`AvError::Internal`] for anything else unexpected.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch(
    client: &AvClient,
    symbol: &str,
    indicator: &str,
) -> Result<Fundamental, AvError> {
    let indicator: IndicatorType = indicator.parse()?;
    let today = calendar::reference_trading_date(client.clock().now());

    let overview = match client.cache().valid_overview(symbol, today).await {
        Some(overview) => overview,
        None => {
            let overview = fetch_overview(client, symbol).await?;
            // Only marker-free snapshots are cached: an error payload must
            // not count as a valid snapshot until the date rolls over.
            net::check_markers(&overview, symbol)?;
            client
                .cache()
                .put(symbol, Snapshot::new(overview.clone(), today))
                .await;
            overview
        }
    };

    let field = overview.get(indicator.as_str()).ok_or_else(|| {
        AvError::MalformedResponse(format!("overview is missing the '{indicator}' field"))
    })?;
    let value = IndicatorValue::from_field(field)?;

    // The indicator value is never returned without the trading day it was
    // observed on, so a failed quote lookup fails the whole call.
    let latest_trading_day = match client.cache().latest_trading_day(symbol, today).await {
        Some(day) => day,
        None => {
            let day = fetch_latest_trading_day(client, symbol).await?;
            client
                .cache()
                .set_latest_trading_day(symbol, today, &day)
                .await;
            day
        }
    };

    Ok(Fundamental {
        symbol: symbol.to_string(),
        indicator,
        value,
        latest_trading_day,
    })
}

async fn fetch_overview(client: &AvClient, symbol: &str) -> Result<Map<String, Value>, AvError> {
    net::get_object(
        client,
        &[
            ("function", "OVERVIEW"),
            ("symbol", symbol),
            ("datatype", "json"),
        ],
    )
    .await
}

/// One GLOBAL_QUOTE round trip, solely for the `07. latest trading day` field.
async fn fetch_latest_trading_day(client: &AvClient, symbol: &str) -> Result<String, AvError> {
    let object = net::get_object(
        client,
        &[
            ("function", "GLOBAL_QUOTE"),
            ("symbol", symbol),
            ("datatype", "json"),
        ],
    )
    .await?;
    net::check_markers(&object, symbol)?;

    let envelope: wire::GlobalQuoteEnvelope = serde_json::from_value(Value::Object(object))
        .map_err(|e| AvError::MalformedResponse(format!("global quote envelope: {e}")))?;

    envelope
        .global_quote
        .and_then(|q| q.latest_trading_day)
        .ok_or_else(|| {
            AvError::MalformedResponse("global quote did not include a latest trading day".into())
        })
}
