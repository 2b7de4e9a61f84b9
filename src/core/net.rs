//! Request plumbing shared by the fetchers.

use serde_json::{Map, Value};

use crate::core::{AvClient, AvError};

/// In-band provider marker for an unknown symbol.
const ERROR_MESSAGE_KEY: &str = "Error Message";

/// In-band provider marker for an exhausted call quota.
const RATE_LIMIT_KEY: &str = "Note";

/// Issue one GET against the provider's query endpoint and parse the body as
/// a JSON object.
///
/// Transport failures and non-2xx statuses surface as [`AvError::Network`];
/// a body that is not a JSON object surfaces as [`AvError::Internal`].
pub(crate) async fn get_object(
    client: &AvClient,
    params: &[(&str, &str)],
) -> Result<Map<String, Value>, AvError> {
    let mut url = client.base_url().clone();
    url.query_pairs_mut().extend_pairs(params);

    let resp = client
        .http()
        .get(url)
        .header("x-rapidapi-host", client.api_host())
        .header("x-rapidapi-key", client.api_key())
        .send()
        .await?
        .error_for_status()?;

    let text = resp.text().await?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| AvError::Internal(format!("response body is not JSON: {e}")))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(AvError::Internal("response body is not a JSON object".into())),
    }
}

/// Translate the provider's in-band error markers.
///
/// The provider answers 200 with an `"Error Message"` field for unknown
/// symbols and a `"Note"` field when the per-minute quota is exhausted.
pub(crate) fn check_markers(object: &Map<String, Value>, symbol: &str) -> Result<(), AvError> {
    if object.contains_key(ERROR_MESSAGE_KEY) {
        return Err(AvError::SymbolNotFound(symbol.to_string()));
    }
    if object.contains_key(RATE_LIMIT_KEY) {
        return Err(AvError::RateLimited);
    }
    Ok(())
}
