use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct IntradayEnvelope {
    #[serde(rename = "Meta Data")]
    pub(crate) meta: Option<MetaData>,
    #[serde(rename = "Time Series (1min)")]
    pub(crate) series: Option<HashMap<String, Bar>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetaData {
    #[serde(rename = "3. Last Refreshed")]
    pub(crate) last_refreshed: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Bar {
    #[serde(rename = "4. close")]
    pub(crate) close: Option<String>,
}
