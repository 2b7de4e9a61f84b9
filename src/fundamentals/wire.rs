use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct GlobalQuoteEnvelope {
    #[serde(rename = "Global Quote")]
    pub(crate) global_quote: Option<GlobalQuote>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GlobalQuote {
    #[serde(rename = "07. latest trading day")]
    pub(crate) latest_trading_day: Option<String>,
}
