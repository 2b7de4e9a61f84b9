use std::sync::{Arc, Mutex};

use avantage_rs::{AvClient, Clock};
use chrono::{DateTime, Utc};
use httpmock::MockServer;
use url::Url;

/// A clock pinned to a fixed instant, settable from tests.
#[derive(Debug)]
pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    pub fn at(rfc3339: &str) -> Arc<Self> {
        Arc::new(Self(Mutex::new(parse(rfc3339))))
    }

    #[allow(dead_code)]
    pub fn set(&self, rfc3339: &str) {
        *self.0.lock().unwrap() = parse(rfc3339);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

fn parse(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

/// A client wired to the mock server, with a deterministic clock.
pub fn client_for(server: &MockServer, clock: Arc<FixedClock>) -> AvClient {
    AvClient::builder()
        .api_key("test-key")
        .base_url(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .clock(clock)
        .build()
        .unwrap()
}
