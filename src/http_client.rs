use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Process-wide blocking client. A bearer token from `CFBD_API_KEY` is
/// attached to every request when present; the data service rejects
/// unauthenticated calls on most endpoints.
pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(key) = env::var("CFBD_API_KEY") {
            let token = format!("Bearer {}", key.trim());
            if let Ok(value) = HeaderValue::from_str(&token) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(headers)
            .build()
            .context("failed to build http client")
    })
}
