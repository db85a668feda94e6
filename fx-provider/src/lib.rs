//! # FX Provider
//!
//! A typed client for the Frankfurter exchange-rate API, implementing the
//! `RateClient` port.
//!
//! Endpoints used:
//! - `GET /currencies` - `{code: name}`
//! - `GET /latest?from=X&to=Y` - `{"rates": {Y: rate}, "date": "YYYY-MM-DD"}`
//! - `GET /{start}..{end}?from=X&to=Y` - `{"rates": {"YYYY-MM-DD": {Y: rate}}}`

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use fx_types::{CurrencyCode, CurrencySelection, ExchangeError, LatestRate, RateClient, TrendPoint};

/// Public Frankfurter instance.
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// Upper bound on every outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error type for a single provider round trip.
///
/// Converted into an `ExchangeError` at the port boundary.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire formats
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    rates: HashMap<String, serde_json::Value>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RangeResponse {
    // Keeps the provider's key order (serde_json `preserve_order`).
    #[serde(default)]
    rates: serde_json::Map<String, serde_json::Value>,
}

/// Reads a JSON number (or numeric string) as an exact decimal.
fn parse_decimal(value: &serde_json::Value) -> Option<Decimal> {
    let text = match value {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn parse_latest(body: LatestResponse, target: &CurrencyCode) -> Result<LatestRate, FetchError> {
    let rate = body
        .rates
        .get(target.as_str())
        .ok_or_else(|| FetchError::Malformed(format!("no rate for {target}")))?;
    let rate = parse_decimal(rate)
        .ok_or_else(|| FetchError::Malformed(format!("rate for {target} is not a number")))?;
    let date = body
        .date
        .ok_or_else(|| FetchError::Malformed("missing date".into()))?;
    let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
        .map_err(|e| FetchError::Malformed(format!("bad date {date:?}: {e}")))?;
    Ok(LatestRate { rate, date })
}

/// Extracts the series for `target` in provider order, skipping entries that
/// do not parse.
fn parse_range(body: RangeResponse, target: &CurrencyCode) -> Vec<TrendPoint> {
    body.rates
        .into_iter()
        .filter_map(|(day, rates)| {
            let Ok(date) = NaiveDate::parse_from_str(&day, DATE_FORMAT) else {
                warn!(key = %day, "skipping trend entry with malformed date");
                return None;
            };
            match rates.get(target.as_str()).and_then(parse_decimal) {
                Some(rate) => Some(TrendPoint { date, rate }),
                None => {
                    warn!(%date, %target, "skipping trend entry without a usable rate");
                    None
                }
            }
        })
        .collect()
}

fn parse_currencies(body: BTreeMap<String, String>) -> Vec<CurrencySelection> {
    body.into_iter()
        .filter_map(|(code, name)| match CurrencyCode::new(&code) {
            Ok(code) => Some(CurrencySelection::new(code, name)),
            Err(e) => {
                debug!(%e, "ignoring provider currency");
                None
            }
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// Frankfurter API client.
#[derive(Debug, Clone)]
pub struct FrankfurterClient {
    base_url: String,
    http: Client,
}

impl FrankfurterClient {
    /// Creates a new client whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Client for the public instance with the default timeout.
    pub fn public() -> Result<Self, FetchError> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "provider request");
        let resp = self.http.get(&url).query(query).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or(body);
            Err(FetchError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl RateClient for FrankfurterClient {
    #[instrument(skip(self))]
    async fn fetch_currencies(&self) -> Result<Vec<CurrencySelection>, ExchangeError> {
        let body: BTreeMap<String, String> = self
            .get("/currencies", &[])
            .await
            .map_err(|e| ExchangeError::CurrencyListUnavailable(e.to_string()))?;
        Ok(parse_currencies(body))
    }

    #[instrument(skip_all, fields(%base, %target))]
    async fn latest_rate(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<LatestRate, ExchangeError> {
        let unavailable = |e: FetchError| ExchangeError::RateUnavailable {
            base: base.clone(),
            target: target.clone(),
            reason: e.to_string(),
        };

        let body: LatestResponse = self
            .get(
                "/latest",
                &[("from", base.as_str()), ("to", target.as_str())],
            )
            .await
            .map_err(unavailable)?;
        let quote = parse_latest(body, target).map_err(unavailable)?;
        debug!(rate = %quote.rate, date = %quote.date, "latest rate");
        Ok(quote)
    }

    #[instrument(skip_all, fields(%base, %target, %start, %end))]
    async fn range_rates(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TrendPoint>, ExchangeError> {
        let unavailable = |reason: String| ExchangeError::RangeUnavailable {
            base: base.clone(),
            target: target.clone(),
            start,
            end,
            reason,
        };

        let body: RangeResponse = self
            .get(
                &format!("/{start}..{end}"),
                &[("from", base.as_str()), ("to", target.as_str())],
            )
            .await
            .map_err(|e| unavailable(e.to_string()))?;
        let points = parse_range(body, target);
        if points.is_empty() {
            return Err(unavailable("response contained no rates".into()));
        }
        debug!(points = points.len(), "range rates");
        Ok(points)
    }
}
