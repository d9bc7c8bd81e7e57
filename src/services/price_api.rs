use std::collections::{BTreeMap, HashMap};

use chrono::TimeDelta;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::services::event_config::TrackedItem;
use crate::services::ttl_cache::{Clock, SystemClock, TtlCache};

const USER_AGENT: &str = "clanboard/0.1 (community event price tracker)";

pub const PRICE_CACHE_TTL_MINUTES: i64 = 5;

/// Item display name mapped to its latest instant-buy price.
pub type PriceMap = BTreeMap<String, i64>;

#[derive(Error, Debug)]
pub enum PriceApiError {
    #[error("prices url is missing")]
    MissingUrl,
    #[error("connection error")]
    Connection,
    #[error("parse error")]
    Parse,
}

#[derive(Deserialize)]
struct PriceResponse {
    #[serde(default)]
    data: HashMap<String, ItemPrice>,
}

#[derive(Deserialize)]
struct ItemPrice {
    #[serde(default)]
    high: Option<i64>,
}

/// Client for the latest-prices endpoint. Responses are cached for five
/// minutes; when a refresh fails the last known prices are served
/// instead, so the leaderboard keeps a price column through API hiccups.
pub struct PriceClient<C: Clock> {
    url: String,
    tracked: Vec<TrackedItem>,
    client: Client,
    cache: TtlCache<PriceMap>,
    clock: C,
}

impl PriceClient<SystemClock> {
    pub fn new(url: &str, tracked: Vec<TrackedItem>) -> Result<Self, PriceApiError> {
        Self::with_clock(url, tracked, SystemClock)
    }
}

impl<C: Clock> PriceClient<C> {
    pub fn with_clock(
        url: &str,
        tracked: Vec<TrackedItem>,
        clock: C,
    ) -> Result<Self, PriceApiError> {
        if url.is_empty() {
            return Err(PriceApiError::MissingUrl);
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|_| PriceApiError::Connection)?;
        Ok(Self {
            url: url.to_string(),
            tracked,
            client,
            cache: TtlCache::new(TimeDelta::minutes(PRICE_CACHE_TTL_MINUTES)),
            clock,
        })
    }

    pub async fn latest_prices(&mut self) -> Result<PriceMap, PriceApiError> {
        if let Some(prices) = self.cache.fresh(&self.clock) {
            return Ok(prices.clone());
        }

        match self.fetch().await {
            Ok(prices) => {
                self.cache.store(prices.clone(), &self.clock);
                Ok(prices)
            }
            Err(error) => match self.cache.last() {
                Some(stale) => Ok(stale.clone()),
                None => Err(error),
            },
        }
    }

    async fn fetch(&self) -> Result<PriceMap, PriceApiError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|_| PriceApiError::Connection)?;
        if !response.status().is_success() {
            return Err(PriceApiError::Connection);
        }
        let parsed = response
            .json::<PriceResponse>()
            .await
            .map_err(|_| PriceApiError::Parse)?;
        Ok(tracked_prices(&self.tracked, &parsed))
    }
}

fn tracked_prices(tracked: &[TrackedItem], response: &PriceResponse) -> PriceMap {
    let mut prices = BTreeMap::new();
    for item in tracked {
        if let Some(high) = response
            .data
            .get(&item.id.to_string())
            .and_then(|price| price.high)
        {
            prices.insert(item.name.clone(), high);
        }
    }
    prices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracked() -> Vec<TrackedItem> {
        vec![
            TrackedItem {
                id: 30759,
                name: "Soulflame horn".to_string(),
            },
            TrackedItem {
                id: 30765,
                name: "Oathplate Shards".to_string(),
            },
        ]
    }

    #[test]
    fn tracked_prices_keeps_only_configured_items_with_a_price() {
        let response: PriceResponse = serde_json::from_str(
            r#"{
                "data": {
                    "30759": { "high": 1250000000, "low": 1200000000 },
                    "30765": { "high": null },
                    "4151": { "high": 1800000 }
                }
            }"#,
        )
        .unwrap();

        let prices = tracked_prices(&tracked(), &response);
        assert_eq!(prices.len(), 1);
        assert_eq!(prices["Soulflame horn"], 1_250_000_000);
    }

    #[test]
    fn empty_url_is_rejected() {
        assert!(matches!(
            PriceClient::new("", tracked()),
            Err(PriceApiError::MissingUrl)
        ));
    }
}
