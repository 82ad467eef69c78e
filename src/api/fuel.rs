use super::{error::ApiError, json::from_slice_case_insensitive};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_FUEL_URL: &str = "https://opgaver.mercantec.tech/Opgaver";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelKind {
    Diesel,
    Gas,
}

impl FuelKind {
    fn path(self) -> &'static str {
        match self {
            FuelKind::Diesel => "Diesel",
            FuelKind::Gas => "Miles95",
        }
    }
}

#[derive(Clone)]
pub struct FuelClient {
    client: Client,
    base_url: String,
}

impl FuelClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub async fn diesel(&self) -> Result<Vec<FuelPrice>, ApiError> {
        self.prices(FuelKind::Diesel).await
    }

    pub async fn gas(&self) -> Result<Vec<FuelPrice>, ApiError> {
        self.prices(FuelKind::Gas).await
    }

    pub async fn prices(&self, kind: FuelKind) -> Result<Vec<FuelPrice>, ApiError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, kind.path()))
            .send()
            .await?;

        tracing::info!("GET {}: {}", response.url(), response.status());

        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status()));
        }

        let body = response.bytes().await?;
        let prices: Option<Vec<FuelPrice>> = from_slice_case_insensitive(&body)?;

        Ok(prices.unwrap_or_default())
    }
}

/// One price observation. Both fields are optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelPrice {
    #[serde(default, deserialize_with = "flexible_date")]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub price: Option<String>,
}

impl FuelPrice {
    /// Parses `price` with `.` as the decimal separator and `,` as an optional group separator.
    pub fn price_value(&self) -> Option<f64> {
        self.price
            .as_deref()
            .map(|price| price.trim().replace(',', ""))
            .and_then(|price| price.parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }
}

fn flexible_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    parse_date(&raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.naive_utc());
    }
    if let Ok(date) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        return Some(date.naive_utc());
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date);
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(date);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
