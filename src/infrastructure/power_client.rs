// NASA POWER API client
use crate::application::weather_repository::WeatherRepository;
use crate::domain::weather::{DailyWeather, GeoPoint};
use crate::infrastructure::config::PowerSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct PowerApiClient {
    client: reqwest::Client,
    base_url: String,
    community: String,
}

// Response shape: { properties: { parameter: { T2M: { "20240101": 24.2, ... }, ... } } }
// The date keys are YYYYMMDD strings, so a BTreeMap yields ascending date order.
#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: PowerParameters,
}

#[derive(Debug, Deserialize)]
struct PowerParameters {
    #[serde(rename = "T2M")]
    t2m: BTreeMap<String, f64>,
    #[serde(rename = "PRECTOT")]
    prectot: BTreeMap<String, f64>,
    #[serde(rename = "RH2M")]
    rh2m: BTreeMap<String, f64>,
}

impl PowerApiClient {
    pub fn new(settings: PowerSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            community: settings.community,
        }
    }

    fn build_request_url(&self, point: GeoPoint, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}?parameters=T2M,PRECTOT,RH2M&community={}&longitude={}&latitude={}&start={}&end={}&format=JSON",
            self.base_url,
            self.community,
            point.lon,
            point.lat,
            start.format("%Y%m%d"),
            end.format("%Y%m%d"),
        )
    }
}

#[async_trait]
impl WeatherRepository for PowerApiClient {
    async fn fetch_daily(
        &self,
        point: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailyWeather> {
        let url = self.build_request_url(point, start, end);
        tracing::debug!("Requesting daily weather: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to the NASA POWER API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("NASA POWER request failed with status {}: {}", status, body);
        }

        let data = response
            .json::<PowerResponse>()
            .await
            .context("Failed to parse NASA POWER response")?;

        let parameter = data.properties.parameter;
        Ok(DailyWeather {
            temperature: parameter.t2m.into_values().collect(),
            precipitation: parameter.prectot.into_values().collect(),
            humidity: parameter.rh2m.into_values().collect(),
        })
    }
}
