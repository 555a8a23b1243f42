// Repository trait for daily weather data access
use crate::domain::weather::{DailyWeather, GeoPoint};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait WeatherRepository: Send + Sync {
    /// Fetch daily temperature, precipitation and relative humidity for one
    /// geographic point over an inclusive date range. Values come back in
    /// ascending date order; the caller aligns them against its own date
    /// sequence.
    async fn fetch_daily(
        &self,
        point: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<DailyWeather>;
}
