// Weather data domain models
use chrono::{Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRow {
    pub date: NaiveDate,
    pub temperature: f64,
    pub precipitation: f64,
    pub humidity: f64,
}

/// Raw per-variable value vectors as returned by the weather API, in
/// ascending date order. Alignment against the requested date range happens
/// in the prediction service.
#[derive(Debug, Clone, Default)]
pub struct DailyWeather {
    pub temperature: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub humidity: Vec<f64>,
}

/// Inclusive daily date sequence from `start` to `end`. Returns `None` when
/// `end` precedes `start`.
pub fn daily_date_sequence(start: NaiveDate, end: NaiveDate) -> Option<Vec<NaiveDate>> {
    if end < start {
        return None;
    }
    let days = (end - start).num_days() as usize + 1;
    let mut dates = Vec::with_capacity(days);
    let mut current = start;
    while current <= end {
        dates.push(current);
        current = current.checked_add_days(Days::new(1))?;
    }
    Some(dates)
}
