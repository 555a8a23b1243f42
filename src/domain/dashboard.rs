// Dashboard view model - what a render pass returns to the client
use crate::domain::prediction::PredictionTable;
use crate::domain::session::SessionParams;
use crate::domain::timeseries::TimeSeriesSample;
use chrono::NaiveDate;
use serde::Serialize;

/// Marker sizes on the map are scaled into `[0, MAX_MARKER_SIZE]`.
pub const MAX_MARKER_SIZE: f64 = 20.0;

#[derive(Debug, Clone, Serialize)]
pub struct MapPoint {
    pub date: NaiveDate,
    pub lat: f64,
    pub lon: f64,
    /// Color intensity, driven by drought risk.
    pub color: f64,
    /// Marker size, driven by fire risk, capped at `MAX_MARKER_SIZE`.
    pub size: f64,
    pub hover: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub points: Vec<MapPoint>,
}

impl MapView {
    pub fn from_table(table: &PredictionTable) -> Self {
        let points = table
            .rows
            .iter()
            .map(|row| MapPoint {
                date: row.date,
                lat: row.lat,
                lon: row.lon,
                color: row.drought_risk,
                size: (row.fire_risk * MAX_MARKER_SIZE).min(MAX_MARKER_SIZE),
                hover: format!(
                    "{} drought_risk={:.3} fire_risk={:.3}",
                    row.date, row.drought_risk, row.fire_risk
                ),
            })
            .collect();
        Self { points }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesView {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub title: String,
    pub dates: Vec<NaiveDate>,
    pub series: Vec<SeriesView>,
}

impl ChartView {
    /// Chart of the simulated indicators, titled with the coordinates of the
    /// table's first row.
    pub fn from_sample(table: &PredictionTable, sample: TimeSeriesSample) -> Self {
        let (lat, lon) = table
            .rows
            .first()
            .map(|row| (row.lat, row.lon))
            .unwrap_or((table.origin.lat, table.origin.lon));

        Self {
            title: format!("Time-Series at Lat {lat:.2}, Lon {lon:.2}"),
            dates: sample.dates,
            series: vec![
                SeriesView {
                    name: "ndvi".to_string(),
                    values: sample.ndvi,
                },
                SeriesView {
                    name: "soil_moisture".to_string(),
                    values: sample.soil_moisture,
                },
                SeriesView {
                    name: "precipitation".to_string(),
                    values: sample.precipitation,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardView {
    /// No predictions yet: tell the client how to get some.
    Prompt {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_error: Option<String>,
    },
    Dashboard {
        params: SessionParams,
        map: MapView,
        chart: ChartView,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_error: Option<String>,
    },
}
