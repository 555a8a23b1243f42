// Session domain model - per-session parameters and state
use crate::domain::prediction::PredictionTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelChoice {
    #[serde(rename = "XGBoost")]
    XgBoost,
    RandomForest,
    #[serde(rename = "LSTM")]
    Lstm,
}

impl ModelChoice {
    pub fn label(&self) -> &'static str {
        match self {
            ModelChoice::XgBoost => "XGBoost",
            ModelChoice::RandomForest => "RandomForest",
            ModelChoice::Lstm => "LSTM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Global,
    India,
    #[serde(rename = "USA")]
    Usa,
    Africa,
    Australia,
}

impl Region {
    pub fn label(&self) -> &'static str {
        match self {
            Region::Global => "Global",
            Region::India => "India",
            Region::Usa => "USA",
            Region::Africa => "Africa",
            Region::Australia => "Australia",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub model_choice: ModelChoice,
    pub region: Region,
}

impl SessionParams {
    /// Defaults mirror the dashboard's initial control values.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(today),
            end_date: today,
            model_choice: ModelChoice::XgBoost,
            region: Region::Global,
        }
    }
}

/// Partial update for the four parameter controls. Fields left out of the
/// request keep their current values. No cross-field validation: an inverted
/// date range is accepted here and only rejected when a fetch runs.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ParamsUpdate {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub model_choice: Option<ModelChoice>,
    pub region: Option<Region>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub params: SessionParams,
    pub fetch_requested: bool,
    pub predictions: Option<PredictionTable>,
    pub last_error: Option<String>,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            params: SessionParams::new(today),
            fetch_requested: false,
            predictions: None,
            last_error: None,
        }
    }

    pub fn apply_params(&mut self, update: ParamsUpdate) {
        if let Some(start) = update.start_date {
            self.params.start_date = start;
        }
        if let Some(end) = update.end_date {
            self.params.end_date = end;
        }
        if let Some(model) = update.model_choice {
            self.params.model_choice = model;
        }
        if let Some(region) = update.region {
            self.params.region = region;
        }
    }

    /// The refresh trigger only flips the flag; the fetch itself runs during
    /// the next dashboard render pass.
    pub fn request_refresh(&mut self) {
        self.fetch_requested = true;
    }
}
