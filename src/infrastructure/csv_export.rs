// CSV serialization for the prediction table
use crate::domain::prediction::PredictionTable;
use crate::error::AppError;

pub const EXPORT_FILENAME: &str = "climate_predictions.csv";

/// Serialize the full table: header row from the field names, one line per
/// prediction row, no index column.
pub fn predictions_to_csv(table: &PredictionTable) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for row in &table.rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::Csv(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Csv(e.to_string()))
}
