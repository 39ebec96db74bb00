use axum::Json;
use serde::Deserialize;
use tracing::{info, warn};

use crate::suggestions::{self, SuggestionResponse};

/// A BMI reading as submitted by the mobile app.
///
/// Only `classification` drives the response; the remaining fields are part
/// of the reading and accepted as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct BmiRecord {
    pub bmi: f64,
    pub classification: String,
    pub age: u32,
    pub sex: String,
    pub weight: f64,
    pub height: u32,
}

/// POST /api/sugerencias
///
/// Receives a BMI record and returns the suggestion set for its
/// classification. An unrecognized label gets the fallback set, not an error.
pub async fn get_suggestions(Json(record): Json<BmiRecord>) -> Json<SuggestionResponse> {
    if suggestions::is_recognized(&record.classification) {
        info!("Serving suggestions for '{}'", record.classification);
    } else {
        warn!(
            "Unrecognized classification '{}', serving fallback",
            record.classification
        );
    }

    Json(suggestions::resolve(&record.classification))
}
