//! REST API endpoint handlers for the AgriSim server.
//!
//! Both data endpoints are stateless: each request fetches a fresh
//! environmental bundle from the shared [`SyntheticDataSource`] and,
//! for simulations, runs the scoring engine over it. Nothing is
//! persisted between requests.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/environmental-data` | Environmental bundle for a coordinate |
//! | `POST` | `/api/simulate` | Run one farm simulation |
//!
//! [`SyntheticDataSource`]: agrisim_environment::SyntheticDataSource

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use tracing::debug;
use validator::Validate;

use agrisim_types::{CropType, FarmParameters, FarmingMethod, SoilType};

use crate::error::ApiError;
use crate::state::AppState;

/// Dataset name used when the client does not request one.
const DEFAULT_DATASET: &str = "comprehensive";

// ---------------------------------------------------------------------------
// Request structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/environmental-data` endpoint.
///
/// `lat` and `lon` are declared optional so a missing parameter reaches
/// the handler instead of producing Axum's default rejection; the
/// handler turns absence into a 400 with a precise message.
#[derive(Debug, serde::Deserialize)]
pub struct EnvironmentalDataQuery {
    /// Latitude in decimal degrees.
    pub lat: Option<f64>,
    /// Longitude in decimal degrees.
    pub lon: Option<f64>,
    /// Dataset name; echoed into the bundle, never varies behavior.
    pub dataset: Option<String>,
}

/// JSON body for the `POST /api/simulate` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct SimulateRequest {
    /// Applied irrigation in millimetres per day.
    pub irrigation: f64,
    /// Applied fertilizer in kilograms per hectare.
    pub fertilizer: f64,
    /// Livestock stocking density in head per hectare.
    pub livestock: f64,
    /// Crop planted; defaults to corn.
    #[serde(default)]
    pub crop_type: CropType,
    /// Dominant soil texture; defaults to loam.
    #[serde(default)]
    pub soil_type: SoilType,
    /// Management practice; defaults to conventional.
    #[serde(default)]
    pub farming_method: FarmingMethod,
    /// Farm latitude; falls back to the configured default.
    pub latitude: Option<f64>,
    /// Farm longitude; falls back to the configured default.
    pub longitude: Option<f64>,
}

impl SimulateRequest {
    /// Assemble the validated farm parameters from the request body.
    const fn farm_parameters(&self) -> FarmParameters {
        FarmParameters {
            irrigation_mm_per_day: self.irrigation,
            fertilizer_kg_per_ha: self.fertilizer,
            livestock_density_per_ha: self.livestock,
            crop_type: self.crop_type,
            soil_type: self.soil_type,
            farming_method: self.farming_method,
        }
    }
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
///
/// This is the placeholder dashboard until the React frontend lands.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let lat = state.default_location.latitude;
    let lon = state.default_location.longitude;

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>AgriSim API</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #7ee787; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        code {{ background: #161b22; border: 1px solid #30363d; border-radius: 4px; padding: 0.1rem 0.35rem; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>AgriSim</h1>
    <p class="subtitle">Educational farm simulation API</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><code>GET</code> <a href="/api/environmental-data?lat={lat}&amp;lon={lon}">/api/environmental-data</a> -- Environmental bundle (?lat=&amp;lon=&amp;dataset=)</li>
        <li><code>POST</code> /api/simulate -- Run one farm simulation (JSON body)</li>
    </ul>

    <h2>Example simulation body</h2>
    <ul>
        <li><code>{{"irrigation": 5, "fertilizer": 15, "livestock": 2, "crop_type": "Corn"}}</code></li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/environmental-data -- environmental bundle for a coordinate
// ---------------------------------------------------------------------------

/// Return the environmental bundle for the requested coordinate.
///
/// # Query Parameters
///
/// - `lat`: latitude in decimal degrees (required)
/// - `lon`: longitude in decimal degrees (required)
/// - `dataset`: dataset name (optional, default `comprehensive`)
pub async fn environmental_data(
    State(state): State<AppState>,
    query: Result<Query<EnvironmentalDataQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::InvalidInput(e.body_text()))?;

    let lat = params
        .lat
        .ok_or_else(|| ApiError::InvalidInput(String::from("missing required query parameter: lat")))?;
    let lon = params
        .lon
        .ok_or_else(|| ApiError::InvalidInput(String::from("missing required query parameter: lon")))?;
    let dataset = params.dataset.as_deref().unwrap_or(DEFAULT_DATASET);

    debug!(lat, lon, dataset, "environmental data requested");

    let bundle = state.source.fetch(lat, lon, dataset)?;
    Ok(Json(bundle))
}

// ---------------------------------------------------------------------------
// POST /api/simulate -- run one farm simulation
// ---------------------------------------------------------------------------

/// Run one farm simulation and return the full scored result.
///
/// Fetches a fresh environmental bundle for the request coordinate (or
/// the configured default when omitted), then runs the scoring engine.
pub async fn simulate(
    State(state): State<AppState>,
    payload: Result<Json<SimulateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidInput(e.body_text()))?;

    let params = request.farm_parameters();
    params
        .validate()
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let latitude = request.latitude.unwrap_or(state.default_location.latitude);
    let longitude = request.longitude.unwrap_or(state.default_location.longitude);

    debug!(
        latitude,
        longitude,
        irrigation = params.irrigation_mm_per_day,
        fertilizer = params.fertilizer_kg_per_ha,
        livestock = params.livestock_density_per_ha,
        "simulation requested"
    );

    let bundle = state.source.fetch(latitude, longitude, DEFAULT_DATASET)?;
    let result = agrisim_engine::simulate(&params, &bundle);

    Ok(Json(result))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn simulate_request_defaults_enums() {
        let json = r#"{"irrigation": 4.0, "fertilizer": 10.0, "livestock": 1.0}"#;
        let request: SimulateRequest = serde_json::from_str(json).unwrap();
        let params = request.farm_parameters();
        assert_eq!(params.crop_type, CropType::Corn);
        assert_eq!(params.soil_type, SoilType::Loam);
        assert_eq!(params.farming_method, FarmingMethod::Conventional);
        assert!((params.irrigation_mm_per_day - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn simulate_request_requires_numeric_fields() {
        let json = r#"{"irrigation": 4.0, "fertilizer": 10.0}"#;
        let request: Result<SimulateRequest, _> = serde_json::from_str(json);
        assert!(request.is_err());
    }

    #[test]
    fn negative_inputs_fail_validation() {
        let json = r#"{"irrigation": -1.0, "fertilizer": 10.0, "livestock": 1.0}"#;
        let request: SimulateRequest = serde_json::from_str(json).unwrap();
        assert!(request.farm_parameters().validate().is_err());
    }
}
