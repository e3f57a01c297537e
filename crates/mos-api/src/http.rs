use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use mos_core::curves::CurveSet;
use mos_core::error::ValidationError;
use mos_core::inputs::{InputOverrides, RawInputs, RawVgs};
use mos_core::validate::validate;

use crate::schema::{CurvesResponse, ErrorBody, ErrorResponse};

pub struct HttpServerConfig {
    pub bind_addr: String,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

pub async fn run(config: HttpServerConfig) -> Result<(), String> {
    let app = build_router();
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|err| format!("bind {} failed: {}", config.bind_addr, err))?;
    tracing::info!(addr = %config.bind_addr, "http server listening");
    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))
}

/// Every request validates and computes its own curves; nothing is shared.
pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/defaults", get(get_defaults))
        .route("/v1/curves", post(compute_curves))
}

async fn health() -> &'static str {
    "ok"
}

async fn get_defaults() -> Json<RawInputs> {
    Json(RawInputs::default())
}

/// Body is [`RawInputs`] with every field optional; `GET /v1/defaults`
/// output is accepted as is.
async fn compute_curves(
    payload: Result<Json<InputOverrides>, JsonRejection>,
) -> axum::response::Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::info!(status = %rejection.status(), "curve request body rejected");
            return api_error(
                rejection.status(),
                "INVALID_REQUEST",
                "request body is not a valid curve request",
                Some(vec![rejection.body_text()]),
            );
        }
    };

    let raw = payload.resolve();
    let params = match validate(&raw) {
        Ok(params) => params,
        Err(err) => {
            tracing::info!(code = err.code(), "curve request rejected");
            return api_error(
                StatusCode::BAD_REQUEST,
                err.code(),
                &err.to_string(),
                Some(offending_fields(err, &raw)),
            );
        }
    };

    let set = CurveSet::compute(&params);
    tracing::info!(curves = set.len(), "curve request served");
    Json(CurvesResponse::from(&set)).into_response()
}

/// Resolved values of the fields a validation error refers to.
fn offending_fields(err: ValidationError, raw: &RawInputs) -> Vec<String> {
    match err {
        ValidationError::InvalidCoefficient => {
            vec![format!("kn={}", raw.kn), format!("kp={}", raw.kp)]
        }
        ValidationError::InvalidThreshold => vec![format!("vth={}", raw.vth)],
        ValidationError::InvalidVgsRange => match raw.vgs {
            RawVgs::Sweep { min, max } => {
                vec![format!("vgs.min={}", min), format!("vgs.max={}", max)]
            }
            RawVgs::Single { value } => vec![format!("vgs.value={}", value)],
        },
        ValidationError::InvalidVdsRange => vec![
            format!("vds_min={}", raw.vds_min),
            format!("vds_max={}", raw.vds_max),
        ],
    }
}

fn api_error(
    status: StatusCode,
    code: &str,
    message: &str,
    details: Option<Vec<String>>,
) -> axum::response::Response {
    let body = ErrorResponse {
        error: ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
            details,
        },
    };
    (status, Json(body)).into_response()
}
