use std::time::Instant;

use actix_multipart::{Field, Multipart};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use futures::TryStreamExt;
use log::{error, info};
use shared::{DiseaseDetail, DiseaseListResponse, ErrorResponse, HealthResponse};

use crate::knowledge::{build_action_plan, format_label, get_advisory, reference_catalog};
use crate::pipeline::PredictError;
use crate::state::AppState;

const SERVICE_NAME: &str = "Digital Doctor for Farmers";
const IMAGE_FIELD: &str = "image";
const ACCEPTED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid file type: {0}. Please upload a JPG, PNG or WebP image.")]
    InvalidContentType(String),
    #[error("Missing 'image' field in upload.")]
    MissingImage,
    #[error("Empty image file received.")]
    EmptyImage,
    #[error("Invalid image: {0}")]
    InvalidImage(String),
    #[error("Malformed upload: {0}")]
    Upload(String),
    #[error("Model is not available: {0}")]
    ModelUnavailable(String),
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidContentType(_)
            | ApiError::MissingImage
            | ApiError::EmptyImage
            | ApiError::InvalidImage(_)
            | ApiError::Upload(_) => StatusCode::BAD_REQUEST,
            ApiError::ModelUnavailable(_) | ApiError::PredictionFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::InvalidImage(e) => ApiError::InvalidImage(e.to_string()),
            PredictError::Inference(e) => ApiError::PredictionFailed(e.to_string()),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(health)))
        .service(web::resource("/model-info").route(web::get().to(model_info)))
        .service(web::resource("/predict").route(web::post().to(predict)))
        .service(web::resource("/diseases").route(web::get().to(list_diseases)))
        .service(web::resource("/diseases/{raw_label:.*}").route(web::get().to(disease_detail)));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "running".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Server is healthy".to_string(),
    })
}

async fn model_info(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    if !state.is_loaded() {
        info!("Model not loaded yet, loading on demand");
    }
    let predictor = state.predictor().await.map_err(|e| {
        error!("Model info unavailable: {}", e);
        ApiError::ModelUnavailable(e.to_string())
    })?;
    Ok(HttpResponse::Ok().json(predictor.model_info()))
}

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

async fn read_field(field: &mut Field) -> Result<Vec<u8>, ApiError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// Pulls the `image` part out of the upload, rejecting anything that is not
/// a non-empty image of an accepted type.
async fn read_image(payload: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            read_field(&mut field).await?;
            continue;
        }

        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();
        if !ACCEPTED_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(ApiError::InvalidContentType(content_type));
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload")
            .to_string();
        let bytes = read_field(&mut field).await?;
        if bytes.is_empty() {
            return Err(ApiError::EmptyImage);
        }
        return Ok(Upload { filename, bytes });
    }
    Err(ApiError::MissingImage)
}

async fn predict(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let upload = read_image(&mut payload).await?;
    info!(
        "Received image: {}, size: {:.1} KB",
        upload.filename,
        upload.bytes.len() as f64 / 1024.0
    );

    let predictor = state.predictor().await.map_err(|e| {
        error!("Prediction error: {}", e);
        ApiError::ModelUnavailable(e.to_string())
    })?;

    let start = Instant::now();
    let diagnosis = web::block(move || predictor.predict(&upload.bytes))
        .await
        .map_err(|e| ApiError::PredictionFailed(e.to_string()))?
        .map_err(|e| {
            error!("Prediction error: {}", e);
            ApiError::from(e)
        })?;
    let response = diagnosis.into_response(start.elapsed().as_secs_f64());

    info!(
        "Prediction: {} ({:.1}%) in {}s",
        response.disease,
        response.confidence * 100.0,
        response.inference_time_seconds
    );
    Ok(HttpResponse::Ok().json(response))
}

async fn list_diseases() -> HttpResponse {
    let diseases = reference_catalog();
    HttpResponse::Ok().json(DiseaseListResponse {
        total: diseases.len(),
        diseases,
    })
}

async fn disease_detail(path: web::Path<String>) -> HttpResponse {
    let raw_label = path.into_inner();
    HttpResponse::Ok().json(DiseaseDetail {
        display_name: format_label(&raw_label),
        info: get_advisory(&raw_label).to_info(),
        action_plan: build_action_plan(&raw_label),
        raw_label,
    })
}
