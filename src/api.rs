use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::Display;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tracing::{error, info, warn};

use crate::{
    app_state::AppState,
    chat, diagnosis,
    image::ImagePayload,
    languages::{Language, LanguageInfo},
    localization::{self, LocalizedReport},
    models::AnalysisOutcome,
};

type ApiError = (StatusCode, Json<Value>);

// --- Payloads y Respuestas de la API ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmingChatPayload {
    message: Option<String>,
    image_base64: Option<String>,
    language: Option<String>,
    mode: Option<String>,
}

/// Análisis estructurado en modo `analyze`; texto libre en modo chat.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChatReply {
    Analysis(AnalysisOutcome),
    Text(String),
}

#[derive(Debug, Serialize)]
pub struct FarmingChatResponse {
    response: ChatReply,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizePayload {
    disease_id: Option<String>,
    disease_detected: Option<String>,
    status: Option<String>,
    plant_name: Option<String>,
    language: Option<String>,
}

// --- Router ---

pub fn create_router(app_state: AppState) -> Router {
    let body_limit = app_state.config.max_body_bytes;
    Router::new()
        .route("/api/farming-chat", post(farming_chat_handler))
        .route("/api/localize", post(localize_handler))
        .route("/api/languages", get(languages_handler))
        .route("/api/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(app_state)
}

/// Aplicación completa: API + frontend estático + CORS abierto para la app
/// móvil y el navegador.
pub fn create_app(app_state: AppState) -> Router {
    let frontend_dir = app_state.config.frontend_dir.clone();
    Router::new()
        .merge(create_router(app_state))
        .fallback_service(ServeDir::new(frontend_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

// --- Handlers ---

#[axum::debug_handler]
async fn farming_chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<FarmingChatPayload>, JsonRejection>,
) -> Result<Json<FarmingChatResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;
    let language = Language::from_tag(payload.language.as_deref());
    let message = payload.message.as_deref();

    let image = payload
        .image_base64
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(ImagePayload::parse)
        .transpose()
        .map_err(bad_request)?;
    let analyze = payload.mode.as_deref() == Some("analyze");

    let response = match image {
        Some(image) if analyze => {
            info!("Petición de análisis de planta ({})", image.mime());
            let outcome = diagnosis::analyze_plant_image(&state.llm_manager, &image, message)
                .await
                .map_err(internal_error)?;
            ChatReply::Analysis(outcome)
        }
        Some(image) => {
            let reply = chat::chat_with_image(&state.llm_manager, &image, message, language)
                .await
                .map_err(internal_error)?;
            ChatReply::Text(reply)
        }
        None => {
            let message = message
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .ok_or_else(|| bad_request("message or imageBase64 is required"))?;
            let reply = chat::chat_with_ai(&state.llm_manager, message, language)
                .await
                .map_err(internal_error)?;
            ChatReply::Text(reply)
        }
    };

    Ok(Json(FarmingChatResponse { response }))
}

#[axum::debug_handler]
async fn localize_handler(
    payload: Result<Json<LocalizePayload>, JsonRejection>,
) -> Result<Json<LocalizedReport>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;
    let language = Language::from_tag(payload.language.as_deref());

    Ok(Json(localization::localize_report(
        payload.disease_id.as_deref(),
        payload.disease_detected.as_deref(),
        payload.status.as_deref(),
        payload.plant_name.as_deref(),
        language,
    )))
}

#[axum::debug_handler]
async fn languages_handler() -> Json<Vec<LanguageInfo>> {
    Json(Language::ALL.into_iter().map(Language::info).collect())
}

#[axum::debug_handler]
async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "llmConfigured": state.llm_configured() }))
}

// --- Utilidades ---

fn bad_request(message: impl Display) -> ApiError {
    warn!("Petición inválida: {}", message);
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message.to_string() })),
    )
}

fn internal_error(err: impl Display) -> ApiError {
    error!("farming-chat error: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
}
