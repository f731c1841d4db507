use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::document::convert::convert_payload;
use crate::document::detect::{classify, DocumentFormat};
use crate::document::models::{ResumeBlock, ResumeV2};
use crate::document::render::render_markdown;
use crate::errors::AppError;
use crate::notify::ToastLevel;
use crate::state::AppState;
use crate::store::DocumentRecord;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub payload: Value,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub format: DocumentFormat,
}

/// POST /api/v1/documents/classify
pub async fn handle_classify(Json(req): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    Json(ClassifyResponse {
        format: classify(&req.payload),
    })
}

/// POST /api/v1/documents/convert
/// Dry-run conversion: returns the V2 document without persisting anything.
pub async fn handle_convert(
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ResumeV2>, AppError> {
    Ok(Json(convert_payload(&req.payload)?))
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub title: Option<String>,
    pub payload: Value,
}

/// POST /api/v1/documents
/// Accepts either format: V2 documents are stored as-is, V1 documents are
/// converted first. Anything else is rejected.
pub async fn handle_import(
    State(state): State<AppState>,
    Json(req): Json<ImportRequest>,
) -> Result<(StatusCode, Json<DocumentRecord>), AppError> {
    let source_format = classify(&req.payload);
    let document = match source_format {
        DocumentFormat::V2 => serde_json::from_value::<ResumeV2>(req.payload)
            .map_err(|e| AppError::Validation(format!("malformed v2 document: {e}")))?,
        DocumentFormat::V1 => convert_payload(&req.payload)?,
        DocumentFormat::Unknown => {
            return Err(AppError::UnprocessableEntity(
                "unrecognized resume format".to_string(),
            ))
        }
    };

    let title = req
        .title
        .filter(|t| !t.is_empty())
        .or_else(|| owner_name(&document))
        .unwrap_or_else(|| "未命名简历".to_string());

    let now = Utc::now();
    let record = state
        .store
        .save(DocumentRecord {
            id: Uuid::new_v4(),
            title,
            source_format,
            document,
            created_at: now,
            updated_at: now,
        })
        .await?;

    info!(
        "Imported resume {} ({:?}, '{}')",
        record.id, record.source_format, record.title
    );

    if source_format == DocumentFormat::V1 {
        state
            .toasts
            .add_toast(ToastLevel::Info, "旧版简历已自动升级为新格式");
    }
    state.toasts.add_toast(ToastLevel::Success, "简历导入成功");

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/documents
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentRecord>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// GET /api/v1/documents/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentRecord>, AppError> {
    Ok(Json(state.store.get(id).await?))
}

/// DELETE /api/v1/documents/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.delete(id).await?;
    state.toasts.add_toast(ToastLevel::Info, "简历已删除");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/documents/:id/render
pub async fn handle_render(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.store.get(id).await?;
    let markdown = render_markdown(&record.document);
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown,
    ))
}

/// Falls back to the personal-info name for untitled imports.
fn owner_name(document: &ResumeV2) -> Option<String> {
    document.blocks.iter().find_map(|block| match block {
        ResumeBlock::Object { data, .. } if !data.name.is_empty() => Some(data.name.clone()),
        _ => None,
    })
}
