use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::server::{error::Error, model::app::AppState, service::layout::LayoutService};

pub static LAYOUT_TAG: &str = "layout";

/// Get the header menu
#[utoipa::path(
    get,
    path = "/api/header",
    tag = LAYOUT_TAG,
    responses(
        (status = 200, description = "Header data", body = crate::model::layout::HeaderDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_header(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let header = LayoutService::new(&state.db, &state.settings).header().await?;

    Ok((StatusCode::OK, Json(header)))
}

/// Get the footer sections
#[utoipa::path(
    get,
    path = "/api/footer",
    tag = LAYOUT_TAG,
    responses(
        (status = 200, description = "Footer data", body = crate::model::layout::FooterDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_footer(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let footer = LayoutService::new(&state.db, &state.settings).footer().await?;

    Ok((StatusCode::OK, Json(footer)))
}
