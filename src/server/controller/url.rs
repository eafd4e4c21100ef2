use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::server::{error::Error, model::app::AppState, service::url::UrlService};

pub static URL_TAG: &str = "url";

#[derive(Deserialize)]
pub struct UrlParams {
    pub path: String,
}

/// Resolve a storefront path to its content type
///
/// Used by the client's dynamic route for any path the static route table does not match.
#[utoipa::path(
    get,
    path = "/api/url",
    tag = URL_TAG,
    params(
        ("path" = String, Query, description = "Storefront path, e.g. /fusion-backpack.html")
    ),
    responses(
        (status = 200, description = "Content registered for the path", body = crate::model::content::UrlDto),
        (status = 404, description = "No content registered for the path", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn resolve_url(
    State(state): State<AppState>,
    params: Query<UrlParams>,
) -> Result<impl IntoResponse, Error> {
    let url = UrlService::new(&state.db).resolve(&params.0.path).await?;

    Ok((StatusCode::OK, Json(url)))
}
