use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use serde_json::json;

use shopfront_backoffice::{Outcome, RedirectTarget, RepositoryError, ViewData};

use crate::app::dto;

/// Render a service outcome as an HTTP response.
pub fn outcome_to_response(outcome: Outcome) -> axum::response::Response {
    match outcome {
        Outcome::View(view) => view_to_response(view),
        Outcome::Redirect(RedirectTarget::Listing) => Redirect::to("/products").into_response(),
        Outcome::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

fn view_to_response(view: ViewData) -> axum::response::Response {
    match view {
        ViewData::Empty => (StatusCode::OK, axum::Json(json!({}))).into_response(),
        ViewData::Item(product) => {
            (StatusCode::OK, axum::Json(dto::product_to_json(&product))).into_response()
        }
        ViewData::Listing(products) => {
            let items = products.iter().map(dto::product_to_json).collect::<Vec<_>>();
            (StatusCode::OK, axum::Json(json!({ "items": items }))).into_response()
        }
    }
}

pub fn storage_error_to_response(err: RepositoryError) -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "storage_error",
        err.to_string(),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
