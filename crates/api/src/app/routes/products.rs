use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use shopfront_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/new", get(create_product_form))
        .route("/:id", get(get_product))
        .route("/:id/edit", get(edit_product_form).post(edit_product))
        .route("/:id/delete", get(delete_product_form).post(delete_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products_list().await {
        Ok(outcome) => errors::outcome_to_response(outcome),
        Err(e) => errors::storage_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    match services.products_detail(Some(id)).await {
        Ok(outcome) => errors::outcome_to_response(outcome),
        Err(e) => errors::storage_error_to_response(e),
    }
}

pub async fn create_product_form(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    errors::outcome_to_response(services.products_create_form())
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProductForm>,
) -> axum::response::Response {
    let candidate = body.into_product();
    // Validity is decided here, at the binding boundary; the service only
    // ever sees the resulting flag.
    let valid = candidate.validate().is_ok();

    match services.products_create(candidate, valid).await {
        Ok(outcome) => errors::outcome_to_response(outcome),
        Err(e) => errors::storage_error_to_response(e),
    }
}

pub async fn edit_product_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    match services.products_edit_form(Some(id)).await {
        Ok(outcome) => errors::outcome_to_response(outcome),
        Err(e) => errors::storage_error_to_response(e),
    }
}

pub async fn edit_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductForm>,
) -> axum::response::Response {
    let route_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    let candidate = body.into_product();
    let valid = candidate.validate().is_ok();

    match services.products_edit(route_id, candidate, valid).await {
        Ok(outcome) => errors::outcome_to_response(outcome),
        Err(e) => errors::storage_error_to_response(e),
    }
}

pub async fn delete_product_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    match services.products_delete_form(Some(id)).await {
        Ok(outcome) => errors::outcome_to_response(outcome),
        Err(e) => errors::storage_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    match services.products_delete_confirmed(id).await {
        Ok(outcome) => errors::outcome_to_response(outcome),
        Err(e) => errors::storage_error_to_response(e),
    }
}
