use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Create routes for the products feature
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/api/productos",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/productos/categoria/{categoria}",
            get(handlers::list_products_by_category),
        )
        .route(
            "/api/productos/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/api/productos/{id}/stock", patch(handlers::update_stock))
        .with_state(service)
}
