use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::products::dtos::{ProductDto, ProductResponseDto, UpdateStockDto};
use crate::features::products::models::{Category, Product, UnknownCategory};
use crate::features::products::services::ProductService;
use crate::shared::types::ErrorResponse;

fn to_response(products: Vec<Product>) -> Vec<ProductResponseDto> {
    products.into_iter().map(ProductResponseDto::from).collect()
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/productos",
    responses(
        (status = 200, description = "Lista de productos devuelta correctamente", body = Vec<ProductResponseDto>),
    ),
    tag = "productos"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.get_all().await?;
    Ok(Json(to_response(products)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/productos/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Producto encontrado", body = ProductResponseDto),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Producto no encontrado", body = ErrorResponse)
    ),
    tag = "productos"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ProductResponseDto>> {
    let product = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Producto no encontrado con ID: {}", id)))?;

    Ok(Json(product.into()))
}

/// Filter products by category
///
/// The category token is matched case-sensitively; unknown tokens are rejected with 400.
#[utoipa::path(
    get,
    path = "/api/productos/categoria/{categoria}",
    params(
        ("categoria" = Category, Path, description = "Category token, e.g. ELECTRONICA")
    ),
    responses(
        (status = 200, description = "Lista filtrada devuelta correctamente", body = Vec<ProductResponseDto>),
        (status = 400, description = "Unknown category", body = ErrorResponse)
    ),
    tag = "productos"
)]
pub async fn list_products_by_category(
    State(service): State<Arc<ProductService>>,
    AppPath(categoria): AppPath<String>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let category = categoria
        .parse::<Category>()
        .map_err(|e: UnknownCategory| AppError::BadRequest(e.to_string()))?;

    let products = service.get_by_category(category).await?;
    Ok(Json(to_response(products)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/productos",
    request_body = ProductDto,
    responses(
        (status = 201, description = "Producto creado exitosamente", body = ProductResponseDto),
        (status = 400, description = "Error de validación en los datos del producto", body = ErrorResponse)
    ),
    tag = "productos"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<ProductDto>,
) -> Result<(StatusCode, Json<ProductResponseDto>)> {
    let candidate = dto.into_new_product()?;

    let product = service.create_product(candidate).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Replace every field of an existing product
#[utoipa::path(
    put,
    path = "/api/productos/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Producto actualizado correctamente", body = ProductResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Producto no encontrado", body = ErrorResponse)
    ),
    tag = "productos"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<ProductDto>,
) -> Result<Json<ProductResponseDto>> {
    let replacement = dto.into_new_product()?;

    let product = service.update_product(id, replacement).await?;
    Ok(Json(product.into()))
}

/// Update only the stock of a product
#[utoipa::path(
    patch,
    path = "/api/productos/{id}/stock",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateStockDto,
    responses(
        (status = 200, description = "Stock actualizado correctamente", body = ProductResponseDto),
        (status = 400, description = "Valor de stock inválido", body = ErrorResponse),
        (status = 404, description = "Producto no encontrado", body = ErrorResponse)
    ),
    tag = "productos"
)]
pub async fn update_stock(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateStockDto>,
) -> Result<Json<ProductResponseDto>> {
    let stock = dto.into_stock()?;

    let product = service.update_stock(id, stock).await?;
    Ok(Json(product.into()))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/productos/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Producto eliminado exitosamente"),
        (status = 404, description = "Producto no encontrado", body = ErrorResponse)
    ),
    tag = "productos"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
