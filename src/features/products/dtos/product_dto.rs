use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::products::models::{Category, NewProduct, Product};

/// Request DTO for creating or fully replacing a product
///
/// Required fields are `Option` so that a missing or `null` value is reported
/// as a validation violation instead of a parse error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductDto {
    /// Product name
    #[schema(example = "Mouse gamer RGB", value_type = String)]
    #[validate(
        required(message = "El nombre no puede estar vacío"),
        length(min = 3, max = 100, message = "El nombre debe tener entre 3 y 100 caracteres"),
        custom(function = "crate::shared::validation::not_blank", message = "El nombre no puede estar vacío")
    )]
    pub nombre: Option<String>,

    /// Detailed description
    #[schema(example = "Mouse con 6 botones programables y luces RGB")]
    #[validate(length(max = 500, message = "La descripción no puede superar los 500 caracteres"))]
    pub descripcion: Option<String>,

    /// Unit price
    #[schema(example = 5999.99, value_type = f64)]
    #[validate(
        required(message = "El precio no puede ser nulo"),
        range(min = 0.01, message = "El precio debe ser mayor que 0")
    )]
    pub precio: Option<f64>,

    /// Units in stock
    #[schema(example = 15, value_type = i32)]
    #[validate(
        required(message = "El stock no puede ser nulo"),
        range(min = 0, message = "El stock no puede ser negativo")
    )]
    pub stock: Option<i32>,

    /// Product category
    #[schema(value_type = Category)]
    #[validate(required(message = "La categoría no puede ser nula"))]
    pub categoria: Option<Category>,
}

impl ProductDto {
    /// Validate and convert into the domain form
    pub fn into_new_product(self) -> Result<NewProduct> {
        self.validate()?;

        match (self.nombre, self.precio, self.stock, self.categoria) {
            (Some(name), Some(price), Some(stock), Some(category)) => Ok(NewProduct {
                name,
                description: self.descripcion,
                price,
                stock,
                category,
            }),
            // Unreachable once `validate` passed
            _ => Err(AppError::Internal(
                "validated product is missing required fields".to_string(),
            )),
        }
    }
}

/// Request DTO for the stock-only update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStockDto {
    /// New stock value
    #[schema(example = 20, value_type = i32)]
    #[validate(
        required(message = "El stock no puede ser nulo"),
        range(min = 0, message = "El stock no puede ser negativo")
    )]
    pub stock: Option<i32>,
}

impl UpdateStockDto {
    pub fn into_stock(self) -> Result<i32> {
        self.validate()?;
        self.stock.ok_or_else(|| {
            AppError::Validation(vec!["stock: El stock no puede ser nulo".to_string()])
        })
    }
}

/// Response DTO for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Teclado mecánico")]
    pub nombre: String,
    #[schema(example = "Teclado mecánico con switches rojos")]
    pub descripcion: Option<String>,
    #[schema(example = 24999.99)]
    pub precio: f64,
    #[schema(example = 25)]
    pub stock: i32,
    pub categoria: Category,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            nombre: p.name,
            descripcion: p.description,
            precio: p.price,
            stock: p.stock,
            categoria: p.category,
        }
    }
}
