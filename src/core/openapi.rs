use utoipa::{Modify, OpenApi};

use crate::features::products::{dtos as products_dtos, handlers as products_handlers, models};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::list_products_by_category,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::update_stock,
        products_handlers::delete_product,
    ),
    components(
        schemas(
            ErrorResponse,
            models::Category,
            products_dtos::ProductDto,
            products_dtos::UpdateStockDto,
            products_dtos::ProductResponseDto,
        )
    ),
    tags(
        (name = "productos", description = "Operaciones CRUD para la gestión de productos"),
    ),
    info(
        title = "Productos API",
        version = "0.1.0",
        description = "Operaciones CRUD para la gestión de productos",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_product_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/productos",
            "/api/productos/{id}",
            "/api/productos/{id}/stock",
            "/api/productos/categoria/{categoria}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn test_info_modifier_overrides_defaults() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Inventario".to_string(),
            version: "2.0.0".to_string(),
            description: "custom".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Inventario");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("custom"));
    }
}
