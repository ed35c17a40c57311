use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::products::models::{Category, NewProduct, Product, ProductWrite};
use crate::features::products::repositories::ProductRepository;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Producto no encontrado con ID: {}", id))
}

/// Service for product inventory use cases
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new product; the store assigns its id
    pub async fn create_product(&self, candidate: NewProduct) -> Result<Product> {
        let product = self.repository.save(ProductWrite::Insert(candidate)).await?;

        tracing::info!(
            "Product created: id={}, category={}",
            product.id,
            product.category
        );

        Ok(product)
    }

    pub async fn get_all(&self) -> Result<Vec<Product>> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        self.repository.find_by_id(id).await
    }

    pub async fn get_by_category(&self, category: Category) -> Result<Vec<Product>> {
        self.repository.find_by_category(category).await
    }

    /// Replace every mutable field of an existing product
    pub async fn update_product(&self, id: i64, replacement: NewProduct) -> Result<Product> {
        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        product.replace_with(replacement);
        let product = self.repository.save(ProductWrite::Update(product)).await?;

        tracing::info!("Product updated: id={}", product.id);

        Ok(product)
    }

    /// Overwrite only the stock of an existing product
    pub async fn update_stock(&self, id: i64, stock: i32) -> Result<Product> {
        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let previous = product.stock;
        product.stock = stock;
        let product = self.repository.save(ProductWrite::Update(product)).await?;

        tracing::info!(
            "Product stock updated: id={}, stock {} -> {}",
            product.id,
            previous,
            product.stock
        );

        Ok(product)
    }

    pub async fn delete_product(&self, id: i64) -> Result<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found(id));
        }

        self.repository.delete_by_id(id).await?;
        tracing::info!("Product deleted: id={}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{InMemoryProductRepository, VanishingProductRepository};

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductRepository::default()))
    }

    fn mouse() -> NewProduct {
        NewProduct {
            name: "Mouse gamer RGB".to_string(),
            description: Some("Mouse con 6 botones programables y luces RGB".to_string()),
            price: 5999.99,
            stock: 15,
            category: Category::Electronica,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let service = service();
        let a = service.create_product(mouse()).await.unwrap();
        let b = service.create_product(mouse()).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(service.get_by_id(a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn test_update_product_replaces_all_fields() {
        let service = service();
        let created = service.create_product(mouse()).await.unwrap();

        let replacement = NewProduct {
            name: "Yerba mate".to_string(),
            description: None,
            price: 3200.0,
            stock: 40,
            category: Category::Alimentos,
        };
        let updated = service
            .update_product(created.id, replacement.clone())
            .await
            .unwrap();

        assert_eq!(updated, Product::with_id(created.id, replacement));
        assert_eq!(service.get_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_stock_only_touches_stock() {
        let service = service();
        let created = service.create_product(mouse()).await.unwrap();

        let updated = service.update_stock(created.id, 20).await.unwrap();

        assert_eq!(updated.stock, 20);
        assert_eq!(
            Product {
                stock: created.stock,
                ..updated
            },
            created
        );
    }

    #[tokio::test]
    async fn test_mutations_on_missing_id_are_not_found() {
        let service = service();

        assert!(matches!(
            service.update_product(42, mouse()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.update_stock(42, 1).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_product(42).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(service.get_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_of_row_deleted_after_lookup_is_not_found() {
        let repository = Arc::new(VanishingProductRepository::default());
        let service = ProductService::new(repository.clone());
        let first = service.create_product(mouse()).await.unwrap();
        let second = service.create_product(mouse()).await.unwrap();

        match service.update_product(first.id, mouse()).await {
            Err(AppError::NotFound(message)) => assert_eq!(
                message,
                format!("Producto no encontrado con ID: {}", first.id)
            ),
            other => panic!("expected NotFound, got {:?}", other),
        }
        match service.update_stock(second.id, 3).await {
            Err(AppError::NotFound(message)) => assert_eq!(
                message,
                format!("Producto no encontrado con ID: {}", second.id)
            ),
            other => panic!("expected NotFound, got {:?}", other),
        }

        // Nothing was written back for the vanished rows
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let service = service();
        let created = service.create_product(mouse()).await.unwrap();

        service.delete_product(created.id).await.unwrap();
        assert_eq!(service.get_by_id(created.id).await.unwrap(), None);

        let err = service.delete_product(created.id).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Not found: Producto no encontrado con ID: {}", created.id)
        );
    }

    #[tokio::test]
    async fn test_get_by_category_filters() {
        let service = service();
        let mouse = service.create_product(mouse()).await.unwrap();
        service
            .create_product(NewProduct {
                name: "Remera".to_string(),
                description: None,
                price: 15.0,
                stock: 5,
                category: Category::Ropa,
            })
            .await
            .unwrap();

        assert_eq!(
            service.get_by_category(Category::Electronica).await.unwrap(),
            vec![mouse]
        );
        assert!(service
            .get_by_category(Category::Juguetes)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(service.get_all().await.unwrap().len(), 2);
    }
}
