use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::products::models::{Category, Product, ProductWrite};
use crate::features::products::repositories::ProductRepository;
use crate::features::products::{routes, ProductService};

/// In-memory stand-in for the products table, with ids assigned from 1
#[derive(Default)]
pub struct InMemoryProductRepository {
    state: RwLock<InMemoryState>,
}

#[derive(Default)]
struct InMemoryState {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>> {
        Ok(self
            .state
            .read()
            .await
            .rows
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn save(&self, product: ProductWrite) -> Result<Product> {
        let mut state = self.state.write().await;
        match product {
            ProductWrite::Insert(data) => {
                state.last_id += 1;
                let product = Product::with_id(state.last_id, data);
                state.rows.insert(product.id, product.clone());
                Ok(product)
            }
            ProductWrite::Update(product) => match state.rows.get_mut(&product.id) {
                Some(row) => {
                    *row = product.clone();
                    Ok(product)
                }
                None => Err(AppError::NotFound(format!(
                    "Producto no encontrado con ID: {}",
                    product.id
                ))),
            },
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.state.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.state.write().await.rows.remove(&id);
        Ok(())
    }
}

/// Repository whose rows disappear right after they are looked up, as if a
/// concurrent request deleted them between the read and the write
#[derive(Default)]
pub struct VanishingProductRepository {
    inner: InMemoryProductRepository,
}

#[async_trait]
impl ProductRepository for VanishingProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let found = self.inner.find_by_id(id).await?;
        self.inner.delete_by_id(id).await?;
        Ok(found)
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>> {
        self.inner.find_by_category(category).await
    }

    async fn save(&self, product: ProductWrite) -> Result<Product> {
        self.inner.save(product).await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        self.inner.exists_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.inner.delete_by_id(id).await
    }
}

/// Products router wired to a fresh in-memory repository
pub fn products_test_server() -> axum_test::TestServer {
    let repository = Arc::new(InMemoryProductRepository::default());
    let service = Arc::new(ProductService::new(repository));
    axum_test::TestServer::new(routes::routes(service)).expect("failed to build test server")
}
