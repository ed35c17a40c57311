use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::products::models::{Category, Product, ProductRow, ProductWrite};

/// Data access for products, keyed by the store-assigned id
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;

    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>>;

    /// Insert or overwrite, returning the stored product
    async fn save(&self, product: ProductWrite) -> Result<Product>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Deleting an id with no row is a no-op
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// PostgreSQL implementation backed by the `products` table
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl std::fmt::Debug for PgProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgProductRepository")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_products(rows: Vec<ProductRow>) -> Result<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, stock, category
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })?;

        into_products(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, stock, category
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product by id: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, stock, category
            FROM products
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products by category: {:?}", e);
            AppError::Database(e)
        })?;

        into_products(rows)
    }

    async fn save(&self, product: ProductWrite) -> Result<Product> {
        let updated_id = match &product {
            ProductWrite::Insert(_) => None,
            ProductWrite::Update(p) => Some(p.id),
        };

        let row: Option<ProductRow> = match product {
            ProductWrite::Insert(p) => sqlx::query_as::<_, ProductRow>(
                r#"
                INSERT INTO products (name, description, price, stock, category)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, description, price, stock, category
                "#,
            )
            .bind(p.name)
            .bind(p.description)
            .bind(p.price)
            .bind(p.stock)
            .bind(p.category.as_str())
            .fetch_optional(&self.pool)
            .await,
            ProductWrite::Update(p) => sqlx::query_as::<_, ProductRow>(
                r#"
                UPDATE products
                SET name = $2, description = $3, price = $4, stock = $5, category = $6
                WHERE id = $1
                RETURNING id, name, description, price, stock, category
                "#,
            )
            .bind(p.id)
            .bind(p.name)
            .bind(p.description)
            .bind(p.price)
            .bind(p.stock)
            .bind(p.category.as_str())
            .fetch_optional(&self.pool)
            .await,
        }
        .map_err(|e| {
            tracing::error!("Failed to save product: {:?}", e);
            AppError::Database(e)
        })?;

        // UPDATE returns nothing when the row was deleted after the caller looked it up
        let row = row.ok_or_else(|| match updated_id {
            Some(id) => AppError::NotFound(format!("Producto no encontrado con ID: {}", id)),
            None => AppError::Internal("Insert returned no row".to_string()),
        })?;
        Product::try_from(row)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check product existence: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(())
    }
}
