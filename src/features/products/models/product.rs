use sqlx::FromRow;

use crate::core::error::AppError;
use crate::features::products::models::Category;

/// A persisted product. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category: Category,
}

/// Data for creating a new product, or the full replacement of an existing one
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category: Category,
}

/// What `ProductRepository::save` should do with a product
#[derive(Debug, Clone)]
pub enum ProductWrite {
    /// Insert a new row; the store assigns the id
    Insert(NewProduct),
    /// Overwrite every mutable column of the row with `id`
    Update(Product),
}

impl From<NewProduct> for ProductWrite {
    fn from(product: NewProduct) -> Self {
        ProductWrite::Insert(product)
    }
}

impl From<Product> for ProductWrite {
    fn from(product: Product) -> Self {
        ProductWrite::Update(product)
    }
}

impl Product {
    /// Build the persisted form of `data` under a store-assigned id
    pub fn with_id(id: i64, data: NewProduct) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            stock: data.stock,
            category: data.category,
        }
    }

    /// Replace every mutable field, keeping the id
    pub fn replace_with(&mut self, replacement: NewProduct) {
        self.name = replacement.name;
        self.description = replacement.description;
        self.price = replacement.price;
        self.stock = replacement.stock;
        self.category = replacement.category;
    }
}

/// Database row for the `products` table
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = AppError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category = row.category.parse::<Category>().map_err(|e| {
            AppError::Internal(format!("Product {} has invalid category: {}", row.id, e))
        })?;

        Ok(Product::with_id(
            row.id,
            NewProduct {
                name: row.name,
                description: row.description,
                price: row.price,
                stock: row.stock,
                category,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard() -> NewProduct {
        NewProduct {
            name: "Teclado mecánico".to_string(),
            description: Some("Switches rojos".to_string()),
            price: 24999.99,
            stock: 25,
            category: Category::Electronica,
        }
    }

    #[test]
    fn test_replace_with_keeps_id_and_clears_missing_description() {
        let mut product = Product::with_id(7, keyboard());
        product.replace_with(NewProduct {
            name: "Pelota".to_string(),
            description: None,
            price: 10.5,
            stock: 3,
            category: Category::Deportes,
        });

        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Pelota");
        assert_eq!(product.description, None);
        assert_eq!(product.price, 10.5);
        assert_eq!(product.stock, 3);
        assert_eq!(product.category, Category::Deportes);
    }

    #[test]
    fn test_row_conversion() {
        let row = ProductRow {
            id: 1,
            name: "Remera".to_string(),
            description: None,
            price: 15.0,
            stock: 0,
            category: "ROPA".to_string(),
        };
        let product = Product::try_from(row).unwrap();
        assert_eq!(product.category, Category::Ropa);
        assert_eq!(product.id, 1);
    }

    #[test]
    fn test_row_with_unknown_category_is_internal_error() {
        let row = ProductRow {
            id: 9,
            name: "Silla".to_string(),
            description: None,
            price: 15.0,
            stock: 1,
            category: "MUEBLES".to_string(),
        };
        assert!(matches!(
            Product::try_from(row),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_write_conversions() {
        assert!(matches!(ProductWrite::from(keyboard()), ProductWrite::Insert(_)));
        assert!(matches!(
            ProductWrite::from(Product::with_id(1, keyboard())),
            ProductWrite::Update(p) if p.id == 1
        ));
    }
}
