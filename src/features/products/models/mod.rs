pub mod category;
pub mod product;

pub use category::{Category, UnknownCategory};
pub use product::{NewProduct, Product, ProductRow, ProductWrite};
