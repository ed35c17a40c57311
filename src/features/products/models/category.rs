use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product category. The uppercase token is both the wire value and the
/// stored column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Electronica,
    Ropa,
    Alimentos,
    Hogar,
    Deportes,
    Libros,
    Juguetes,
    Otros,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Electronica,
        Category::Ropa,
        Category::Alimentos,
        Category::Hogar,
        Category::Deportes,
        Category::Libros,
        Category::Juguetes,
        Category::Otros,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronica => "ELECTRONICA",
            Category::Ropa => "ROPA",
            Category::Alimentos => "ALIMENTOS",
            Category::Hogar => "HOGAR",
            Category::Deportes => "DEPORTES",
            Category::Libros => "LIBROS",
            Category::Juguetes => "JUGUETES",
            Category::Otros => "OTROS",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a token that names no category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Matching is case-sensitive: "electronica" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
