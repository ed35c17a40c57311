//! Product inventory CRUD.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/productos` | List all products |
//! | GET | `/api/productos/{id}` | Get a product |
//! | GET | `/api/productos/categoria/{categoria}` | Filter by category |
//! | POST | `/api/productos` | Create a product |
//! | PUT | `/api/productos/{id}` | Replace a product |
//! | PATCH | `/api/productos/{id}/stock` | Update stock only |
//! | DELETE | `/api/productos/{id}` | Delete a product |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgProductRepository;
pub use services::ProductService;
