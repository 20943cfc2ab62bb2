//! Service metadata endpoints: API index, health and dataset statistics.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | API information and route index |
//! | GET | `/health` | Health check with data validation |
//! | GET | `/stats` | Dataset statistics |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::SystemService;
