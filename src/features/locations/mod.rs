//! Uganda administrative divisions lookup feature.
//!
//! Read-only listings over the district → county → sub-county → parish →
//! village hierarchy, plus a name search over districts.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/districts` | List all districts |
//! | GET | `/counties/{district_id}` | List counties in a district |
//! | GET | `/sub-counties/{county_id}` | List sub-counties in a county |
//! | GET | `/parishes/{sub_county_id}` | List parishes in a sub-county |
//! | GET | `/villages/{parish_id}` | List villages in a parish |
//! | GET | `/search/districts/{query}` | Search districts by name |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::{LocationService, NotFoundPolicy};
pub use store::{HierarchyStats, HierarchyStore};
