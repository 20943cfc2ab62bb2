mod location_service;

pub use location_service::{LocationService, NotFoundPolicy};
