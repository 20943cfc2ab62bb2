//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the providers that supply the administrative hierarchy at startup.

pub mod locale_data;
