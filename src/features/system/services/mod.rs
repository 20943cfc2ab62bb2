mod system_service;

pub use system_service::SystemService;
