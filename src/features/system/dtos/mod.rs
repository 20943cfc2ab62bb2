mod system_dto;

pub use system_dto::{ApiInfoDto, EndpointsDto, HealthResponseDto, HealthStatus, StatsResponseDto};
