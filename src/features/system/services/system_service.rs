use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::features::locations::HierarchyStore;
use crate::features::system::dtos::{
    ApiInfoDto, EndpointsDto, HealthResponseDto, HealthStatus, StatsResponseDto,
};

const DATASET_NAME: &str = "Uganda Administrative Divisions";

/// Builds the metadata documents served by the system endpoints
pub struct SystemService {
    store: Arc<HierarchyStore>,
    title: String,
    description: String,
    version: String,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl SystemService {
    pub fn new(
        store: Arc<HierarchyStore>,
        title: String,
        description: String,
        version: String,
        source: String,
        loaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            store,
            title,
            description,
            version,
            source,
            loaded_at,
        }
    }

    pub fn info(&self) -> ApiInfoDto {
        ApiInfoDto {
            message: self.title.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
            data_source: self.source.clone(),
            endpoints: EndpointsDto::default(),
            stats: self.store.stats(),
        }
    }

    /// Unhealthy when any level of the hierarchy is empty
    pub fn health(&self) -> HealthResponseDto {
        let stats = self.store.stats();
        let data_loaded = self.store.is_fully_loaded();

        let (status, message) = if data_loaded {
            (HealthStatus::Healthy, format!("{} is running", self.title))
        } else {
            (
                HealthStatus::Unhealthy,
                format!("{} is running without a complete dataset", self.title),
            )
        };

        HealthResponseDto {
            status,
            message,
            data_loaded,
            stats,
        }
    }

    pub fn stats(&self) -> StatsResponseDto {
        StatsResponseDto {
            dataset: DATASET_NAME.to_string(),
            source: self.source.clone(),
            stats: self.store.stats(),
            loaded_at: self.loaded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::locale_data::embedded_dataset;

    fn service(store: HierarchyStore) -> SystemService {
        SystemService::new(
            Arc::new(store),
            "Uganda Locale API".to_string(),
            "Lookup API".to_string(),
            "2.0.0".to_string(),
            "embedded sample dataset".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_health_with_full_dataset() {
        let health = service(HierarchyStore::new(embedded_dataset())).health();

        assert_eq!(health.status, HealthStatus::Healthy);
        assert!(health.data_loaded);
        assert_eq!(health.stats.counties, 11);
    }

    #[test]
    fn test_health_with_empty_dataset_is_unhealthy() {
        let health = service(HierarchyStore::empty()).health();

        assert_eq!(health.status, HealthStatus::Unhealthy);
        assert!(!health.data_loaded);
        assert_eq!(health.stats.districts, 0);
    }

    #[test]
    fn test_info_lists_routes_and_source() {
        let info = service(HierarchyStore::new(embedded_dataset())).info();

        assert_eq!(info.endpoints.counties, "/counties/{district_id}");
        assert_eq!(info.data_source, "embedded sample dataset");
        assert_eq!(info.stats.districts, 5);
    }
}
