use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::features::locations::models::{County, Dataset, District, Parish, SubCounty, Village};
use crate::modules::locale_data::{HierarchyProvider, LoadError};

const DISTRICTS_FILE: &str = "districts.json";
const COUNTIES_FILE: &str = "counties.json";
const SUB_COUNTIES_FILE: &str = "subcounties.json";
const PARISHES_FILE: &str = "parishes.json";
const VILLAGES_FILE: &str = "villages.json";

/// Fetches the ug-locale JSON files from a base URL, once, without retry
pub struct RemoteProvider {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent("UgLocaleApi/1.0 (administrative-divisions)")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, file: &'static str) -> Result<Vec<T>, LoadError> {
        let url = format!("{}/{}", self.base_url, file);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| LoadError::Request { file, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { file, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LoadError::Request { file, source })?;

        let rows: Vec<T> =
            serde_json::from_slice(&body).map_err(|source| LoadError::Decode { file, source })?;

        tracing::info!("Loaded {} rows from {}", rows.len(), file);
        Ok(rows)
    }
}

#[async_trait]
impl HierarchyProvider for RemoteProvider {
    fn describe(&self) -> String {
        format!("remote ug-locale dataset at {}", self.base_url)
    }

    async fn load_hierarchy(&self) -> Result<Dataset, LoadError> {
        let (districts, counties, subcounties, parishes, villages) = tokio::try_join!(
            self.fetch::<District>(DISTRICTS_FILE),
            self.fetch::<County>(COUNTIES_FILE),
            self.fetch::<SubCounty>(SUB_COUNTIES_FILE),
            self.fetch::<Parish>(PARISHES_FILE),
            self.fetch::<Village>(VILLAGES_FILE),
        )?;

        Ok(Dataset {
            districts,
            counties,
            subcounties,
            parishes,
            villages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::locale_data::embedded_dataset;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    /// Serve `router` on an ephemeral port and return its base URL
    async fn spawn_source(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn provider(base_url: &str) -> RemoteProvider {
        RemoteProvider::new(base_url, Duration::from_secs(5)).unwrap()
    }

    fn sample_source() -> Router {
        Router::new()
            .route(
                "/districts.json",
                get(|| async { Json(embedded_dataset().districts) }),
            )
            .route(
                "/counties.json",
                get(|| async { Json(embedded_dataset().counties) }),
            )
            .route(
                "/subcounties.json",
                get(|| async { Json(embedded_dataset().subcounties) }),
            )
            .route(
                "/parishes.json",
                get(|| async { Json(embedded_dataset().parishes) }),
            )
            .route(
                "/villages.json",
                get(|| async { Json(embedded_dataset().villages) }),
            )
    }

    #[tokio::test]
    async fn test_load_hierarchy_from_remote_source() {
        let base_url = spawn_source(sample_source()).await;

        let dataset = provider(&base_url).load_hierarchy().await.unwrap();

        assert_eq!(dataset, embedded_dataset());
    }

    #[tokio::test]
    async fn test_load_accepts_integer_ids_and_wire_field_names() {
        let router = Router::new()
            .route(
                "/districts.json",
                get(|| async { Json(json!([{ "id": 42, "name": "Gulu" }])) }),
            )
            .route(
                "/counties.json",
                get(|| async {
                    Json(json!([{ "id": 4204, "name": "Paicho County", "district": 42 }]))
                }),
            )
            .route(
                "/subcounties.json",
                get(|| async {
                    Json(json!([{ "id": "420401", "name": "Paicho Sub County", "county": "4204" }]))
                }),
            )
            .route("/parishes.json", get(|| async { Json(json!([])) }))
            .route("/villages.json", get(|| async { Json(json!([])) }));
        let base_url = spawn_source(router).await;

        let dataset = provider(&base_url).load_hierarchy().await.unwrap();

        assert_eq!(dataset.districts[0].id, "42");
        assert_eq!(dataset.counties[0].district_id, "42");
        assert_eq!(dataset.subcounties[0].county_id, "4204");
        assert!(dataset.parishes.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_status_error() {
        let router = Router::new()
            .route(
                "/districts.json",
                get(|| async { Json(embedded_dataset().districts) }),
            )
            .route("/counties.json", get(|| async { Json(json!([])) }))
            .route("/subcounties.json", get(|| async { Json(json!([])) }))
            .route("/parishes.json", get(|| async { Json(json!([])) }))
            .route("/villages.json", get(|| async { StatusCode::NOT_FOUND }));
        let base_url = spawn_source(router).await;

        let err = provider(&base_url).load_hierarchy().await.unwrap_err();

        match err {
            LoadError::Status { file, status } => {
                assert_eq!(file, VILLAGES_FILE);
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let router = Router::new()
            .route("/districts.json", get(|| async { "not json" }))
            .route("/counties.json", get(|| async { Json(json!([])) }))
            .route("/subcounties.json", get(|| async { Json(json!([])) }))
            .route("/parishes.json", get(|| async { Json(json!([])) }))
            .route("/villages.json", get(|| async { Json(json!([])) }));
        let base_url = spawn_source(router).await;

        let err = provider(&base_url).load_hierarchy().await.unwrap_err();

        assert!(matches!(err, LoadError::Decode { file: DISTRICTS_FILE, .. }));
        assert!(err.to_string().contains(DISTRICTS_FILE));
    }

    #[tokio::test]
    async fn test_unreachable_source_is_request_error() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = provider(&format!("http://{}", addr))
            .load_hierarchy()
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Request { .. }));
    }
}
