use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    matches::{fetch_matches, index},
};
use crate::http::PageSource;

pub fn create_router<S: PageSource + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/fetch_matches", get(fetch_matches::<S>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::errors::FetchError;
    use crate::services::crawler::SweepFinder;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use tower::ServiceExt;

    struct StaticSite(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl PageSource for StaticSite {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.0
                .get(url)
                .map(|body| body.to_string())
                .ok_or(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE))
        }
    }

    fn router(pages: &[(&'static str, &'static str)]) -> Router {
        let config = AppConfig::new()
            .with_base_url("https://tt.example")
            .with_listing_url("https://tt.example/ce/table-tennis");
        let site = StaticSite(pages.iter().copied().collect());
        let finder = SweepFinder::new(site, &config).unwrap();
        create_router(Arc::new(AppState { finder }))
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, body) = get_body(router(&[]), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("/fetch_matches"));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_returns_empty_array() {
        let (status, body) = get_body(router(&[]), "/fetch_matches").await;
        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn test_fetch_matches_serializes_sweeps() {
        let pages = [
            (
                "https://tt.example/ce/table-tennis/p.1",
                r#"<table><tr><td>Czech Liga Pro</td><td>07/03 14:05</td><td>A v B</td><td></td><td><a href="/r/1">3-0</a></td><td></td></tr></table>"#,
            ),
            (
                "https://tt.example/r/1",
                r#"<div class="card"><table><tr><td>A</td><td>11</td><td>11</td><td>11</td></tr><tr><td>B</td><td>4</td><td>4</td><td>8</td></tr></table></div>"#,
            ),
        ];

        let (status, body) = get_body(router(&pages), "/fetch_matches").await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_slice(&body).unwrap();
        let matches = value.as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["competition"], "Czech Liga Pro");
        assert_eq!(matches[0]["result"], "3-0");
        assert_eq!(matches[0]["result_link"], "https://tt.example/r/1");
        assert_eq!(matches[0]["set_results"], json!([["A", [11, 11, 11]], ["B", [4, 4, 8]]]));
        assert!(matches[0]["date_time"].as_str().unwrap().ends_with("-03-07T14:05:00"));
    }
}
