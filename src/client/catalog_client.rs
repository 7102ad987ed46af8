use std::env;

use chrono::Utc;
use reqwest::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use super::fallback::fallback_apps;
use super::types::{AppDraft, CatalogApp};
use super::wire::{Envelope, WireApp, WireAppWrite};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Client is in demo mode; writes are not available")]
    DemoMode,
}

/// Connection settings for the catalog client. Both connection values are
/// required for remote mode; when either is missing the client runs in demo
/// mode instead of failing construction.
#[derive(Debug, Clone, Default)]
pub struct CatalogClientConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub demo: bool,
}

impl CatalogClientConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("SAP_STORE_URL").ok().filter(|s| !s.is_empty());
        let api_key = env::var("SAP_STORE_KEY").ok().filter(|s| !s.is_empty());
        let demo = env::var("SAP_DEMO_MODE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            base_url,
            api_key,
            demo,
        }
    }
}

/// Data-access layer over the hosted catalog backend.
///
/// Constructed from an explicit config (no process-wide connection
/// singleton). Reads degrade to the demo dataset on failure so a browsing UI
/// stays populated; writes propagate their errors.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Option<String>,
    api_key: Option<String>,
    demo: bool,
}

impl CatalogClient {
    pub fn new(config: CatalogClientConfig) -> Self {
        let demo = config.demo || config.base_url.is_none() || config.api_key.is_none();
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.map(|u| u.trim_end_matches('/').to_string()),
            api_key: config.api_key,
            demo,
        }
    }

    /// True when reads are served from the built-in demo dataset
    pub fn is_demo(&self) -> bool {
        self.demo
    }

    /// All apps. Never fails: in demo mode, or when the backend cannot be
    /// reached (after one retry), the demo dataset is returned instead.
    pub async fn list_apps(&self) -> Vec<CatalogApp> {
        if self.demo {
            return fallback_apps();
        }

        match self.fetch_apps(None).await {
            Ok(apps) => apps,
            Err(first) => {
                tracing::warn!("Failed to list apps, retrying once: {}", first);
                match self.fetch_apps(None).await {
                    Ok(apps) => apps,
                    Err(e) => {
                        tracing::warn!("Failed to list apps, serving demo dataset: {}", e);
                        fallback_apps()
                    }
                }
            }
        }
    }

    /// Apps matching a case-insensitive substring of `term` in name,
    /// description, category or developer. Never fails: demo mode and
    /// unreachable backends filter the demo dataset locally.
    pub async fn search_apps(&self, term: &str) -> Vec<CatalogApp> {
        if self.demo {
            return Self::search_local(term);
        }

        match self.fetch_apps(Some(term)).await {
            Ok(apps) => apps,
            Err(e) => {
                tracing::warn!("Search failed, filtering demo dataset: {}", e);
                Self::search_local(term)
            }
        }
    }

    /// One app with factors resolved, or `None` if absent
    pub async fn get_app_by_id(&self, id: Uuid) -> Result<Option<CatalogApp>, ClientError> {
        if self.demo {
            return Ok(fallback_apps().into_iter().find(|a| a.id == id));
        }

        let response = self
            .request(reqwest::Method::GET, &format!("/api/apps/{}", id))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }

        let envelope: Envelope<WireApp> = response.json().await?;
        Ok(envelope.data.map(WireApp::into_catalog))
    }

    /// Create an app from a UI draft. No fallback; errors propagate.
    pub async fn create_app(&self, draft: &AppDraft) -> Result<CatalogApp, ClientError> {
        if self.demo {
            return Err(ClientError::DemoMode);
        }

        let body = WireAppWrite::from_draft(None, draft, Utc::now());
        let response = self
            .request(reqwest::Method::POST, "/api/apps")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::remote_error(response).await);
        }

        let envelope: Envelope<WireApp> = response.json().await?;
        envelope
            .data
            .map(WireApp::into_catalog)
            .ok_or(ClientError::Remote {
                status: status.as_u16(),
                message: "Create response carried no app".to_string(),
            })
    }

    /// Full replace of an app, including its factor set: a factor omitted
    /// from the draft is absent afterwards. No fallback; errors propagate.
    pub async fn update_app(&self, id: Uuid, draft: &AppDraft) -> Result<(), ClientError> {
        if self.demo {
            return Err(ClientError::DemoMode);
        }

        let body = WireAppWrite::from_draft(Some(id), draft, Utc::now());
        let response = self
            .request(reqwest::Method::PUT, &format!("/api/apps/{}", id))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }
        Ok(())
    }

    /// Delete an app and its factor flags
    pub async fn delete_app(&self, id: Uuid) -> Result<(), ClientError> {
        if self.demo {
            return Err(ClientError::DemoMode);
        }

        let response = self
            .request(reqwest::Method::DELETE, &format!("/api/apps/{}", id))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }
        Ok(())
    }

    async fn fetch_apps(&self, search: Option<&str>) -> Result<Vec<CatalogApp>, ClientError> {
        let mut request = self.request(reqwest::Method::GET, "/api/apps");
        if let Some(term) = search {
            request = request.query(&[("search", term)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }

        let envelope: Envelope<Vec<WireApp>> = response.json().await?;
        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .map(WireApp::into_catalog)
            .collect())
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        // Remote mode always has a base_url; demo mode never reaches here
        let base = self.base_url.as_deref().unwrap_or_default();
        let mut builder = self.http.request(method, format!("{}{}", base, path));
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        builder
    }

    fn search_local(term: &str) -> Vec<CatalogApp> {
        fallback_apps()
            .into_iter()
            .filter(|app| app.matches_term(term))
            .collect()
    }

    async fn remote_error(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response
            .json::<Envelope<serde_json::Value>>()
            .await
            .ok()
            .and_then(|e| describe_failure(e.message, e.errors))
            .unwrap_or_else(|| "request failed".to_string());
        ClientError::Remote { status, message }
    }
}

/// Fold the envelope's message and per-field error list into one line
fn describe_failure(message: Option<String>, errors: Option<Vec<String>>) -> Option<String> {
    let details = errors.filter(|e| !e.is_empty()).map(|e| e.join("; "));
    match (message, details) {
        (Some(message), Some(details)) => Some(format!("{}: {}", message, details)),
        (Some(message), None) => Some(message),
        (None, details) => details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::apps::models::{AppStore, DrugRating};

    fn demo_client() -> CatalogClient {
        CatalogClient::new(CatalogClientConfig::default())
    }

    fn remote_client(base_url: String) -> CatalogClient {
        CatalogClient::new(CatalogClientConfig {
            base_url: Some(base_url),
            api_key: Some("test-key".to_string()),
            demo: false,
        })
    }

    fn draft() -> AppDraft {
        AppDraft {
            name: "Notion".to_string(),
            developer: "Notion Labs".to_string(),
            category: "Productivity".to_string(),
            description: String::new(),
            icon: String::new(),
            store: AppStore::Both,
            rating: DrugRating::Tool,
            business_model: None,
            factors: vec![],
        }
    }

    /// Serve a canned response on a local port and return the base URL
    async fn spawn_stub(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Remote-configured client pointing at a port nothing listens on
    fn unreachable_client() -> CatalogClient {
        CatalogClient::new(CatalogClientConfig {
            base_url: Some("http://127.0.0.1:1".to_string()),
            api_key: Some("test-key".to_string()),
            demo: false,
        })
    }

    #[test]
    fn missing_connection_values_degrade_to_demo_mode() {
        assert!(demo_client().is_demo());

        let partial = CatalogClient::new(CatalogClientConfig {
            base_url: Some("http://localhost:3000".to_string()),
            api_key: None,
            demo: false,
        });
        assert!(partial.is_demo());

        assert!(!unreachable_client().is_demo());
    }

    #[tokio::test]
    async fn demo_list_is_non_empty() {
        let apps = demo_client().list_apps().await;
        assert!(!apps.is_empty());
    }

    #[tokio::test]
    async fn demo_search_filters_the_dataset() {
        let client = demo_client();
        let hits = client.search_apps("note").await;
        assert!(hits.iter().any(|a| a.name == "Notion"));

        let misses = client.search_apps("zzzzzz").await;
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn unreachable_backend_serves_the_demo_dataset() {
        let apps = unreachable_client().list_apps().await;
        assert!(!apps.is_empty());
    }

    #[tokio::test]
    async fn demo_get_by_id_resolves_known_ids() {
        let client = demo_client();
        let known = fallback_apps()[0].id;

        let found = client.get_app_by_id(known).await.unwrap();
        assert!(found.is_some());

        let absent = client.get_app_by_id(Uuid::new_v4()).await.unwrap();
        assert!(absent.is_none());
    }

    #[tokio::test]
    async fn writes_are_rejected_in_demo_mode() {
        let client = demo_client();
        let result = client.delete_app(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ClientError::DemoMode)));
    }

    #[test]
    fn failure_detail_folds_message_and_error_list() {
        assert_eq!(
            describe_failure(
                Some("Validation failed".to_string()),
                Some(vec![
                    "name: too short".to_string(),
                    "icon: not a URL".to_string(),
                ]),
            ),
            Some("Validation failed: name: too short; icon: not a URL".to_string())
        );
        assert_eq!(
            describe_failure(Some("Bad request".to_string()), None),
            Some("Bad request".to_string())
        );
        assert_eq!(describe_failure(None, Some(vec![])), None);
    }

    #[tokio::test]
    async fn remote_rejection_surfaces_status_and_error_detail() {
        let router = axum::Router::new().route(
            "/api/apps",
            axum::routing::post(|| async {
                (
                    axum::http::StatusCode::BAD_REQUEST,
                    axum::Json(serde_json::json!({
                        "success": false,
                        "data": null,
                        "message": "Validation failed",
                        "errors": ["icon: Icon must be empty or a valid URL"],
                    })),
                )
            }),
        );
        let client = remote_client(spawn_stub(router).await);

        match client.create_app(&draft()).await {
            Err(ClientError::Remote { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(
                    message,
                    "Validation failed: icon: Icon must be empty or a valid URL"
                );
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_response_without_an_app_reports_the_real_status() {
        let router = axum::Router::new().route(
            "/api/apps",
            axum::routing::post(|| async {
                axum::Json(serde_json::json!({
                    "success": true,
                    "data": null,
                    "message": "Created",
                }))
            }),
        );
        let client = remote_client(spawn_stub(router).await);

        match client.create_app(&draft()).await {
            Err(ClientError::Remote { status, message }) => {
                assert_eq!(status, 200);
                assert!(message.contains("no app"));
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }
}
