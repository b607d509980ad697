//! HTTP client for the roadmap API

use crate::error::{CliError, CliResult, ParseOrigin};
use reqwest::{Client, StatusCode};
use roadmap_types::{CreateRoadmapRequest, Roadmap, RoadmapUpdate};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::debug;

/// HTTP client for communicating with the roadmap service
pub struct RoadmapClient {
    client: Client,
    base_url: String,
}

impl RoadmapClient {
    /// Create a new roadmap client
    ///
    /// With no `timeout` requests wait as long as the server takes.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> CliResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a single roadmap
    pub fn roadmap_url(&self, roadmap_id: &str) -> String {
        format!("{}{}", self.base_url, roadmap_path(roadmap_id))
    }

    /// List all roadmaps
    pub async fn list_roadmaps(&self) -> CliResult<Vec<Roadmap>> {
        self.get("/api/roadmaps").await
    }

    /// Get a roadmap by ID
    pub async fn get_roadmap(&self, roadmap_id: &str) -> CliResult<Roadmap> {
        self.get(&roadmap_path(roadmap_id)).await
    }

    /// Create a new roadmap
    pub async fn create_roadmap(&self, request: &CreateRoadmapRequest) -> CliResult<Roadmap> {
        self.post("/api/roadmaps", request).await
    }

    /// Replace a roadmap's title, description, ejes and iniciativas
    pub async fn update_roadmap(
        &self,
        roadmap_id: &str,
        update: &RoadmapUpdate,
    ) -> CliResult<Roadmap> {
        self.put(&roadmap_path(roadmap_id), update).await
    }

    // ========== Internal HTTP helpers ==========

    async fn get<T: DeserializeOwned>(&self, path: &str) -> CliResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        self.handle_response(path, response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> CliResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(path, response).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> CliResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "PUT");
        let response = self.client.put(&url).json(body).send().await?;
        self.handle_response(path, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> CliResult<T> {
        let status = response.status();
        debug!(status = status.as_u16(), path, "Response received");

        // Read the body as text so a malformed payload surfaces as a parse
        // error rather than a transport error.
        let body = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(|source| CliError::Parse {
                origin: ParseOrigin::Response,
                source: Box::new(source),
            })
        } else if status == StatusCode::NOT_FOUND {
            Err(CliError::NotFound(path.to_string()))
        } else {
            Err(CliError::Http {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

fn roadmap_path(roadmap_id: &str) -> String {
    format!("/api/roadmaps/{}", roadmap_id)
}
