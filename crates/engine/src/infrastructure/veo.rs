//! Veo video generation client
//!
//! Implements the VideoGenPort trait against the generative language API's
//! long-running operation endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::infrastructure::ports::{VideoGenError, VideoGenPort, VideoJob, VideoJobRequest};

/// Client for the remote video-generation service.
#[derive(Clone)]
pub struct VeoClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl VeoClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Map a raw operation payload into the orchestrator's job view.
    ///
    /// A completed operation carrying an error is surfaced as a failure with
    /// the service's message text preserved for classification upstream.
    fn to_job(operation: Operation) -> Result<VideoJob, VideoGenError> {
        if let Some(error) = operation.error {
            return Err(VideoGenError::RequestFailed(error.message));
        }

        let result_uri = operation
            .response
            .as_ref()
            .and_then(|r| r.generated_videos.first())
            .and_then(|v| v.video.as_ref())
            .and_then(|v| v.uri.clone());

        Ok(VideoJob {
            name: operation.name,
            done: operation.done,
            result_uri,
        })
    }

    async fn get_operation(&self, name: &str) -> Result<Operation, VideoGenError> {
        let response = self
            .client
            .get(format!("{}/v1beta/{}", self.base_url, name))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| VideoGenError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::RequestFailed(error_text));
        }

        response
            .json()
            .await
            .map_err(|e| VideoGenError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl VideoGenPort for VeoClient {
    async fn create_job(&self, request: VideoJobRequest) -> Result<VideoJob, VideoGenError> {
        let body = serde_json::json!({
            "instances": [{ "prompt": request.prompt }],
            "parameters": {
                "sampleCount": request.sample_count,
                "resolution": request.resolution,
                "aspectRatio": request.aspect_ratio,
            }
        });

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:predictLongRunning",
                self.base_url, request.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| VideoGenError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::RequestFailed(error_text));
        }

        let operation: Operation = response
            .json()
            .await
            .map_err(|e| VideoGenError::InvalidResponse(e.to_string()))?;

        Self::to_job(operation)
    }

    async fn refresh_job(&self, job: &VideoJob) -> Result<VideoJob, VideoGenError> {
        let operation = self.get_operation(&job.name).await?;
        Self::to_job(operation)
    }

    async fn fetch_bytes(&self, uri: &str) -> Result<Vec<u8>, VideoGenError> {
        // The result locator already carries its own query string; the
        // credential is appended the same way the download link expects it.
        let response = self
            .client
            .get(format!("{}&key={}", uri, self.api_key))
            .send()
            .await
            .map_err(|e| VideoGenError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::RequestFailed(error_text));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| VideoGenError::RequestFailed(e.to_string()))
    }
}

// =============================================================================
// Remote API types
// =============================================================================

#[derive(Debug, Deserialize)]
struct Operation {
    name: String,
    #[serde(default)]
    done: bool,
    error: Option<OperationError>,
    response: Option<OperationResponse>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationResponse {
    #[serde(default)]
    generated_videos: Vec<GeneratedVideo>,
}

#[derive(Debug, Deserialize)]
struct GeneratedVideo {
    video: Option<VideoHandle>,
}

#[derive(Debug, Deserialize)]
struct VideoHandle {
    uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_completed_operation_with_result() {
        let payload = serde_json::json!({
            "name": "models/veo/operations/abc123",
            "done": true,
            "response": {
                "generatedVideos": [
                    { "video": { "uri": "https://svc/x?alt=media" } }
                ]
            }
        });
        let operation: Operation =
            serde_json::from_value(payload).expect("operation should parse");
        let job = VeoClient::to_job(operation).expect("job should resolve");

        assert!(job.done);
        assert_eq!(job.result_uri.as_deref(), Some("https://svc/x?alt=media"));
    }

    #[test]
    fn pending_operation_has_no_result() {
        let payload = serde_json::json!({ "name": "models/veo/operations/abc123" });
        let operation: Operation =
            serde_json::from_value(payload).expect("operation should parse");
        let job = VeoClient::to_job(operation).expect("job should resolve");

        assert!(!job.done);
        assert!(job.result_uri.is_none());
    }

    #[test]
    fn operation_error_surfaces_service_message() {
        let payload = serde_json::json!({
            "name": "models/veo/operations/abc123",
            "done": true,
            "error": { "message": "Requested entity was not found." }
        });
        let operation: Operation =
            serde_json::from_value(payload).expect("operation should parse");
        let err = VeoClient::to_job(operation).expect_err("error should surface");

        assert!(err.to_string().contains("Requested entity was not found"));
    }
}
