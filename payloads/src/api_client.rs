use crate::{CenterType, ListResponse, responses};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// List the centers of the given type.
    pub async fn list_centers(
        &self,
        center_type: CenterType,
    ) -> Result<ListResponse<responses::Center>, ClientError> {
        let response = self.empty_get(center_type.endpoint()).await?;
        ok_list(response).await
    }

    /// List the course catalog.
    pub async fn list_formations(
        &self,
    ) -> Result<ListResponse<responses::Formation>, ClientError> {
        let response = self.empty_get("formations").await?;
        ok_list(response).await
    }

    /// List the rental fleet.
    pub async fn list_vehicles(
        &self,
    ) -> Result<ListResponse<responses::Vehicle>, ClientError> {
        let response = self.empty_get("vehicles").await?;
        ok_list(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Classify a successful list response by shape, or return an appropriate
/// error.
pub async fn ok_list<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ListResponse<T>, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    let body = response.text().await?;
    let value: serde_json::Value = serde_json::from_str(&body)?;
    Ok(ListResponse::from_value(value)?)
}
