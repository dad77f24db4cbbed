//! HTTP client for the remote content service
//!
//! - `GET <remote>/api/codat/clone/<id>` returns the file bytes with a
//!   `Content-Disposition` filename hint
//! - `PATCH <remote>/api/codat/edit/<id>` takes `{code, language}` and a
//!   bearer token; failures carry an `error` field in a JSON body

use crate::artifacts::remote::codat_link::CodatLink;
use crate::artifacts::remote::filename_from_disposition;
use crate::errors::CodatError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A file downloaded from the remote service
#[derive(Debug)]
pub struct FetchedCodat {
    pub filename: String,
    pub content: Vec<u8>,
}

#[derive(Serialize)]
struct EditRequest<'a> {
    code: &'a str,
    language: &'a str,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<serde_json::Value>,
}

pub struct RemoteClient {
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("codat/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Unable to create HTTP client")?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        RemoteClient { client }
    }

    pub async fn fetch(&self, link: &CodatLink) -> anyhow::Result<FetchedCodat> {
        let url = link.clone_url();
        tracing::debug!(%url, "fetching codat");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Error fetching file from {}", url))?;

        if !response.status().is_success() {
            return Err(remote_error(response).await.into());
        }

        let disposition = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let content = response
            .bytes()
            .await
            .with_context(|| format!("Error downloading file from {}", url))?;

        Ok(FetchedCodat {
            filename: filename_from_disposition(disposition.as_deref()),
            content: content.to_vec(),
        })
    }

    pub async fn submit(
        &self,
        link: &CodatLink,
        code: &str,
        language: &str,
        token: &str,
    ) -> anyhow::Result<()> {
        let url = link.edit_url();
        tracing::debug!(%url, language, "submitting codat");

        let response = self
            .client
            .patch(&url)
            .bearer_auth(token)
            .json(&EditRequest { code, language })
            .send()
            .await
            .with_context(|| format!("Error making PATCH request to {}", url))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(remote_error(response).await.into());
        }

        Ok(())
    }
}

async fn remote_error(response: reqwest::Response) -> CodatError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|response| response.error)
        .map(|error| match error {
            serde_json::Value::String(message) => message,
            other => other.to_string(),
        })
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "request failed".to_string());

    CodatError::Remote {
        status: status.as_u16(),
        message,
    }
}
