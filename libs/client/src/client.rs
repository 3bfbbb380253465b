use entity::prelude::*;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use util::ApiConfig;

use crate::{response::IntoResponse, ClientError};

#[derive(Clone, Debug)]
pub struct Client {
    config: ApiConfig,
    client: reqwest::Client,
}

impl Client {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .into_response("failed to build http client")?;

        Ok(Self { config, client })
    }

    pub async fn get(
        &self,
        collection: Collection,
    ) -> Result<String, ClientError> {
        let url = self.config.collection_url(collection.path());
        debug!(task = "get collection", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .into_response("failed to send")?;

        read_success_text(response).await
    }

    pub async fn post(
        &self,
        collection: Collection,
        body: String,
    ) -> Result<String, ClientError> {
        let url = self.config.collection_url(collection.path());
        debug!(task = "post collection", url);

        let response = self
            .client
            .post(url)
            .header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=UTF-8"),
            )
            .body(body)
            .send()
            .await
            .into_response("failed to send")?;

        read_success_text(response).await
    }

    /// Reads the whole collection.
    pub async fn list<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, ClientError> {
        let text = self.get(collection).await?;

        serde_json::from_str::<Vec<T>>(&text)
            .into_response(&format!("failed to parse {} response", collection))
    }

    /// Creates `draft` and merges the server-assigned id into it.
    pub async fn create<D: Draft>(
        &self,
        collection: Collection,
        draft: D,
    ) -> Result<D::Created, ClientError> {
        let body = serde_json::to_string(&draft).map_err(|e| {
            ClientError::Encode {
                message: format!("failed to serialize {} draft", collection),
                source: e,
            }
        })?;

        let text = self.post(collection, body).await?;
        let id = created_id(&text)?;

        Ok(draft.with_id(id))
    }
}

async fn read_success_text(
    response: reqwest::Response,
) -> Result<String, ClientError> {
    let status = response.status();

    let text = response.text().await.into_response("failed to get text")?;

    if !status.is_success() {
        return Err(ClientError::Status {
            status_code: status,
            message: text,
        });
    }

    Ok(text)
}

/// A created response must be an object carrying a non-zero integer `id`.
fn created_id(text: &str) -> Result<i64, ClientError> {
    let value = serde_json::from_str::<Value>(text)
        .into_response("failed to parse created response")?;

    value
        .get("id")
        .and_then(Value::as_i64)
        .filter(|id| *id != 0)
        .into_response("created response has no usable id")
}
