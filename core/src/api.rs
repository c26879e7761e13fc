//! Async executor that drives `ItemClient` over `reqwest`.
//!
//! Each call is one independent round trip: build, send, parse. There is no
//! retry, no timeout beyond what the supplied `reqwest::Client` carries, and
//! no state shared between calls other than the connection pool.

use reqwest::Method;
use tracing::{debug, warn};

use crate::client::ItemClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemPayload};

const USER_AGENT: &str = concat!("item-core/", env!("CARGO_PKG_VERSION"));

/// Items API client that performs the network I/O itself.
#[derive(Debug, Clone)]
pub struct ItemApi {
    client: ItemClient,
    http: reqwest::Client,
}

impl ItemApi {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::config(e.to_string()))?;
        Ok(Self::with_http_client(config, http))
    }

    /// Use a caller-configured `reqwest::Client` (proxies, TLS roots, timeouts).
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            client: ItemClient::new(config),
            http,
        }
    }

    pub fn client(&self) -> &ItemClient {
        &self.client
    }

    pub async fn list(&self) -> ApiResult<Vec<Item>> {
        let response = self
            .execute(Operation::List, self.client.build_list_items())
            .await?;
        self.client.parse_list_items(response)
    }

    pub async fn get(&self, id: i64) -> ApiResult<Item> {
        let response = self
            .execute(Operation::Get, self.client.build_get_item(id))
            .await?;
        self.client.parse_get_item(response)
    }

    pub async fn create(&self, data: &ItemPayload) -> ApiResult<Item> {
        let request = self.client.build_create_item(data)?;
        let response = self.execute(Operation::Create, request).await?;
        self.client.parse_create_item(response)
    }

    pub async fn update(&self, id: i64, data: &ItemPayload) -> ApiResult<Item> {
        let request = self.client.build_update_item(id, data)?;
        let response = self.execute(Operation::Update, request).await?;
        self.client.parse_update_item(response)
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        let response = self
            .execute(Operation::Delete, self.client.build_delete_item(id))
            .await?;
        self.client.parse_delete_item(response)
    }

    async fn execute(&self, operation: Operation, request: HttpRequest) -> ApiResult<HttpResponse> {
        let transport = |e: reqwest::Error| {
            warn!(%operation, error = %e, "transport error");
            ApiError::Transport {
                operation,
                message: e.to_string(),
            }
        };

        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self.http.request(to_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(transport)?;

        if (200..300).contains(&status) {
            debug!(status, "request succeeded");
        } else {
            warn!(%operation, status, "request failed");
        }

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}
