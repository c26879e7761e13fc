//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ItemClient` holds only the validated base URL. Each operation is split
//! into a `build_*` method that produces an `HttpRequest` and a `parse_*`
//! method that consumes an `HttpResponse`. Any 2xx status is success; any
//! other status is `RequestFailed` and the body is never decoded.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemPayload};

const ITEMS_PATH: &str = "/api/items/";

/// Synchronous, stateless client for the items API.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{ITEMS_PATH}", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{ITEMS_PATH}{id}", self.base_url)
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_item(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_item(&self, input: &ItemPayload) -> ApiResult<HttpRequest> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: json_headers(),
            body: Some(encode(input)?),
        })
    }

    /// No check is made that `id` is positive or exists.
    pub fn build_update_item(&self, id: i64, input: &ItemPayload) -> ApiResult<HttpRequest> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.item_url(id),
            headers: json_headers(),
            body: Some(encode(input)?),
        })
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> ApiResult<Vec<Item>> {
        decode(Operation::List, response)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> ApiResult<Item> {
        decode(Operation::Get, response)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> ApiResult<Item> {
        decode(Operation::Create, response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> ApiResult<Item> {
        decode(Operation::Update, response)
    }

    /// The body is ignored on success.
    pub fn parse_delete_item(&self, response: HttpResponse) -> ApiResult<()> {
        check_status(Operation::Delete, response).map(|_| ())
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode(input: &ItemPayload) -> ApiResult<String> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(operation: Operation, response: HttpResponse) -> ApiResult<T> {
    let response = check_status(operation, response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization {
        operation,
        message: e.to_string(),
    })
}

/// Collapse every non-2xx status into `RequestFailed`.
fn check_status(operation: Operation, response: HttpResponse) -> ApiResult<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ApiError::RequestFailed {
        operation,
        status: response.status,
        body: response.body,
    })
}
