use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

pub const DEFAULT_LIMIT: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for both POST and PUT. PUT replaces both fields.
#[derive(Deserialize)]
pub struct ItemInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    items: BTreeMap<i64, Item>,
}

pub type Db = Arc<RwLock<Store>>;

pub struct NotFound;

impl IntoResponse for NotFound {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Item not found" })),
        )
            .into_response()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/", get(root))
        .route("/api/items/", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API is running",
        "items": "/api/items/",
    }))
}

async fn list_items(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Item>> {
    let store = db.read().await;
    let items: Vec<Item> = store
        .items
        .values()
        .skip(params.skip)
        .take(params.limit)
        .cloned()
        .collect();
    Json(items)
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<ItemInput>,
) -> (StatusCode, Json<Item>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let now = Utc::now();
    let item = Item {
        id: store.next_id,
        title: input.title,
        description: input.description,
        created_at: now,
        updated_at: now,
    };
    store.items.insert(item.id, item.clone());
    info!(id = item.id, "item created");
    (StatusCode::CREATED, Json(item))
}

async fn get_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Item>, NotFound> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or(NotFound)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, NotFound> {
    let mut store = db.write().await;
    let item = store.items.get_mut(&id).ok_or(NotFound)?;
    item.title = input.title;
    item.description = input.description;
    item.updated_at = Utc::now();
    info!(id, "item updated");
    Ok(Json(item.clone()))
}

async fn delete_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, NotFound> {
    let mut store = db.write().await;
    store.items.remove(&id).ok_or(NotFound)?;
    info!(id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}
