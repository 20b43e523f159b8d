//! Stub REST backend backed by in-memory stores
//!
//! Serves the same routes as the real backend under the default
//! configuration:
//!
//! - `/stock/invoice/`, `/customers/customers/`, `/stock/stock/`
//!   (collection and `{id}/` item routes)
//! - `PATCH /inventory/stock/{id}/{add|reduce}/` with `{"amount": n}`
//!
//! Collections answer with a plain array unless an `ordering` parameter is
//! given, in which case they answer with a paginated envelope holding the most
//! recent record.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use erp_admin::core::error::ErpError;
use erp_admin::core::{Record, RecordId, RecordService, StockAdjustment, StockService};
use erp_admin::entities::{Customer, Invoice, Stock};
use erp_admin::storage::InMemoryRecordService;
use serde_json::{Value, json};
use std::collections::HashMap;

/// In-memory stores behind the stub
#[derive(Clone, Default)]
pub struct StubBackend {
    pub invoices: InMemoryRecordService<Invoice>,
    pub customers: InMemoryRecordService<Customer>,
    pub stock: InMemoryRecordService<Stock>,
}

impl StubBackend {
    pub fn router(&self) -> Router {
        resource_routes("stock/invoice", self.invoices.clone())
            .merge(resource_routes("customers/customers", self.customers.clone()))
            .merge(resource_routes("stock/stock", self.stock.clone()))
            .merge(
                Router::new()
                    .route("/inventory/stock/{id}/{action}/", patch(adjust_stock))
                    .with_state(self.stock.clone()),
            )
    }

    /// Serve on an ephemeral port; returns the base URL
    pub async fn spawn(&self) -> String {
        serve(self.router()).await
    }
}

/// Serve any router on an ephemeral port; returns the base URL
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn resource_routes<T: Record>(prefix: &str, store: InMemoryRecordService<T>) -> Router {
    Router::new()
        .route(
            &format!("/{}/", prefix),
            get(list_records::<T>).post(create_record::<T>),
        )
        .route(
            &format!("/{}/{{id}}/", prefix),
            get(get_record::<T>)
                .put(update_record::<T>)
                .patch(patch_record::<T>)
                .delete(delete_record::<T>),
        )
        .with_state(store)
}

fn reject(err: ErpError) -> Response {
    let status = match &err {
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        ErpError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "detail": err.to_string() }))).into_response()
}

async fn list_records<T: Record>(
    State(store): State<InMemoryRecordService<T>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.contains_key("ordering") {
        return match store.latest().await {
            Ok(latest) => Json(json!({
                "count": store.len(),
                "next": null,
                "previous": null,
                "results": latest.into_iter().collect::<Vec<_>>(),
            }))
            .into_response(),
            Err(e) => reject(e),
        };
    }

    match store.list().await {
        Ok(records) => Json(records).into_response(),
        Err(e) => reject(e),
    }
}

async fn get_record<T: Record>(
    State(store): State<InMemoryRecordService<T>>,
    Path(id): Path<RecordId>,
) -> Response {
    match store.get(id).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response(),
        Err(e) => reject(e),
    }
}

async fn create_record<T: Record>(
    State(store): State<InMemoryRecordService<T>>,
    Json(record): Json<T>,
) -> Response {
    match store.create(record).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => reject(e),
    }
}

async fn update_record<T: Record>(
    State(store): State<InMemoryRecordService<T>>,
    Path(id): Path<RecordId>,
    Json(record): Json<T>,
) -> Response {
    match store.update(id, record).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => reject(e),
    }
}

async fn patch_record<T: Record>(
    State(store): State<InMemoryRecordService<T>>,
    Path(id): Path<RecordId>,
    Json(changes): Json<Value>,
) -> Response {
    match store.patch(id, changes).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => reject(e),
    }
}

async fn delete_record<T: Record>(
    State(store): State<InMemoryRecordService<T>>,
    Path(id): Path<RecordId>,
) -> Response {
    match store.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => reject(e),
    }
}

async fn adjust_stock(
    State(store): State<InMemoryRecordService<Stock>>,
    Path((id, action)): Path<(RecordId, String)>,
    Json(body): Json<Value>,
) -> Response {
    let Some(amount) = body["amount"].as_u64().and_then(|a| u32::try_from(a).ok()) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "amount": ["required"] }))).into_response();
    };

    let adjustment = match action.as_str() {
        "add" => StockAdjustment::Add(amount),
        "reduce" => StockAdjustment::Reduce(amount),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    match store.adjust(id, adjustment).await {
        Ok(_) => Json(json!({ "status": "ok" })).into_response(),
        Err(e) => reject(e),
    }
}
