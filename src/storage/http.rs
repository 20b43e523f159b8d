//! REST implementation of RecordService
//!
//! Every resource lives under `{base_url}/{endpoint}/` with items at
//! `{base_url}/{endpoint}/{id}/`. The trailing slash is part of the route on
//! the backend side and must be kept.

use crate::config::{ClientConfig, STOCK_ADJUSTMENTS};
use crate::core::error::{ApiError, ErpResult, RecordError};
use crate::core::query::Listing;
use crate::core::{Record, RecordId, RecordService, StockAdjustment, StockService};
use crate::entities::Stock;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Shared HTTP client for the record store
///
/// Cheap to clone: the connection pool and configuration are shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: ClientConfig) -> ErpResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Record service for one resource type
    pub fn records<T: Record>(&self) -> ErpResult<HttpRecordService<T>> {
        let endpoint = self.config.endpoint(T::resource_name())?;

        Ok(HttpRecordService {
            client: self.clone(),
            base: format!("{}/{}", self.config.base(), endpoint),
            _marker: PhantomData,
        })
    }

    /// Stock service, including manual adjustments
    pub fn stock(&self) -> ErpResult<HttpStockService> {
        let endpoint = self.config.endpoint(STOCK_ADJUSTMENTS)?;

        Ok(HttpStockService {
            stock: self.records::<Stock>()?,
            adjust_base: format!("{}/{}", self.config.base(), endpoint),
        })
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http.execute(request).await?;
        debug!(%method, %url, status = response.status().as_u16(), "record store request");

        Ok(response)
    }
}

/// Map a non-2xx response to an API error
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Parse an API response, mapping HTTP errors to `ApiError`
async fn parse<R: DeserializeOwned>(resource: &str, response: Response) -> Result<R, ApiError> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
        resource: resource.to_string(),
        message: e.to_string(),
    })
}

/// Pick the most recent record out of an unordered listing.
///
/// Used when the store ignores the ordering parameters. The greatest ordering
/// value wins, later entries win ties, and if any record lacks the ordering
/// field the last entry is taken.
pub fn pick_latest<T: Record>(mut records: Vec<T>) -> Option<T> {
    let field = T::ordering_field();
    let keys: Option<Vec<_>> = records
        .iter()
        .map(|record| record.field_value(field).filter(|value| !value.is_null()))
        .collect();

    let Some(keys) = keys else {
        return records.pop();
    };

    let index = keys
        .iter()
        .enumerate()
        .reduce(|best, candidate| match best.1.compare(candidate.1) {
            Ordering::Greater => best,
            _ => candidate,
        })
        .map(|(index, _)| index)?;

    Some(records.swap_remove(index))
}

/// Record service backed by the REST API
#[derive(Debug, Clone)]
pub struct HttpRecordService<T: Record> {
    client: ApiClient,
    base: String,
    _marker: PhantomData<T>,
}

impl<T: Record> HttpRecordService<T> {
    /// Collection URL, with trailing slash
    pub fn collection_url(&self) -> String {
        format!("{}/", self.base)
    }

    /// Item URL, with trailing slash
    pub fn item_url(&self, id: RecordId) -> String {
        format!("{}/{}/", self.base, id)
    }

    fn http(&self) -> &reqwest::Client {
        &self.client.http
    }
}

#[async_trait]
impl<T: Record> RecordService<T> for HttpRecordService<T> {
    async fn list(&self) -> ErpResult<Vec<T>> {
        let mut url = self.collection_url();
        let mut visited = HashSet::new();
        let mut records = Vec::new();

        while visited.insert(url.clone()) {
            let response = self.client.execute(self.http().get(&url)).await?;
            match parse::<Listing<T>>(T::resource_name(), response).await? {
                Listing::Plain(rows) => {
                    records.extend(rows);
                    break;
                }
                Listing::Paginated(page) => {
                    records.extend(page.results);
                    match page.next {
                        Some(next) => url = next,
                        None => break,
                    }
                }
            }
        }

        Ok(records)
    }

    async fn get(&self, id: RecordId) -> ErpResult<Option<T>> {
        let response = self.client.execute(self.http().get(self.item_url(id))).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(parse(T::resource_name(), response).await?))
    }

    async fn create(&self, record: T) -> ErpResult<T> {
        let request = self.http().post(self.collection_url()).json(&record);
        let response = self.client.execute(request).await?;

        Ok(parse(T::resource_name(), response).await?)
    }

    async fn update(&self, id: RecordId, record: T) -> ErpResult<T> {
        let request = self.http().put(self.item_url(id)).json(&record);
        let response = self.client.execute(request).await?;

        Ok(parse(T::resource_name(), response).await?)
    }

    async fn patch(&self, id: RecordId, changes: Value) -> ErpResult<T> {
        let request = self.http().patch(self.item_url(id)).json(&changes);
        let response = self.client.execute(request).await?;

        Ok(parse(T::resource_name(), response).await?)
    }

    async fn delete(&self, id: RecordId) -> ErpResult<()> {
        let response = self.client.execute(self.http().delete(self.item_url(id))).await?;
        check_status(response).await?;
        Ok(())
    }

    async fn latest(&self) -> ErpResult<Option<T>> {
        let ordering = format!("-{}", T::ordering_field());
        let request = self
            .http()
            .get(self.collection_url())
            .query(&[("ordering", ordering.as_str()), ("page_size", "1")]);
        let response = self.client.execute(request).await?;

        let latest = match parse::<Listing<T>>(T::resource_name(), response).await? {
            Listing::Paginated(page) => page.results.into_iter().next(),
            Listing::Plain(rows) => pick_latest(rows),
        };

        Ok(latest)
    }
}

/// Stock rows plus manual adjustments
#[derive(Debug, Clone)]
pub struct HttpStockService {
    stock: HttpRecordService<Stock>,
    adjust_base: String,
}

impl HttpStockService {
    /// The plain record service for stock rows
    pub fn records(&self) -> &HttpRecordService<Stock> {
        &self.stock
    }

    pub fn adjust_url(&self, stock_id: RecordId, adjustment: StockAdjustment) -> String {
        format!("{}/{}/{}/", self.adjust_base, stock_id, adjustment.action())
    }
}

#[async_trait]
impl StockService for HttpStockService {
    async fn adjust(&self, stock_id: RecordId, adjustment: StockAdjustment) -> ErpResult<Stock> {
        let request = self
            .stock
            .http()
            .patch(self.adjust_url(stock_id, adjustment))
            .json(&json!({ "amount": adjustment.amount() }));
        let response = self.stock.client.execute(request).await?;
        check_status(response).await?;

        // The adjustment endpoint does not return the row; read it back
        self.stock.get(stock_id).await?.ok_or_else(|| {
            RecordError::NotFound {
                resource: Stock::resource_name().to_string(),
                id: stock_id,
            }
            .into()
        })
    }
}
