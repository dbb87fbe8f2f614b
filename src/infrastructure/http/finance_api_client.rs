use std::collections::BTreeMap;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use reqwest::header::ACCEPT;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::api_response::ApiResponse;
use crate::domain::finance_api::FinanceApi;
use crate::domain::resource::{
	ApiResource, NewAccount, NewPerson, NewTerminal, NewTransaction, Resource,
	ResourceId,
};

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Wire shape of a transaction: the caller's fields plus the time the request
/// left the harness.
#[derive(Debug, Serialize)]
struct TransactionPayload<'a> {
	account_id:  &'a ResourceId,
	terminal_id: &'a ResourceId,
	#[serde(with = "rust_decimal::serde::float")]
	amount:      Decimal,
	#[serde(with = "time::serde::rfc3339")]
	timestamp:   OffsetDateTime,
}

impl ApiResource for TransactionPayload<'_> {
	const RESOURCE: Resource = Resource::Transaction;
}

#[derive(Clone)]
pub struct FinanceApiClient {
	http_client: Client,
	base_url:    String,
	version:     String,
}

impl FinanceApiClient {
	pub fn new(
		http_client: Client,
		base_url: impl Into<String>,
		version: impl Into<String>,
	) -> Self {
		Self {
			http_client,
			base_url: base_url.into(),
			version: version.into(),
		}
	}

	pub fn endpoint_for(&self, resource: Resource) -> String {
		format!(
			"{}/api/{}/{}",
			self.base_url.trim_end_matches('/'),
			self.version,
			resource.collection()
		)
	}

	async fn consume<P: ApiResource>(
		&self,
		payload: &P,
		request_id: Option<Uuid>,
	) -> ApiResponse {
		let url = self.endpoint_for(P::RESOURCE);
		let request_id = request_id.unwrap_or_else(Uuid::new_v4);
		let envelope = BTreeMap::from([(P::RESOURCE.root(), payload)]);

		debug!("POST {url} with {REQUEST_ID_HEADER} {request_id}");

		let response = match self
			.http_client
			.post(&url)
			.header(REQUEST_ID_HEADER, request_id.to_string())
			.header(ACCEPT, "application/json")
			.json(&envelope)
			.send()
			.await
		{
			Ok(response) => response,
			Err(e) => {
				error!("Failed to reach {url}: {e}");
				return ApiResponse::transport_failure(e.to_string());
			}
		};

		let status = response.status().as_u16();
		let body = response.json::<Value>().await.unwrap_or(Value::Null);

		ApiResponse::with(status, body)
	}
}

#[async_trait]
impl FinanceApi for FinanceApiClient {
	async fn create_person(&self, person: &NewPerson) -> ApiResponse {
		self.consume(person, None).await
	}

	async fn create_terminal(&self, terminal: &NewTerminal) -> ApiResponse {
		self.consume(terminal, None).await
	}

	async fn create_account(&self, account: &NewAccount) -> ApiResponse {
		self.consume(account, None).await
	}

	async fn create_transaction(
		&self,
		transaction: &NewTransaction,
		request_id: Uuid,
	) -> ApiResponse {
		let payload = TransactionPayload {
			account_id:  &transaction.account_id,
			terminal_id: &transaction.terminal_id,
			amount:      transaction.amount,
			timestamp:   OffsetDateTime::now_utc(),
		};

		self.consume(&payload, Some(request_id)).await
	}
}
