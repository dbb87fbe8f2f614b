use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use finance_idempotency_harness::domain::api_response::ApiResponse;
use finance_idempotency_harness::domain::finance_api::FinanceApi;
use finance_idempotency_harness::domain::resource::{
	NewAccount, NewPerson, NewTerminal, NewTransaction,
};
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
	Person(NewPerson),
	Terminal(NewTerminal),
	Account(NewAccount),
	Transaction(NewTransaction, Uuid),
}

pub fn created(id: &str) -> ApiResponse {
	ApiResponse::with(201, json!({ "id": id }))
}

pub fn failed(status: u16) -> ApiResponse {
	ApiResponse::with(status, json!({ "errors": ["rejected"] }))
}

/// In-process [`FinanceApi`] with canned setup responses. Transactions answer
/// from a script first; once it runs out they behave like an idempotent
/// server, handing out `T<n>` ids keyed by request id.
pub struct ScriptedFinanceApi {
	terminal:     ApiResponse,
	person:       ApiResponse,
	account:      ApiResponse,
	transactions: Mutex<VecDeque<ApiResponse>>,
	ids:          Mutex<HashMap<Uuid, String>>,
	calls:        Mutex<Vec<Call>>,
}

impl ScriptedFinanceApi {
	pub fn new() -> Self {
		Self {
			terminal:     created("TERM-1"),
			person:       created("PERSON-1"),
			account:      created("ACC-1"),
			transactions: Mutex::new(VecDeque::new()),
			ids:          Mutex::new(HashMap::new()),
			calls:        Mutex::new(Vec::new()),
		}
	}

	pub fn with_terminal(mut self, response: ApiResponse) -> Self {
		self.terminal = response;
		self
	}

	pub fn with_person(mut self, response: ApiResponse) -> Self {
		self.person = response;
		self
	}

	pub fn with_account(mut self, response: ApiResponse) -> Self {
		self.account = response;
		self
	}

	pub fn with_transactions(self, responses: Vec<ApiResponse>) -> Self {
		*self.transactions.lock().unwrap() = responses.into();
		self
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.lock().unwrap().clone()
	}

	pub fn transaction_calls(&self) -> Vec<(NewTransaction, Uuid)> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				Call::Transaction(transaction, request_id) => {
					Some((transaction, request_id))
				}
				_ => None,
			})
			.collect()
	}

	fn record(&self, call: Call) {
		self.calls.lock().unwrap().push(call);
	}
}

#[async_trait]
impl FinanceApi for ScriptedFinanceApi {
	async fn create_person(&self, person: &NewPerson) -> ApiResponse {
		self.record(Call::Person(person.clone()));
		self.person.clone()
	}

	async fn create_terminal(&self, terminal: &NewTerminal) -> ApiResponse {
		self.record(Call::Terminal(terminal.clone()));
		self.terminal.clone()
	}

	async fn create_account(&self, account: &NewAccount) -> ApiResponse {
		self.record(Call::Account(account.clone()));
		self.account.clone()
	}

	async fn create_transaction(
		&self,
		transaction: &NewTransaction,
		request_id: Uuid,
	) -> ApiResponse {
		self.record(Call::Transaction(transaction.clone(), request_id));

		if let Some(response) = self.transactions.lock().unwrap().pop_front() {
			return response;
		}

		let mut ids = self.ids.lock().unwrap();
		let next = format!("T{}", ids.len() + 1);
		let id = ids.entry(request_id).or_insert(next).clone();
		created(&id)
	}
}
