use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::api_response::ApiResponse;
use crate::domain::resource::{NewAccount, NewPerson, NewTerminal, NewTransaction};

#[async_trait]
pub trait FinanceApi: Send + Sync + 'static {
	async fn create_person(&self, person: &NewPerson) -> ApiResponse;
	async fn create_terminal(&self, terminal: &NewTerminal) -> ApiResponse;
	async fn create_account(&self, account: &NewAccount) -> ApiResponse;
	/// Unlike the setup calls, the request id is never generated here: reusing
	/// it is what the harness is probing.
	async fn create_transaction(
		&self,
		transaction: &NewTransaction,
		request_id: Uuid,
	) -> ApiResponse;
}
