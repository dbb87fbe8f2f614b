use serde_json::Value;

use crate::domain::resource::ResourceId;

/// Outcome of a single call to the finance API.
///
/// Non-2xx statuses are not errors at this level; callers inspect
/// [`ApiResponse::is_success`] themselves. A call that never got a response
/// (connection refused, timeout) is represented with no status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
	pub status:          Option<u16>,
	pub body:            Value,
	pub transport_error: Option<String>,
}

impl ApiResponse {
	pub fn with(status: u16, body: Value) -> Self {
		Self {
			status: Some(status),
			body,
			transport_error: None,
		}
	}

	pub fn transport_failure(reason: impl Into<String>) -> Self {
		Self {
			status:          None,
			body:            Value::Null,
			transport_error: Some(reason.into()),
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self.status, Some(200..=299))
	}

	/// The `id` field of the body, keeping the JSON type the API used.
	/// Numbers outside `i64` fall back to their textual form.
	pub fn id(&self) -> Option<ResourceId> {
		match self.body.get("id")? {
			Value::String(id) => Some(ResourceId::new(id.clone())),
			Value::Number(id) => Some(match id.as_i64() {
				Some(id) => ResourceId::Number(id),
				None => ResourceId::new(id.to_string()),
			}),
			_ => None,
		}
	}

	/// Id of the created resource, only when the call succeeded.
	pub fn created_id(&self) -> Option<ResourceId> {
		if self.is_success() { self.id() } else { None }
	}

	/// Status code for progress lines, `none` when no response arrived.
	pub fn code(&self) -> String {
		match self.status {
			Some(status) => status.to_string(),
			None => "none".to_string(),
		}
	}
}
