use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
	Person,
	Terminal,
	Account,
	Transaction,
}

impl Resource {
	/// Path segment of the collection endpoint, e.g. `people`.
	pub fn collection(&self) -> &'static str {
		match self {
			Resource::Person => "people",
			Resource::Terminal => "terminals",
			Resource::Account => "accounts",
			Resource::Transaction => "transactions",
		}
	}

	/// Key wrapping the payload in the request body, e.g. `{ "person": .. }`.
	pub fn root(&self) -> &'static str {
		match self {
			Resource::Person => "person",
			Resource::Terminal => "terminal",
			Resource::Account => "account",
			Resource::Transaction => "transaction",
		}
	}
}

impl fmt::Display for Resource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.root())
	}
}

/// A payload that can be posted to one of the finance API collections.
pub trait ApiResource: Serialize + Send + Sync {
	const RESOURCE: Resource;
}

/// Identifier assigned by the finance API. It is echoed back in later
/// payloads with the JSON type the API used, so `2` stays a number and
/// `"T1"` stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
	Number(i64),
	Text(String),
}

impl ResourceId {
	pub fn new(id: impl Into<String>) -> Self {
		ResourceId::Text(id.into())
	}
}

impl fmt::Display for ResourceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ResourceId::Number(id) => write!(f, "{id}"),
			ResourceId::Text(id) => f.write_str(id),
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NewPerson {
	pub name:      String,
	pub last_name: String,
	#[serde(with = "iso_date")]
	pub birthday:  Date,
}

impl ApiResource for NewPerson {
	const RESOURCE: Resource = Resource::Person;
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NewTerminal {
	pub alias: String,
}

impl ApiResource for NewTerminal {
	const RESOURCE: Resource = Resource::Terminal;
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NewAccount {
	pub person_id: ResourceId,
	#[serde(with = "rust_decimal::serde::float")]
	pub balance:   Decimal,
}

impl ApiResource for NewAccount {
	const RESOURCE: Resource = Resource::Account;
}

/// Transaction fields chosen by the caller. The adapter stamps the creation
/// time when the request is sent.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NewTransaction {
	pub account_id:  ResourceId,
	pub terminal_id: ResourceId,
	#[serde(with = "rust_decimal::serde::float")]
	pub amount:      Decimal,
}
