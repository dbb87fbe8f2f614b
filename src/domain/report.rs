use std::collections::HashSet;

use serde::Serialize;

use crate::domain::resource::ResourceId;

/// Repeats are issued at every index divisible by this value, starting at 0.
pub const REPEAT_EVERY: usize = 4;

pub fn is_repeat_index(index: usize) -> bool {
	index % REPEAT_EVERY == 0
}

/// Number of repeat calls scheduled for `iterations` primary calls.
pub fn scheduled_repeats(iterations: usize) -> usize {
	iterations.div_ceil(REPEAT_EVERY)
}

/// Ordered record of what the transaction loop observed.
#[derive(Debug, Default, Clone)]
pub struct TransactionLedger {
	pub transaction_ids: Vec<ResourceId>,
	pub primary_calls:   usize,
	pub repeat_calls:    usize,
	pub failed_calls:    usize,
}

impl TransactionLedger {
	pub fn record(&mut self, id: Option<ResourceId>) {
		match id {
			Some(id) => self.transaction_ids.push(id),
			None => self.failed_calls += 1,
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct IdempotencyReport {
	pub api_version:           String,
	pub expected_transactions: usize,
	pub unique_transactions:   usize,
	pub idempotent:            bool,
	pub primary_calls:         usize,
	pub repeat_calls:          usize,
	pub failed_calls:          usize,
	pub transaction_ids:       Vec<ResourceId>,
}

impl IdempotencyReport {
	pub fn from_ledger(
		api_version: impl Into<String>,
		expected_transactions: usize,
		ledger: TransactionLedger,
	) -> Self {
		let unique_transactions = ledger
			.transaction_ids
			.iter()
			.collect::<HashSet<_>>()
			.len();

		Self {
			api_version: api_version.into(),
			expected_transactions,
			unique_transactions,
			idempotent: unique_transactions == expected_transactions,
			primary_calls: ledger.primary_calls,
			repeat_calls: ledger.repeat_calls,
			failed_calls: ledger.failed_calls,
			transaction_ids: ledger.transaction_ids,
		}
	}

	pub fn verdict(&self) -> &'static str {
		if self.idempotent { "IS" } else { "IS NOT" }
	}
}
