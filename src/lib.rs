use std::sync::Arc;

use log::info;
use reqwest::Client;

use crate::config::Config;
use crate::domain::progress::LineLogger;
use crate::domain::report::IdempotencyReport;
use crate::error::HarnessError;
use crate::infrastructure::fixtures::random_fixtures::RandomFixtures;
use crate::infrastructure::http::finance_api_client::FinanceApiClient;
use crate::infrastructure::logging::log_sink::LogSink;
use crate::use_cases::idempotency_test::IdempotencyTestUseCase;

pub mod config;
pub mod error;

pub mod domain {
	pub mod api_response;
	pub mod finance_api;
	pub mod fixtures;
	pub mod progress;
	pub mod report;
	pub mod resource;
}

pub mod use_cases {
	pub mod idempotency_test;
}

pub mod infrastructure {
	pub mod fixtures {
		pub mod random_fixtures;
	}
	pub mod http {
		pub mod finance_api_client;
	}
	pub mod logging {
		pub mod log_sink;
	}
}

#[derive(Debug, Clone)]
pub struct RunOptions {
	pub api_version: String,
	pub iterations:  usize,
	/// Seed for the payload generator. A random one is used when absent.
	pub seed:        Option<u64>,
}

pub fn build_http_client(config: &Config) -> Result<Client, HarnessError> {
	let mut builder = Client::builder();
	if let Some(timeout) = config.timeout() {
		builder = builder.timeout(timeout);
	}
	builder.build().map_err(HarnessError::HttpClient)
}

pub async fn run(
	config: Arc<Config>,
	options: RunOptions,
) -> Result<IdempotencyReport, HarnessError> {
	let http_client = build_http_client(&config)?;
	let api = FinanceApiClient::new(
		http_client,
		config.url.clone(),
		options.api_version.clone(),
	);

	let fixtures = match options.seed {
		Some(seed) => {
			info!("Using fixture seed {seed}");
			RandomFixtures::seeded(seed)
		}
		None => RandomFixtures::from_entropy(),
	};

	info!("Targeting finance API at {}", config.url);

	let mut use_case = IdempotencyTestUseCase::new(
		api,
		fixtures,
		LineLogger::new(LogSink),
		options.api_version,
	);
	use_case.execute(options.iterations).await
}
