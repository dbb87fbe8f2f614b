use std::time::Duration;

use serde::Deserialize;

pub const ENV_PREFIX: &str = "FINANCE_API";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	/// Base URL of the finance API, e.g. `http://localhost:3000`.
	pub url:        String,
	pub timeout_ms: Option<u64>,
}

impl Config {
	/// Reads `FINANCE_API_*` variables, after loading a `.env` file if one is
	/// present. Variables already set in the environment take precedence.
	pub fn load() -> Result<Self, config::ConfigError> {
		dotenvy::dotenv().ok();

		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix(ENV_PREFIX))
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_ms.map(Duration::from_millis)
	}
}
