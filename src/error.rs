use derive_more::derive::{Display, Error};

use crate::domain::resource::Resource;

#[derive(Debug, Display, Error)]
pub enum HarnessError {
	#[display("Could not load configuration: {_0}")]
	Configuration(config::ConfigError),
	#[display("Could not build the HTTP client: {_0}")]
	HttpClient(reqwest::Error),
	#[display("Setup aborted: {resource} creation failed with code {code}")]
	SetupFailed { resource: Resource, code: String },
}

impl HarnessError {
	pub fn name(&self) -> String {
		match self {
			HarnessError::Configuration(_) => "Configuration Error".to_string(),
			HarnessError::HttpClient(_) => "HTTP Client Error".to_string(),
			HarnessError::SetupFailed { .. } => "Setup Failure".to_string(),
		}
	}
}

impl From<config::ConfigError> for HarnessError {
	fn from(error: config::ConfigError) -> Self {
		HarnessError::Configuration(error)
	}
}
