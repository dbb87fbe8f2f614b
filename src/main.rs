use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use finance_idempotency_harness::config::Config;
use finance_idempotency_harness::error::HarnessError;
use finance_idempotency_harness::infrastructure::logging::log_sink::init_logging;
use finance_idempotency_harness::{RunOptions, run};
use log::error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Number of transactions to simulate. Every 4th one is sent twice.
	iterations: usize,

	/// API version under test, used as `/api/<version>/<resource>`
	#[arg(long, default_value = "v1")]
	api_version: String,

	/// Seed the payload generator to reproduce a run
	#[arg(long)]
	seed: Option<u64>,

	/// Also print the report as JSON
	#[arg(long)]
	json: bool,

	/// Exit with status 1 when the API is not idempotent
	#[arg(long)]
	strict: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging();

	let config = match Config::load() {
		Ok(config) => Arc::new(config),
		Err(e) => {
			let e = HarnessError::from(e);
			error!("{}: {e}", e.name());
			return ExitCode::from(2);
		}
	};

	let options = RunOptions {
		api_version: cli.api_version,
		iterations:  cli.iterations,
		seed:        cli.seed,
	};

	let report = match run(config, options).await {
		Ok(report) => report,
		Err(e) => {
			error!("{}: {e}", e.name());
			return ExitCode::from(2);
		}
	};

	if cli.json {
		match serde_json::to_string_pretty(&report) {
			Ok(json) => println!("{json}"),
			Err(e) => error!("Failed to serialize report: {e}"),
		}
	}

	if cli.strict && !report.idempotent {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}
