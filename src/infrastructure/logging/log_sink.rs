use log::Level;

use crate::domain::progress::ProgressSink;

pub const PROGRESS_TARGET: &str = "finance_idempotency_harness::progress";

/// Forwards progress lines to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ProgressSink for LogSink {
	fn write_line(&mut self, level: Level, line: &str) {
		log::log!(target: PROGRESS_TARGET, level, "{line}");
	}
}

/// Installs `env_logger` on stdout, `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.target(env_logger::Target::Stdout)
	.init();
}
