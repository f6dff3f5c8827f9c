//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. When `ROUNDMARK_LOG_DIR` names a
/// usable directory, output goes to `roundmark.<pid>.log` inside it; otherwise
/// it goes to stderr. Calling this twice is harmless.
pub fn setup_tracing(verbose: bool) {
	let filter = || {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("roundmark=trace,debug")
			} else {
				EnvFilter::new("roundmark=debug,info")
			}
		})
	};

	if let Some(log_dir) = std::env::var("ROUNDMARK_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("roundmark.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(Mutex::new(file))
				.with_ansi(false)
				.with_target(true);

			if tracing_subscriber::registry()
				.with(filter())
				.with(file_layer)
				.try_init()
				.is_ok()
			{
				tracing::info!(path = ?log_path, "tracing initialized");
			}
			return;
		}
	}

	let _ = tracing_subscriber::fmt().with_env_filter(filter()).try_init();
}
