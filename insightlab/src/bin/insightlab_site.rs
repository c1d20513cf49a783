//! Writes `index.html` and `study.html` into an output directory.
//!
//! Usage: `insightlab-site [OUT_DIR]` (default `site`)

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

fn main() -> ExitCode {
    insightlab::telemetry::init(&std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()));

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("site"), PathBuf::from);

    match insightlab::site::write_site(&out_dir) {
        Ok(paths) => {
            for path in paths {
                info!(path = %path.display(), "page written");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "site generation failed");
            ExitCode::FAILURE
        }
    }
}
