//! Kodegen Maker NSIS - resolves NSIS maker configuration for Windows installer builds.
//!
//! This binary loads a maker config, resolves codesigning, updater and app
//! builder settings for one packaged app, and writes the resulting documents.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match kodegen_maker_nsis::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
