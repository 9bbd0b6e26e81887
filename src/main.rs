//! Account Service
//!
//! Serves the in-memory account store over JSON-RPC 2.0 on `POST /`.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --port 8080 --store locked
//! cargo run -- --no-seed --workers 4 --log-filter debug
//! ```
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown after Ctrl-C
//! - 1: Error (invalid log filter, bind failure, runtime failure)

use account_service::cli;
use account_service::rpc;
use account_service::telemetry;
use std::process;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = telemetry::init_tracing(&args.log_filter) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let config = args.to_server_config();
    if let Err(e) = rpc::run(config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
