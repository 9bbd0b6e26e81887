use crate::rpc::ServerConfig;
use clap::{Parser, ValueEnum};

/// Serve the in-memory account store over JSON-RPC
#[derive(Parser, Debug)]
#[command(name = "account-service")]
#[command(about = "In-memory account service over JSON-RPC", long_about = None)]
pub struct CliArgs {
    /// Address to bind the RPC listener to
    #[arg(long = "bind", value_name = "ADDR", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(long = "port", value_name = "PORT", default_value_t = 50051)]
    pub port: u16,

    /// Store backend used to hold accounts
    #[arg(
        long = "store",
        value_name = "STORE",
        default_value = "concurrent",
        help = "Store backend: 'concurrent' (sharded map) or 'locked' (single RwLock)"
    )]
    pub store: StoreType,

    /// Number of runtime worker threads
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Start with an empty store instead of the demonstration accounts
    #[arg(long = "no-seed")]
    pub no_seed: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long = "log-filter", value_name = "FILTER", default_value = "info")]
    pub log_filter: String,
}

/// Available store backends
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreType {
    Concurrent,
    Locked,
}

impl CliArgs {
    /// Build a ServerConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults of [`ServerConfig`].
    pub fn to_server_config(&self) -> ServerConfig {
        let default = ServerConfig::default();
        ServerConfig::new(
            format!("{}:{}", self.bind, self.port),
            self.workers.unwrap_or(default.worker_threads),
            self.store,
            !self.no_seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_store(&["program"], StoreType::Concurrent)]
    #[case::explicit_concurrent(&["program", "--store", "concurrent"], StoreType::Concurrent)]
    #[case::explicit_locked(&["program", "--store", "locked"], StoreType::Locked)]
    fn test_store_parsing(#[case] args: &[&str], #[case] expected: StoreType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.store, expected);
    }

    #[rstest]
    #[case::defaults(&["program"], "127.0.0.1:50051", num_cpus::get(), true)]
    #[case::custom_bind(&["program", "--bind", "0.0.0.0", "--port", "9000"], "0.0.0.0:9000", num_cpus::get(), true)]
    #[case::custom_workers(&["program", "--workers", "3"], "127.0.0.1:50051", 3, true)]
    #[case::zero_workers_fallback(&["program", "--workers", "0"], "127.0.0.1:50051", num_cpus::get(), true)]
    #[case::no_seed(&["program", "--no-seed"], "127.0.0.1:50051", num_cpus::get(), false)]
    fn test_server_config_conversion(
        #[case] args: &[&str],
        #[case] bind_addr: &str,
        #[case] workers: usize,
        #[case] seed: bool,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_server_config();

        assert_eq!(config.bind_addr, bind_addr);
        assert_eq!(config.worker_threads, workers);
        assert_eq!(config.seed, seed);
    }

    #[test]
    fn test_log_filter_default() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.log_filter, "info");
    }

    #[rstest]
    #[case::invalid_store(&["program", "--store", "sqlite"])]
    #[case::invalid_port(&["program", "--port", "70000"])]
    #[case::invalid_workers(&["program", "--workers", "many"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
