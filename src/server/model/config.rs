use std::env;
use std::net::SocketAddrV4;
use std::path::PathBuf;
use std::str::FromStr;
use anyhow::Context;

const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// JSON file backing the store; in-memory when absent
    pub orders_file: Option<PathBuf>,
    /// surface storage read failures instead of serving an empty list
    pub strict_reads: bool,
    /// deployment name reported by the health endpoint
    pub env_name: String,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, orders_file: Option<PathBuf>, strict_reads: bool, env_name: String) -> Self {
        Self {
            addr,
            orders_file,
            strict_reads,
            env_name,
        }
    }

    /// Read `HOST`, `ORDERS_FILE` and `ORDERS_STRICT_READS` from the process environment.
    pub fn from_env(env_name: String) -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or(DEFAULT_HOST_ADDR.to_string());
        let addr = SocketAddrV4::from_str(&host)
            .with_context(|| format!("failed to parse HOST={host}"))?;
        let orders_file = env::var("ORDERS_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let strict_reads = match env::var("ORDERS_STRICT_READS") {
            Ok(v) => parse_flag(&v).with_context(|| format!("failed to parse ORDERS_STRICT_READS={v}"))?,
            Err(_) => false,
        };
        Ok(Self::new(addr, orders_file, strict_reads, env_name))
    }
}

fn parse_flag(v: &str) -> anyhow::Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other}"),
    }
}
