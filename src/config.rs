use anyhow::{anyhow, Result};
use clap::Parser;
use std::env;

use crate::constants::fetch::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_MS, MAX_PAGE_SIZE};

/// Networks the marketplace is deployed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Testnet,
    Mainnet,
}

impl Network {
    /// All supported networks, in display order.
    pub const ALL: [Network; 2] = [Network::Testnet, Network::Mainnet];

    /// Network used when a label is unrecognized (matches the UI default).
    pub const FALLBACK: Network = Network::Mainnet;

    /// Fail-closed label parsing: the network selector is a display-layer
    /// convenience, so an unknown label warns and resolves to the fallback
    /// network instead of erroring.
    pub fn from_label(label: &str) -> Network {
        label.parse().unwrap_or_else(|_| {
            log::warn!(
                "[config] unknown network '{label}', falling back to {}",
                Network::FALLBACK
            );
            Network::FALLBACK
        })
    }

    /// Resolve every environment-specific endpoint and contract name for
    /// this network in one lookup.
    pub fn config(self) -> &'static NetworkConfig {
        match self {
            Network::Testnet => &TESTNET,
            Network::Mainnet => &MAINNET,
        }
    }
}

impl std::str::FromStr for Network {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            _ => Err(anyhow!(
                "Invalid network '{s}'. Valid options: testnet, mainnet"
            )),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Testnet => write!(f, "testnet"),
            Network::Mainnet => write!(f, "mainnet"),
        }
    }
}

/// Per-network endpoints and contract names.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    pub otc_contract: &'static str,
    pub fee_percent: f64,
    pub node_url: &'static str,
    pub graphql_url: &'static str,
    pub websocket_url: &'static str,
}

static TESTNET: NetworkConfig = NetworkConfig {
    otc_contract: "con_otc",
    fee_percent: 0.5,
    node_url: "https://testnet.xian.org",
    graphql_url: "https://testnet.xian.org/graphql",
    websocket_url: "wss://testnet.xian.org/websocket",
};

static MAINNET: NetworkConfig = NetworkConfig {
    otc_contract: "con_otc_v3",
    fee_percent: 0.5,
    node_url: "https://node.xian.org",
    graphql_url: "https://node.xian.org/graphql",
    websocket_url: "wss://node.xian.org/websocket",
};

/// Otcx - OTC Marketplace Listing Viewer
///
/// Terminal frontend for browsing open token-swap listings indexed from
/// chain state. Configuration priority: CLI args > Environment variables >
/// Defaults
#[derive(Parser, Debug)]
#[command(name = "otcx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OTC marketplace listing viewer", long_about = None)]
pub struct CliArgs {
    /// Network to browse: testnet or mainnet (unknown labels fall back to mainnet)
    #[arg(short, long, env = "OTCX_NETWORK")]
    pub network: Option<String>,

    /// GraphQL endpoint override (defaults to the selected network's endpoint)
    #[arg(long, env = "OTCX_GRAPHQL_URL")]
    pub graphql_url: Option<String>,

    /// Marketplace contract override (defaults to the selected network's contract)
    #[arg(long, env = "OTCX_CONTRACT")]
    pub contract: Option<String>,

    /// Offset into the open-listing set
    #[arg(long, env = "OTCX_PAGE_OFFSET")]
    pub page_offset: Option<u64>,

    /// Listings per page (1-500)
    #[arg(long, env = "OTCX_PAGE_SIZE")]
    pub page_size: Option<u64>,

    /// HTTP request timeout in milliseconds (1000-60000)
    #[arg(long, env = "OTCX_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Render synthetic offers instead of querying the indexer
    #[arg(long, env = "OTCX_MOCK")]
    pub mock: Option<bool>,

    /// Number of synthetic offers to generate in mock mode
    #[arg(long, env = "OTCX_MOCK_COUNT")]
    pub mock_count: Option<usize>,
}

/// Effective runtime configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub network: Network,
    pub graphql_url: String,
    pub otc_contract: String,
    pub page_offset: u64,
    pub page_size: u64,
    pub timeout_ms: u64,
    pub mock: bool,
    pub mock_count: usize,
}

/// Validate that a value is within a given range (inclusive)
fn validate_in_range<T>(val: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if val < min || val > max {
        Err(anyhow!("{name} must be in range [{min}, {max}], got {val}"))
    } else {
        Ok(val)
    }
}

/// Validate URL format (basic check)
fn validate_url(url: &str, name: &str) -> Result<()> {
    if url.is_empty() {
        return Err(anyhow!("{name} cannot be empty"));
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!("{name} must start with http:// or https://"))
    }
}

/// Load configuration from CLI args and environment variables
/// Priority: CLI args > Environment variables > Defaults
pub fn load() -> Result<Config> {
    let args = CliArgs::parse();
    from_args(args)
}

/// Resolve parsed args into a validated `Config` (split out for tests).
pub fn from_args(args: CliArgs) -> Result<Config> {
    let network = args
        .network
        .or_else(|| env::var("OTCX_NETWORK").ok())
        .map(|label| Network::from_label(&label))
        .unwrap_or(Network::FALLBACK);

    let net = network.config();

    let graphql_url = args
        .graphql_url
        .or_else(|| env::var("OTCX_GRAPHQL_URL").ok())
        .unwrap_or_else(|| net.graphql_url.to_string());
    validate_url(&graphql_url, "OTCX_GRAPHQL_URL")?;

    let otc_contract = args
        .contract
        .or_else(|| env::var("OTCX_CONTRACT").ok())
        .unwrap_or_else(|| net.otc_contract.to_string());
    crate::query::ensure_contract_ident(&otc_contract)?;

    let page_offset = args
        .page_offset
        .or_else(|| env::var("OTCX_PAGE_OFFSET").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(0);

    let page_size = args
        .page_size
        .or_else(|| env::var("OTCX_PAGE_SIZE").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let page_size = validate_in_range(page_size, 1, MAX_PAGE_SIZE, "OTCX_PAGE_SIZE")?;

    let timeout_ms = args
        .timeout_ms
        .or_else(|| env::var("OTCX_TIMEOUT_MS").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(DEFAULT_TIMEOUT_MS);
    let timeout_ms = validate_in_range(timeout_ms, 1000, 60000, "OTCX_TIMEOUT_MS")?;

    let mock = args
        .mock
        .or_else(|| {
            env::var("OTCX_MOCK")
                .ok()
                .map(|s| s.to_lowercase() == "true")
        })
        .unwrap_or(false);

    let mock_count = args
        .mock_count
        .or_else(|| env::var("OTCX_MOCK_COUNT").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(100);

    Ok(Config {
        network,
        graphql_url,
        otc_contract,
        page_offset,
        page_size,
        timeout_ms,
        mock,
        mock_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_network_resolves_fully_populated_config() {
        for network in Network::ALL {
            let net = network.config();
            assert!(!net.otc_contract.is_empty());
            assert!(net.fee_percent >= 0.0);
            assert!(net.node_url.starts_with("https://"));
            assert!(net.graphql_url.starts_with("https://"));
            assert!(net.websocket_url.starts_with("wss://"));
        }
    }

    #[test]
    fn network_labels_round_trip() {
        for network in Network::ALL {
            assert_eq!(Network::from_label(&network.to_string()), network);
        }
        assert_eq!("TESTNET".parse::<Network>().unwrap(), Network::Testnet);
    }

    #[test]
    fn unknown_label_falls_back_instead_of_erroring() {
        assert_eq!(Network::from_label("devnet"), Network::FALLBACK);
        assert_eq!(Network::from_label(""), Network::FALLBACK);
        assert!("devnet".parse::<Network>().is_err());
    }

    #[test]
    fn networks_point_at_distinct_contracts() {
        assert_ne!(
            Network::Testnet.config().otc_contract,
            Network::Mainnet.config().otc_contract
        );
    }

    #[test]
    fn range_validation_bounds() {
        assert!(validate_in_range(25u64, 1, 500, "PAGE_SIZE").is_ok());
        assert!(validate_in_range(0u64, 1, 500, "PAGE_SIZE").is_err());
        assert!(validate_in_range(501u64, 1, 500, "PAGE_SIZE").is_err());
    }

    #[test]
    fn url_validation_rejects_bad_schemes() {
        assert!(validate_url("https://node.xian.org/graphql", "URL").is_ok());
        assert!(validate_url("ftp://node.xian.org", "URL").is_err());
        assert!(validate_url("", "URL").is_err());
    }
}
