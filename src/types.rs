use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single OTC listing, flattened from the indexer's key/value state record.
///
/// The `id` is recovered from the composite storage key by the fetcher; every
/// other field comes from the stored listing value. Records are a read-only
/// snapshot of chain state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub id: String,
    pub maker: String,
    pub offer_token: String,
    #[serde(deserialize_with = "de_decimal")]
    pub offer_amount: f64,
    pub take_token: String,
    #[serde(deserialize_with = "de_decimal")]
    pub take_amount: f64,
    #[serde(deserialize_with = "de_decimal")]
    pub fee: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_listed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Address/lock state payload from the wallet bridge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub chain_id: Option<String>,
}

/// Raw transaction outcome passed back by the wallet bridge. Anything beyond
/// the `errors` field is kept opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxResult {
    #[serde(default)]
    pub errors: Option<Value>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

/// Failure payload from the wallet bridge: a structured error, or whatever
/// arbitrary value the extension rejected with.
#[derive(Debug)]
pub enum BridgeFailure {
    Error(anyhow::Error),
    Payload(Value),
}

impl BridgeFailure {
    /// Best-effort message extraction: the error's own message when the
    /// failure is structured, a stringified form otherwise.
    pub fn message(&self) -> String {
        match self {
            BridgeFailure::Error(e) => e.to_string(),
            BridgeFailure::Payload(v) => v.to_string(),
        }
    }
}

impl From<anyhow::Error> for BridgeFailure {
    fn from(e: anyhow::Error) -> Self {
        BridgeFailure::Error(e)
    }
}

impl std::fmt::Display for BridgeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Indexers are inconsistent about decimal encoding: plain numbers, numeric
/// strings, and `{"__fixed__": "<digits>"}` wrappers all appear in state
/// values. Accept all three.
fn de_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Fixed {
            #[serde(rename = "__fixed__")]
            fixed: String,
        },
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) | Raw::Fixed { fixed: s } => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid decimal '{s}': {e}"))),
    }
}
