//! Seam to the external wallet capability.
//!
//! The signer lives outside this process (a browser-resident extension or a
//! local agent); this module owns only the request payloads handed to it
//! and the transport trait the rest of the crate talks through.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use crate::types::{TxResult, WalletInfo};

/// A contract-call request handed to the wallet capability for signing and
/// submission. `kwargs` mirror the marketplace contract's exported methods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TxRequest {
    pub contract: String,
    pub method: String,
    pub kwargs: Value,
}

impl TxRequest {
    /// List a new offer: swap `offer_amount` of `offer_token` for
    /// `take_amount` of `take_token`.
    pub fn list_offer(
        contract: &str,
        offer_token: &str,
        offer_amount: f64,
        take_token: &str,
        take_amount: f64,
    ) -> Self {
        Self {
            contract: contract.to_string(),
            method: "list_offer".to_string(),
            kwargs: json!({
                "offer_token": offer_token,
                "offer_amount": offer_amount,
                "take_token": take_token,
                "take_amount": take_amount,
            }),
        }
    }

    /// Take an open offer by its listing id.
    pub fn take_offer(contract: &str, listing_id: &str) -> Self {
        Self {
            contract: contract.to_string(),
            method: "take_offer".to_string(),
            kwargs: json!({ "listing_id": listing_id }),
        }
    }

    /// Cancel an open offer; only its maker can.
    pub fn cancel_offer(contract: &str, listing_id: &str) -> Self {
        Self {
            contract: contract.to_string(),
            method: "cancel_offer".to_string(),
            kwargs: json!({ "listing_id": listing_id }),
        }
    }

    /// Token approval that precedes listing or taking. `amount` must cover
    /// the transfer plus the marketplace fee.
    pub fn approve(token_contract: &str, spender: &str, amount: f64) -> Self {
        Self {
            contract: token_contract.to_string(),
            method: "approve".to_string(),
            kwargs: json!({ "amount": amount, "to": spender }),
        }
    }
}

/// Transport to the wallet signer. Implementations are external; tests use
/// a scripted stub.
#[async_trait]
pub trait WalletBridge {
    /// Ask the signer for address/lock state. `Ok(None)` means it answered
    /// with an empty payload.
    async fn request_info(&self) -> Result<Option<WalletInfo>>;

    /// Submit a contract-call request and return the raw outcome, if any.
    async fn send_transaction(&self, request: &TxRequest) -> Result<Option<TxResult>>;
}
