//! Wallet bridge response reducers.
//!
//! Each handler is an idempotent reducer over an opaque bridge payload.
//! Effects are limited to `WalletState` plus at most one returned `Toast`;
//! the caller routes toasts into the UI queue. Handlers never error: a bad
//! payload reduces to an error state and a danger toast.

use serde_json::Value;

use crate::constants::messages;
use crate::types::{BridgeFailure, TxResult, WalletInfo};
use crate::util_text::short_address;

/// What the address slot of the UI should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressDisplay {
    /// Initial sentinel, before the bridge has answered anything
    Connecting,
    /// Shortened display form of the wallet address
    Connected(String),
    /// Bridge answered unlocked but without an address
    ConnectedNoAddress,
    Locked,
    Error,
}

impl std::fmt::Display for AddressDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressDisplay::Connecting => write!(f, "Connecting..."),
            AddressDisplay::Connected(short) => write!(f, "{short}"),
            AddressDisplay::ConnectedNoAddress => write!(f, "Connected"),
            AddressDisplay::Locked => write!(f, "Wallet is Locked"),
            AddressDisplay::Error => write!(f, "Wallet Error"),
        }
    }
}

/// Session-lifetime wallet state, mutated only by the handlers below.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletState {
    pub address: AddressDisplay,
    pub locked: bool,
    pub last_tx: Option<TxResult>,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            address: AddressDisplay::Connecting,
            locked: false,
            last_tx: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Danger,
}

/// A single notification for the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Warning, message: message.into() }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Danger, message: message.into() }
    }
}

/// Reduce a wallet-info payload (or its absence) into address/lock state.
pub fn handle_wallet_info(state: &mut WalletState, info: Option<WalletInfo>) -> Option<Toast> {
    let Some(info) = info else {
        log::error!("[wallet] info request returned no payload");
        state.address = AddressDisplay::Error;
        return Some(Toast::danger(messages::WALLET_INFO_MISSING));
    };

    if info.locked {
        state.locked = true;
        state.address = AddressDisplay::Locked;
        return Some(Toast::warning(messages::WALLET_LOCKED));
    }

    state.locked = false;
    match info.address.as_deref().filter(|a| !a.is_empty()) {
        Some(addr) => {
            state.address = AddressDisplay::Connected(short_address(addr));
            None
        }
        None => {
            log::warn!("[wallet] bridge reports an unlocked wallet but no address");
            state.address = AddressDisplay::ConnectedNoAddress;
            None
        }
    }
}

/// Reduce a transaction outcome (or its absence) into a notification.
///
/// A response without an `errors` field is acknowledged as *submitted*;
/// confirmation polling is out of scope, so nothing stronger is claimed.
pub fn handle_transaction_result(
    state: &mut WalletState,
    response: Option<TxResult>,
) -> Option<Toast> {
    let Some(response) = response else {
        log::error!("[wallet] transaction status check failed: no response received");
        return Some(Toast::danger(messages::TX_UNCONFIRMED));
    };

    let toast = match &response.errors {
        Some(errors) => {
            let msg = match errors {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            log::error!("[wallet] transaction failed: {msg}");
            Toast::danger(format!("{}{msg}", messages::TX_FAILED_PREFIX))
        }
        None => {
            log::info!("[wallet] transaction submitted");
            Toast::success(messages::TX_SUBMITTED)
        }
    };
    state.last_tx = Some(response);
    Some(toast)
}

/// Reduce a failed bridge interaction (info request, connection) into an
/// error state.
pub fn handle_wallet_error(state: &mut WalletState, error: &BridgeFailure) -> Option<Toast> {
    log::error!("[wallet] bridge interaction error: {}", error.message());
    state.address = AddressDisplay::Error;
    Some(Toast::danger(format!(
        "{} ({})",
        messages::WALLET_ERROR,
        error.message()
    )))
}

/// Reduce an error thrown before any transaction response was received.
pub fn handle_transaction_error(state: &mut WalletState, error: &BridgeFailure) -> Option<Toast> {
    log::error!("[wallet] transaction submission error: {}", error.message());
    state.last_tx = None;
    Some(Toast::danger(format!(
        "{}{}",
        messages::TX_ERROR_PREFIX,
        error.message()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_display_forms() {
        assert_eq!(AddressDisplay::Connecting.to_string(), "Connecting...");
        assert_eq!(
            AddressDisplay::Connected("dead...eef".into()).to_string(),
            "dead...eef"
        );
        assert_eq!(AddressDisplay::Locked.to_string(), "Wallet is Locked");
        assert_eq!(AddressDisplay::Error.to_string(), "Wallet Error");
    }

    #[test]
    fn missing_info_is_an_error_state() {
        let mut state = WalletState::default();
        let toast = handle_wallet_info(&mut state, None).unwrap();
        assert_eq!(state.address, AddressDisplay::Error);
        assert_eq!(toast.kind, ToastKind::Danger);
        assert_eq!(toast.message, messages::WALLET_INFO_MISSING);
    }

    #[test]
    fn locked_wallet_warns() {
        let mut state = WalletState::default();
        let info = WalletInfo { locked: true, address: Some("abc".into()), ..Default::default() };
        let toast = handle_wallet_info(&mut state, Some(info)).unwrap();
        assert!(state.locked);
        assert_eq!(state.address, AddressDisplay::Locked);
        assert_eq!(toast.kind, ToastKind::Warning);
    }

    #[test]
    fn unlocked_address_is_shortened() {
        let mut state = WalletState::default();
        let info = WalletInfo { locked: false, address: Some("A".repeat(64)), ..Default::default() };
        assert!(handle_wallet_info(&mut state, Some(info)).is_none());
        assert_eq!(state.address, AddressDisplay::Connected("AAAA...AAA".into()));
        assert!(!state.locked);
    }

    #[test]
    fn unlocked_without_address_stays_quiet() {
        let mut state = WalletState::default();
        let info = WalletInfo { locked: false, address: None, ..Default::default() };
        assert!(handle_wallet_info(&mut state, Some(info)).is_none());
        assert_eq!(state.address, AddressDisplay::ConnectedNoAddress);
    }

    #[test]
    fn handlers_are_idempotent() {
        let mut state = WalletState::default();
        let info = WalletInfo { locked: true, ..Default::default() };
        handle_wallet_info(&mut state, Some(info.clone()));
        let snapshot = state.clone();
        handle_wallet_info(&mut state, Some(info));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn missing_tx_response_reports_unconfirmed() {
        let mut state = WalletState::default();
        let toast = handle_transaction_result(&mut state, None).unwrap();
        assert_eq!(toast.kind, ToastKind::Danger);
        assert_eq!(toast.message, messages::TX_UNCONFIRMED);
        assert!(state.last_tx.is_none());
    }

    #[test]
    fn tx_errors_surface_in_danger_toast() {
        let mut state = WalletState::default();
        let response: TxResult = serde_json::from_value(json!({"errors": "bad sig"})).unwrap();
        let toast = handle_transaction_result(&mut state, Some(response)).unwrap();
        assert_eq!(toast.kind, ToastKind::Danger);
        assert!(toast.message.contains("bad sig"));
    }

    #[test]
    fn structured_tx_errors_are_stringified() {
        let mut state = WalletState::default();
        let response: TxResult =
            serde_json::from_value(json!({"errors": ["assert failed", "line 3"]})).unwrap();
        let toast = handle_transaction_result(&mut state, Some(response)).unwrap();
        assert!(toast.message.contains("assert failed"));
    }

    #[test]
    fn errorless_response_is_success() {
        let mut state = WalletState::default();
        let response: TxResult = serde_json::from_value(json!({})).unwrap();
        let toast = handle_transaction_result(&mut state, Some(response)).unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, messages::TX_SUBMITTED);
        assert!(state.last_tx.is_some());
    }

    #[test]
    fn wallet_error_carries_message() {
        let mut state = WalletState::default();
        let failure = BridgeFailure::Error(anyhow::anyhow!("extension unreachable"));
        let toast = handle_wallet_error(&mut state, &failure).unwrap();
        assert_eq!(state.address, AddressDisplay::Error);
        assert_eq!(toast.kind, ToastKind::Danger);
        assert!(toast.message.contains("extension unreachable"));
    }

    #[test]
    fn transaction_error_stringifies_opaque_payloads() {
        let mut state = WalletState::default();
        let failure = BridgeFailure::Payload(json!({"reason": "rejected"}));
        let toast = handle_transaction_error(&mut state, &failure).unwrap();
        assert!(toast.message.starts_with(messages::TX_ERROR_PREFIX));
        assert!(toast.message.contains("rejected"));
    }
}
