//! Shared UI state.
//!
//! One `App` per session, mutated only through its methods: the network
//! selector, offer snapshot, wallet state, and toast queue each have a
//! single update entry point.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::config::{Config, Network};
use crate::constants::app::{MAX_TOASTS, TOAST_DURATION_SECS};
use crate::types::{BridgeFailure, Offer, TxResult, WalletInfo};
use crate::wallet::{self, Toast, WalletState};

pub struct App {
    network: Network,
    otc_contract: String,
    graphql_url: String,
    fee_percent: f64,

    page_offset: u64,
    page_size: u64,

    offers: Vec<Offer>,
    refreshed_at: Option<DateTime<Utc>>,

    wallet: WalletState,
    toasts: VecDeque<(Toast, Instant)>,
}

impl App {
    pub fn new(cfg: &Config) -> Self {
        let net = cfg.network.config();
        Self {
            network: cfg.network,
            // Config-level overrides win over the network table at startup
            otc_contract: cfg.otc_contract.clone(),
            graphql_url: cfg.graphql_url.clone(),
            fee_percent: net.fee_percent,
            page_offset: cfg.page_offset,
            page_size: cfg.page_size,
            offers: Vec::new(),
            refreshed_at: None,
            wallet: WalletState::default(),
            toasts: VecDeque::new(),
        }
    }

    // ----- network selection -----

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn otc_contract(&self) -> &str {
        &self.otc_contract
    }

    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    pub fn fee_percent(&self) -> f64 {
        self.fee_percent
    }

    /// Switch networks. All dependent endpoints are re-resolved from the
    /// network table in one step (overrides do not carry across networks),
    /// and the offer snapshot is dropped so stale records from the previous
    /// network never render.
    pub fn set_network(&mut self, network: Network) {
        if network == self.network {
            return;
        }
        let net = network.config();
        log::info!("[app] switching network to {network} (contract {})", net.otc_contract);
        self.network = network;
        self.otc_contract = net.otc_contract.to_string();
        self.graphql_url = net.graphql_url.to_string();
        self.fee_percent = net.fee_percent;
        self.page_offset = 0;
        self.clear_offers();
    }

    // ----- offer snapshot -----

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Replace the offer snapshot, stamping the refresh time.
    pub fn set_offers(&mut self, offers: Vec<Offer>) {
        self.offers = offers;
        self.refreshed_at = Some(Utc::now());
    }

    pub fn clear_offers(&mut self) {
        self.offers.clear();
        self.refreshed_at = None;
    }

    // ----- pagination -----

    pub fn page_offset(&self) -> u64 {
        self.page_offset
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn next_page(&mut self) {
        self.page_offset += self.page_size;
    }

    pub fn prev_page(&mut self) {
        self.page_offset = self.page_offset.saturating_sub(self.page_size);
    }

    // ----- toasts -----

    /// Queue a toast notification.
    pub fn show_toast(&mut self, toast: Toast) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back((toast, Instant::now()));
    }

    /// Toasts still inside their display window, oldest first.
    pub fn active_toasts(&self) -> impl Iterator<Item = &Toast> {
        const WINDOW: Duration = Duration::from_secs(TOAST_DURATION_SECS);
        self.toasts
            .iter()
            .filter(|(_, shown)| shown.elapsed() < WINDOW)
            .map(|(toast, _)| toast)
    }

    // ----- wallet events -----

    pub fn wallet(&self) -> &WalletState {
        &self.wallet
    }

    pub fn on_wallet_info(&mut self, info: Option<WalletInfo>) {
        if let Some(toast) = wallet::handle_wallet_info(&mut self.wallet, info) {
            self.show_toast(toast);
        }
    }

    pub fn on_transaction_result(&mut self, response: Option<TxResult>) {
        if let Some(toast) = wallet::handle_transaction_result(&mut self.wallet, response) {
            self.show_toast(toast);
        }
    }

    pub fn on_wallet_error(&mut self, error: &BridgeFailure) {
        if let Some(toast) = wallet::handle_wallet_error(&mut self.wallet, error) {
            self.show_toast(toast);
        }
    }

    pub fn on_transaction_error(&mut self, error: &BridgeFailure) {
        if let Some(toast) = wallet::handle_transaction_error(&mut self.wallet, error) {
            self.show_toast(toast);
        }
    }
}
