//! Otcx - OTC Marketplace Terminal Frontend
//!
//! This library is the glue between three external collaborators: a GraphQL
//! chain-indexing service (data provider), a wallet signer (capability
//! provider, behind the [`bridge::WalletBridge`] seam), and a presentation
//! layer (the bundled binary renders plain text).
//!
//! ## Pipeline
//!
//! [`config`] resolves the selected network to endpoints and the
//! marketplace contract; [`query`] builds the filtered, paginated
//! open-listing document; [`indexer`] issues it and normalizes the
//! key/value state records into flat [`types::Offer`]s; [`wallet`] reduces
//! wallet-bridge payloads into shared state and toast notifications held by
//! [`app::App`]. [`mock`] generates synthetic offers for development
//! without a live backend.

pub mod app;
pub mod bridge;
pub mod config;
pub mod constants;
pub mod indexer;
pub mod mock;
pub mod query;
pub mod types;
pub mod util_text;
pub mod wallet;

// Re-export commonly used types
pub use app::App;
pub use bridge::{TxRequest, WalletBridge};
pub use config::{Config, Network, NetworkConfig};
pub use types::{BridgeFailure, Offer, TxResult, WalletInfo};
pub use wallet::{AddressDisplay, Toast, ToastKind, WalletState};
