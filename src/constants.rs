//! Application constants
//!
//! Centralized constants for fetch defaults, toast timing, mock generation,
//! and user-facing message strings.

/// Application state and behavior constants
pub mod app {
    /// Duration to show toast notifications (seconds)
    pub const TOAST_DURATION_SECS: u64 = 5;

    /// Maximum number of queued toasts retained at once
    pub const MAX_TOASTS: usize = 8;
}

/// Listing-fetch constants
pub mod fetch {
    /// Default number of listings per page
    pub const DEFAULT_PAGE_SIZE: u64 = 25;

    /// Upper bound on the page size knob
    pub const MAX_PAGE_SIZE: u64 = 500;

    /// Default HTTP request timeout in milliseconds
    pub const DEFAULT_TIMEOUT_MS: u64 = 8000;

    /// Storage-key namespace the marketplace contract writes listings under.
    /// Composite keys look like `<contract>.otc_listing:<listing id>`.
    pub const LISTING_NAMESPACE: &str = "otc_listing";

    /// Listing status the open-offers query filters on
    pub const OPEN_STATUS: &str = "OPEN";
}

/// Mock offer generation constants
pub mod mock {
    /// Length of generated hex identifiers and maker addresses
    pub const ID_HEX_LEN: usize = 64;

    /// Fee percentage stamped on every synthetic offer
    pub const FIXED_FEE_PERCENT: f64 = 0.5;

    /// Bounded re-draw attempts used to keep a record's offer and take
    /// tokens distinct
    pub const REDRAW_ATTEMPTS: usize = 4;
}

/// User-facing message strings
pub mod messages {
    /// Toast when the wallet bridge answers an info request with nothing
    pub const WALLET_INFO_MISSING: &str = "Could not retrieve wallet information.";

    /// Toast when the wallet reports itself locked
    pub const WALLET_LOCKED: &str = "Please unlock your wallet to interact with this dapp.";

    /// Toast when any wallet-bridge interaction fails outright
    pub const WALLET_ERROR: &str = "Ensure the wallet extension is installed and unlocked";

    /// Toast when a transaction submission returns no response at all
    pub const TX_UNCONFIRMED: &str = "Transaction failed: could not confirm status.";

    /// Prefix for a transaction rejected by the network
    pub const TX_FAILED_PREFIX: &str = "Transaction failed: ";

    /// Toast for a transaction accepted without an error payload
    pub const TX_SUBMITTED: &str = "Transaction submitted successfully";

    /// Prefix for an error thrown before any response was received
    pub const TX_ERROR_PREFIX: &str = "Transaction error: ";
}
