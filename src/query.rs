//! GraphQL document construction for the indexing service.
//!
//! Pure string building: no I/O, no state. The only validation is the
//! contract-identifier guard, which keeps config-sourced values from
//! breaking out of the quoted key filter.

use anyhow::{anyhow, Result};

use crate::constants::fetch::{LISTING_NAMESPACE, OPEN_STATUS};

/// Reject contract identifiers that could inject control characters into
/// the quoted filter string. Contract names are `[A-Za-z0-9_]` on chain.
pub fn ensure_contract_ident(contract: &str) -> Result<()> {
    if contract.is_empty() {
        return Err(anyhow!("contract identifier cannot be empty"));
    }
    if !contract
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(anyhow!(
            "contract identifier '{contract}' contains characters outside [A-Za-z0-9_]"
        ));
    }
    Ok(())
}

/// Build the open-listing query: state records whose storage key starts
/// with `<contract>.otc_listing` and whose value contains `status: "OPEN"`,
/// returning at most `first` records starting at `offset`.
pub fn open_listings_query(contract: &str, offset: u64, first: u64) -> Result<String> {
    ensure_contract_ident(contract)?;
    if first == 0 {
        return Err(anyhow!("page size must be positive"));
    }

    Ok(format!(
        r#"query OpenListings {{
  allStates(
    filter: {{
      key: {{ startsWith: "{contract}.{LISTING_NAMESPACE}" }}
      value: {{ contains: {{ status: "{OPEN_STATUS}" }} }}
    }}
    offset: {offset}
    first: {first}
  ) {{
    nodes {{
      key
      value
    }}
  }}
}}"#
    ))
}
