//! Offer fetching against the GraphQL indexing service.
//!
//! One POST per call, nothing retried: a failed fetch surfaces as an error
//! and the caller decides how to degrade. Normalization splits each
//! composite storage key on its first `:` to recover the listing id and
//! merges it with the stored value fields.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::OnceLock;
use std::time::Duration;

use crate::query;
use crate::types::Offer;

static HTTP: OnceLock<reqwest::Client> = OnceLock::new();

fn http_client() -> &'static reqwest::Client {
    HTTP.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client")
    })
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: StateData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateData {
    all_states: StateNodes,
}

#[derive(Debug, Deserialize)]
struct StateNodes {
    nodes: Vec<StateNode>,
}

#[derive(Debug, Deserialize)]
struct StateNode {
    key: String,
    value: Value,
}

/// POST a GraphQL document and return the parsed JSON body.
pub async fn post_graphql(url: &str, query: &str, timeout_ms: u64) -> Result<Value> {
    let res = http_client()
        .post(url)
        .json(&json!({ "query": query }))
        .timeout(Duration::from_millis(timeout_ms))
        .send()
        .await
        .with_context(|| format!("graphql request to {url} failed"))?;

    if !res.status().is_success() {
        return Err(anyhow!("graphql endpoint returned http {}", res.status()));
    }

    let body: Value = res
        .json()
        .await
        .context("graphql response was not valid JSON")?;

    if let Some(errors) = body.get("errors") {
        return Err(anyhow!("graphql query rejected: {errors}"));
    }
    Ok(body)
}

/// Recover the listing id from a composite storage key
/// (`con_otc_v3.otc_listing:abc123` -> `abc123`).
fn listing_id(key: &str) -> Option<&str> {
    key.split_once(':')
        .map(|(_, id)| id)
        .filter(|id| !id.is_empty())
}

/// Flatten the `allStates` envelope into offer records, preserving the
/// backend's response order. A node with no id suffix or an
/// undeserializable value is skipped with a warning rather than failing
/// the whole page.
pub fn parse_listing_nodes(body: &Value) -> Result<Vec<Offer>> {
    let envelope: Envelope = serde_json::from_value(body.clone())
        .context("unexpected envelope shape from indexing service")?;

    let nodes = envelope.data.all_states.nodes;
    let mut offers = Vec::with_capacity(nodes.len());
    for node in nodes {
        let Some(id) = listing_id(&node.key) else {
            log::warn!("[indexer] skipping state record with no listing id: {}", node.key);
            continue;
        };
        match serde_json::from_value::<Offer>(node.value) {
            Ok(mut offer) => {
                offer.id = id.to_string();
                offers.push(offer);
            }
            Err(e) => log::warn!("[indexer] skipping malformed listing {id}: {e}"),
        }
    }
    Ok(offers)
}

/// Fetch one page of open listings for `contract` from `graphql_url`.
pub async fn fetch_open_offers(
    graphql_url: &str,
    contract: &str,
    offset: u64,
    first: u64,
    timeout_ms: u64,
) -> Result<Vec<Offer>> {
    let query = query::open_listings_query(contract, offset, first)?;
    log::debug!("[indexer] fetching open listings offset={offset} first={first}");

    let body = post_graphql(graphql_url, &query, timeout_ms).await?;
    let offers = parse_listing_nodes(&body)?;
    log::info!(
        "[indexer] fetched {} open listings for {contract} from {graphql_url}",
        offers.len()
    );
    Ok(offers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_nodes_into_flat_offers() {
        let body = json!({
            "data": { "allStates": { "nodes": [
                {
                    "key": "con_otc_v3.otc_listing:abc123",
                    "value": {
                        "maker": "m1",
                        "offer_token": "con_x",
                        "offer_amount": 1,
                        "take_token": "con_y",
                        "take_amount": 2,
                        "fee": 0.5
                    }
                }
            ]}}
        });

        let offers = parse_listing_nodes(&body).unwrap();
        assert_eq!(offers.len(), 1);
        let offer = &offers[0];
        assert_eq!(offer.id, "abc123");
        assert_eq!(offer.maker, "m1");
        assert_eq!(offer.offer_token, "con_x");
        assert_eq!(offer.offer_amount, 1.0);
        assert_eq!(offer.take_token, "con_y");
        assert_eq!(offer.take_amount, 2.0);
        assert_eq!(offer.fee, 0.5);
    }

    #[test]
    fn id_is_suffix_after_first_colon() {
        assert_eq!(listing_id("con_otc.otc_listing:abc:def"), Some("abc:def"));
        assert_eq!(listing_id("con_otc.otc_listing:"), None);
        assert_eq!(listing_id("no_colon_here"), None);
    }

    #[test]
    fn preserves_backend_order_and_skips_bad_nodes() {
        let value = json!({
            "maker": "m1",
            "offer_token": "con_x",
            "offer_amount": 1,
            "take_token": "con_y",
            "take_amount": 2,
            "fee": 0.5
        });
        let body = json!({
            "data": { "allStates": { "nodes": [
                { "key": "c.otc_listing:first", "value": value },
                { "key": "c.otc_listing_without_id", "value": value },
                { "key": "c.otc_listing:broken", "value": { "maker": "m2" } },
                { "key": "c.otc_listing:second", "value": value }
            ]}}
        });

        let ids: Vec<String> = parse_listing_nodes(&body)
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn envelope_shape_mismatch_is_an_error() {
        let body = json!({ "data": { "somethingElse": [] } });
        assert!(parse_listing_nodes(&body).is_err());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn fetch_open_offers_live() {
        let net = crate::config::Network::Mainnet.config();
        let offers = fetch_open_offers(net.graphql_url, net.otc_contract, 0, 5, 8000)
            .await
            .unwrap();
        for offer in offers {
            println!("{}: {} {} -> {} {}", offer.id, offer.offer_amount, offer.offer_token, offer.take_amount, offer.take_token);
        }
    }
}
