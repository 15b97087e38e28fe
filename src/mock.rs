//! Synthetic offer records for development without a live indexer.

use rand::Rng;

use crate::constants::mock::{FIXED_FEE_PERCENT, ID_HEX_LEN, REDRAW_ATTEMPTS};
use crate::types::Offer;

const TOKEN_PREFIXES: &[&str] = &[
    "btc", "eth", "lamden", "usdt", "usdc", "dai", "link", "matic",
];
const TOKEN_SUFFIXES: &[&str] = &["token", "coin", "stable", "wrapped", "yield"];

fn random_hex(rng: &mut impl Rng, len: usize) -> String {
    const HEX: &[u8] = b"0123456789abcdef";
    (0..len).map(|_| HEX[rng.gen_range(0..HEX.len())] as char).collect()
}

fn random_token_name(rng: &mut impl Rng) -> String {
    let prefix = TOKEN_PREFIXES[rng.gen_range(0..TOKEN_PREFIXES.len())];
    let suffix = TOKEN_SUFFIXES[rng.gen_range(0..TOKEN_SUFFIXES.len())];
    format!("con_{prefix}_{suffix}")
}

/// Draw a take token distinct from `offer_token`, re-drawing at most
/// `REDRAW_ATTEMPTS` times. With a 40-name vocabulary a collision surviving
/// every re-draw is possible but vanishingly rare; the bound keeps the loop
/// deterministic.
fn distinct_token(rng: &mut impl Rng, offer_token: &str) -> String {
    let mut candidate = random_token_name(rng);
    for _ in 0..REDRAW_ATTEMPTS {
        if candidate != offer_token {
            break;
        }
        candidate = random_token_name(rng);
    }
    candidate
}

/// Amounts in the listing UI's typical range, rounded to either 2 or 6
/// decimal places.
fn random_amount(rng: &mut impl Rng, base: f64, spread: f64) -> f64 {
    let raw = rng.gen::<f64>() * spread + base;
    let decimals: i32 = if rng.gen_bool(0.5) { 2 } else { 6 };
    let scale = 10f64.powi(decimals);
    (raw * scale).round() / scale
}

/// Produce `count` synthetic open offers with random hex identifiers and
/// maker addresses, vocabulary token names, and a fixed fee.
pub fn generate_mock_offers(count: usize) -> Vec<Offer> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let offer_token = random_token_name(&mut rng);
            let take_token = distinct_token(&mut rng, &offer_token);
            Offer {
                id: random_hex(&mut rng, ID_HEX_LEN),
                maker: random_hex(&mut rng, ID_HEX_LEN),
                offer_token,
                offer_amount: random_amount(&mut rng, 1.0, 1000.0),
                take_token,
                take_amount: random_amount(&mut rng, 10.0, 5000.0),
                fee: FIXED_FEE_PERCENT,
                taker: None,
                date_listed: None,
                status: None,
            }
        })
        .collect()
}
