//! Small text-formatting helpers for listing display.

/// Shorten an address for display: first 4 characters + "..." + last 3.
/// Anything short enough to show whole is returned untouched.
pub fn short_address(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() <= 7 {
        return addr.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    format!("{head}...{tail}")
}

/// Format a decimal amount with up to six fractional digits, trimming
/// trailing zeros (`12.500000` -> `12.5`, `3.000000` -> `3`).
pub fn format_amount(amount: f64) -> String {
    let s = format!("{amount:.6}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
