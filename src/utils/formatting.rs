//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

/// Render an amount with the configured currency symbol, e.g. `₹15000`.
pub fn money(amount: &Decimal, symbol: &str) -> String {
    format!("{symbol}{}", amount.normalize())
}

pub fn percent(rate: u32) -> String {
    format!("{rate}%")
}

pub fn stats_line(total: usize, present: usize, lwp: usize) -> String {
    format!("Total: {total} | Present: {present} | LWP: {lwp}")
}

/// Remove ANSI color sequences (used before measuring or truncating text).
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}
