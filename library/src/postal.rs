//! Postal code validation.
//!
//! A code is valid when it is an integer in `100000..=999999` written with
//! exactly six digits, and it has fewer than two alternating repetitive digit
//! pairs: positions `p` with `code[p] == code[p + 2]`. Overlapping pairs each
//! count, so `121314` has two and `110000` has two.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

// `\d` would also accept non-ASCII digits
static IN_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}$").unwrap());

pub fn is_in_range(code: &str) -> bool {
    IN_RANGE_RE.is_match(code)
}

pub fn alternating_pairs(code: &str) -> usize {
    code.as_bytes()
        .windows(3)
        .filter(|w| w[0].is_ascii_digit() && w[1].is_ascii_digit() && w[0] == w[2])
        .count()
}

pub fn is_valid(code: &str) -> bool {
    let in_range = is_in_range(code);
    let pairs = alternating_pairs(code);
    debug!(code, in_range, pairs, "checked postal code");
    in_range && pairs < 2
}
