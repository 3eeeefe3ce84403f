//! Policy identifier extraction.
//!
//! Output artifacts are named after the policy they evaluate. The policy
//! identifier is embedded in input paths as a segment like `LCD_39543` or
//! `NCD_230_4`; this module pulls out the first such match.

use regex::Regex;
use std::sync::OnceLock;

static POLICY_ID_RE: OnceLock<Regex> = OnceLock::new();

fn policy_id_re() -> &'static Regex {
    // Matches LCD_39543, NCD_230_4, etc. Case-sensitive.
    POLICY_ID_RE.get_or_init(|| Regex::new(r"(?:LCD|NCD)_\w+").unwrap())
}

/// Extract the first policy identifier from a path-like string.
///
/// Returns `None` when the string contains no `LCD_`/`NCD_` segment. Never
/// panics, including on the empty string.
///
/// # Example
///
/// `/path/to/Run_Time_Policy/LCD_39543/Policy_LCD_39543.txt` → `LCD_39543`
pub fn extract_policy_id(path: &str) -> Option<&str> {
    policy_id_re().find(path).map(|m| m.as_str())
}
