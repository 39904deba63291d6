// src/analysis/triggers.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

// --- Regex Patterns (Lazy Static) ---
// "balance", optional colon/whitespace, optional "$", then a run of digits and commas.
// A comma-only run counts too ("High Balance, Credit Limit").
// find_iter gives the non-overlapping, left-to-right scan the balance rule counts.
static BALANCE_ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)balance[:\s]*\$?([\d,]+)").expect("Failed to compile BALANCE_ENTRY_RE")
});

// --- Data Structures ---

/// A detected reporting condition. The catalog is closed; messages never
/// carry document content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Finding {
    ChargeOff,
    LateAfterChargeOff,
    MissingFirstDelinquency,
    MultipleBalances,
    NotMarkedDisputed,
}

impl Finding {
    pub fn message(&self) -> &'static str {
        match self {
            Finding::ChargeOff => {
                "Charge-off account detected. Verify balance accuracy and post-charge-off reporting."
            }
            Finding::LateAfterChargeOff => {
                "Late payments reported after charge-off (possible structural reporting inconsistency)."
            }
            Finding::MissingFirstDelinquency => {
                "Missing Date of First Delinquency (possible reporting violation)."
            }
            Finding::MultipleBalances => {
                "Multiple balance entries detected. Cross-check for inconsistencies."
            }
            Finding::NotMarkedDisputed => "Account may not be properly marked as disputed.",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Document text prepared once for every rule.
struct ScanText<'a> {
    original: &'a str,
    lowered: String,
}

impl<'a> ScanText<'a> {
    fn new(original: &'a str) -> Self {
        Self { original, lowered: original.to_lowercase() }
    }

    fn contains(&self, needle: &str) -> bool {
        self.lowered.contains(needle)
    }
}

type Rule = (fn(&ScanText) -> bool, Finding);

// Evaluated in order; every matching rule fires.
const RULES: &[Rule] = &[
    (has_charge_off, Finding::ChargeOff),
    (has_late_after_charge_off, Finding::LateAfterChargeOff),
    (lacks_first_delinquency, Finding::MissingFirstDelinquency),
    (has_multiple_balances, Finding::MultipleBalances),
    (lacks_consumer_dispute, Finding::NotMarkedDisputed),
];

fn has_charge_off(text: &ScanText) -> bool {
    text.contains("charge off")
}

fn has_late_after_charge_off(text: &ScanText) -> bool {
    text.contains("120 days late") && text.contains("charge off")
}

fn lacks_first_delinquency(text: &ScanText) -> bool {
    !text.contains("date of first delinquency")
}

fn has_multiple_balances(text: &ScanText) -> bool {
    BALANCE_ENTRY_RE.find_iter(text.original).nth(1).is_some()
}

fn lacks_consumer_dispute(text: &ScanText) -> bool {
    !text.contains("consumer disputes")
}

// --- Public API ---

/// Runs every trigger rule against the document text and returns the
/// findings of those that matched, in rule order. Never fails.
pub fn analyze(text: &str) -> Vec<Finding> {
    let scan = ScanText::new(text);
    let findings: Vec<Finding> = RULES
        .iter()
        .filter(|(check, _)| check(&scan))
        .map(|(_, finding)| *finding)
        .collect();

    tracing::debug!("Trigger scan over {} bytes produced {} findings", text.len(), findings.len());
    findings
}

/// Numeric tokens collected by the balance rule, in document order.
pub fn balance_entries(text: &str) -> Vec<String> {
    BALANCE_ENTRY_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
