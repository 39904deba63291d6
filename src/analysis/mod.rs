// src/analysis/mod.rs
pub mod triggers;

use serde::Serialize;
pub use triggers::{analyze, balance_entries, Finding};

/// Shown when the trigger scan comes back empty.
pub const NO_ISSUES_MESSAGE: &str = "No obvious structural issues detected.";

/// One finding as written to the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportedFinding {
    pub code: Finding,
    pub message: &'static str,
}

/// Summary of one analysis run, saved alongside the letter.
#[derive(Debug, Clone, Serialize)]
pub struct FindingsReport {
    pub source_name: String,
    pub page_count: usize,
    pub text_length: usize,
    pub findings: Vec<ReportedFinding>,
    pub balance_entries: Vec<String>,
    pub generated_at: String,
}

impl FindingsReport {
    pub fn new(source_name: &str, page_count: usize, text: &str, findings: &[Finding]) -> Self {
        Self {
            source_name: source_name.to_string(),
            page_count,
            text_length: text.len(),
            findings: findings
                .iter()
                .map(|f| ReportedFinding { code: *f, message: f.message() })
                .collect(),
            balance_entries: balance_entries(text),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.findings.iter().map(|f| f.message).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_keeps_finding_order_and_balances() {
        let text = "Balance: $100\nBalance: $200\n";
        let findings = analyze(text);
        let report = FindingsReport::new("report.txt", 1, text, &findings);

        assert_eq!(report.source_name, "report.txt");
        assert_eq!(report.text_length, text.len());
        assert_eq!(report.balance_entries, vec!["100", "200"]);
        assert_eq!(
            report.messages(),
            vec![
                Finding::MissingFirstDelinquency.message(),
                Finding::MultipleBalances.message(),
                Finding::NotMarkedDisputed.message(),
            ]
        );
    }

    #[test]
    fn test_report_serializes_codes_and_messages() {
        let report = FindingsReport::new("r.pdf", 2, "", &analyze(""));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["page_count"], 2);
        assert_eq!(json["findings"][0]["code"], "missing_first_delinquency");
        assert_eq!(json["findings"][1]["message"], "Account may not be properly marked as disputed.");
        assert!(json["balance_entries"].as_array().unwrap().is_empty());
    }
}
