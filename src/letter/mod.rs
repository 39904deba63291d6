// src/letter/mod.rs
use crate::utils::error::LetterError;
use chrono::NaiveDate;

/// File name the letter is offered under.
pub const LETTER_FILE_NAME: &str = "dispute_letter.txt";
pub const LETTER_CONTENT_TYPE: &str = "text/plain";

const DATE_FORMAT: &str = "%B %d, %Y";

const LETTER_CLOSING: &str = "

Please conduct a reasonable reinvestigation and correct or delete any information that cannot be properly verified.

Additionally, please provide the method of verification used in your investigation.

Please complete this investigation within the required timeframe.

Sincerely,

";

/// A rendered letter ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

/// Fills the dispute template. One bullet per finding, in the order given.
/// Callers are expected to have validated `name` and `address`.
pub fn render<S: AsRef<str>>(name: &str, address: &str, findings: &[S], date: NaiveDate) -> String {
    let mut letter = format!(
        "{date}\n\n{name}\n{address}\n\nRE: Formal Dispute Request\n\nTo Whom It May Concern,\n\n\
         This letter serves as a formal dispute regarding inaccurate information appearing on my credit report.\n\n\
         After review, I have identified the following concerns:\n\n",
        date = date.format(DATE_FORMAT),
    );

    for finding in findings {
        letter.push_str("- ");
        letter.push_str(finding.as_ref());
        letter.push('\n');
    }

    letter.push_str(LETTER_CLOSING);
    letter.push_str(name);
    letter
}

/// Validates the sender details, then renders the letter.
/// A blank name or address refuses the request; no letter is produced.
pub fn generate_letter<S: AsRef<str>>(
    name: &str,
    address: &str,
    findings: &[S],
    date: NaiveDate,
) -> Result<Letter, LetterError> {
    if name.trim().is_empty() || address.trim().is_empty() {
        tracing::warn!("Letter refused: name or address missing");
        return Err(LetterError::MissingContact);
    }

    let body = render(name, address, findings, date);
    tracing::info!("Rendered dispute letter with {} findings ({} bytes)", findings.len(), body.len());

    Ok(Letter {
        file_name: LETTER_FILE_NAME,
        content_type: LETTER_CONTENT_TYPE,
        body,
    })
}
