//! Client-side checks and preview for a training CSV before upload.
//!
//! The backend trains a text classifier on `Description` → `Policy_Type` and
//! an anomaly detector on `Amount` + `Customer_Tenure`. Reading the header
//! locally lets the dashboard warn about a file that will fail or train
//! without fraud detection before any bytes are sent.

#[cfg(test)]
#[path = "training_test.rs"]
mod training_test;

/// Data rows shown in the preview table.
pub const PREVIEW_ROWS: usize = 5;
/// Columns the backend cannot train without.
pub const REQUIRED_COLUMNS: [&str; 2] = ["Description", "Policy_Type"];
/// Columns that enable anomaly-based fraud detection.
pub const FRAUD_COLUMNS: [&str; 2] = ["Amount", "Customer_Tenure"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainingFileError {
    #[error("File must be a CSV")]
    NotCsv,
    #[error("training file has no header row")]
    Empty,
}

/// Reject files the backend would refuse by name.
///
/// # Errors
///
/// Returns [`TrainingFileError::NotCsv`] unless `name` ends with `.csv`.
pub fn check_file_name(name: &str) -> Result<(), TrainingFileError> {
    if name.ends_with(".csv") { Ok(()) } else { Err(TrainingFileError::NotCsv) }
}

/// Header, leading rows, and size of a training file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub record_count: usize,
}

impl TrainingPreview {
    /// Parse CSV text into a preview.
    ///
    /// # Errors
    ///
    /// Returns [`TrainingFileError::Empty`] when the text has no header row.
    pub fn parse(text: &str) -> Result<Self, TrainingFileError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut records = parse_records(text).into_iter();
        let headers = records.next().ok_or(TrainingFileError::Empty)?;
        let mut rows = Vec::new();
        let mut record_count = 0;
        for record in records {
            if rows.len() < PREVIEW_ROWS {
                rows.push(record);
            }
            record_count += 1;
        }
        Ok(Self { headers, rows, record_count })
    }

    fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h.trim() == name)
    }

    /// Required columns absent from the header.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS.into_iter().filter(|c| !self.has_column(c)).collect()
    }

    #[must_use]
    pub fn fraud_detection_enabled(&self) -> bool {
        FRAUD_COLUMNS.iter().all(|c| self.has_column(c))
    }

    /// Operator-facing warnings for the preview panel.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let missing = self.missing_required();
        if !missing.is_empty() {
            warnings.push(format!("Missing required column(s): {}. Training will fail.", missing.join(", ")));
        }
        if !self.fraud_detection_enabled() {
            warnings.push(format!(
                "'{}' or '{}' columns missing. Fraud detection disabled.",
                FRAUD_COLUMNS[0], FRAUD_COLUMNS[1]
            ));
        }
        if self.record_count == 0 {
            warnings.push("File has a header but no data rows.".to_owned());
        }
        warnings
    }
}

/// Split CSV text into records, honoring quoted cells with embedded
/// delimiters, doubled quotes, and line breaks. Blank lines are skipped.
fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    cell.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => cell.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut cell)),
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                finish_record(&mut records, &mut record, &mut cell);
            }
            _ => cell.push(c),
        }
    }
    finish_record(&mut records, &mut record, &mut cell);
    records
}

fn finish_record(records: &mut Vec<Vec<String>>, record: &mut Vec<String>, cell: &mut String) {
    if record.is_empty() && cell.is_empty() {
        return;
    }
    record.push(std::mem::take(cell));
    records.push(std::mem::take(record));
}
