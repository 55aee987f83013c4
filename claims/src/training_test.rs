use super::*;

const SAMPLE: &str = "Description,Policy_Type,Amount,Customer_Tenure\n\
broken arm after fall,Health,1200,3\n\
\"car stolen, found burned\",Theft,18000,1\n";

#[test]
fn check_file_name_requires_csv_extension() {
    assert_eq!(check_file_name("history.csv"), Ok(()));
    assert_eq!(check_file_name("history.xlsx"), Err(TrainingFileError::NotCsv));
    assert_eq!(check_file_name("csv"), Err(TrainingFileError::NotCsv));
}

#[test]
fn parse_reads_header_and_rows() {
    let preview = TrainingPreview::parse(SAMPLE).expect("preview");
    assert_eq!(preview.headers, ["Description", "Policy_Type", "Amount", "Customer_Tenure"]);
    assert_eq!(preview.record_count, 2);
    assert_eq!(preview.rows[1], ["car stolen, found burned", "Theft", "18000", "1"]);
}

#[test]
fn parse_limits_preview_rows_but_counts_all() {
    let mut text = String::from("Description,Policy_Type\n");
    for i in 0..12 {
        text.push_str(&format!("claim {i},Health\n"));
    }
    let preview = TrainingPreview::parse(&text).expect("preview");
    assert_eq!(preview.rows.len(), PREVIEW_ROWS);
    assert_eq!(preview.record_count, 12);
}

#[test]
fn parse_handles_crlf_bom_and_blank_lines() {
    let text = "\u{feff}Description,Policy_Type\r\n\r\nwater damage,Home\r\n";
    let preview = TrainingPreview::parse(text).expect("preview");
    assert_eq!(preview.headers, ["Description", "Policy_Type"]);
    assert_eq!(preview.record_count, 1);
}

#[test]
fn parse_unescapes_doubled_quotes_and_multiline_cells() {
    let text = "Description,Policy_Type\n\"said \"\"ouch\"\"\nthen left\",Health\n";
    let preview = TrainingPreview::parse(text).expect("preview");
    assert_eq!(preview.rows[0][0], "said \"ouch\"\nthen left");
    assert_eq!(preview.record_count, 1);
}

#[test]
fn parse_rejects_empty_text() {
    assert_eq!(TrainingPreview::parse(""), Err(TrainingFileError::Empty));
    assert_eq!(TrainingPreview::parse("\n\n"), Err(TrainingFileError::Empty));
}

#[test]
fn complete_file_has_no_warnings() {
    let preview = TrainingPreview::parse(SAMPLE).expect("preview");
    assert!(preview.missing_required().is_empty());
    assert!(preview.fraud_detection_enabled());
    assert!(preview.warnings().is_empty());
}

#[test]
fn missing_numeric_columns_disable_fraud_detection() {
    let preview = TrainingPreview::parse("Description,Policy_Type,Amount\nx,Health,1\n").expect("preview");
    assert!(!preview.fraud_detection_enabled());
    assert_eq!(
        preview.warnings(),
        ["'Amount' or 'Customer_Tenure' columns missing. Fraud detection disabled."]
    );
}

#[test]
fn missing_required_columns_are_reported() {
    let preview = TrainingPreview::parse("Description,Amount,Customer_Tenure\nx,1,2\n").expect("preview");
    assert_eq!(preview.missing_required(), ["Policy_Type"]);
    assert_eq!(preview.warnings(), ["Missing required column(s): Policy_Type. Training will fail."]);
}

#[test]
fn header_only_file_warns_about_no_rows() {
    let preview = TrainingPreview::parse("Description,Policy_Type,Amount,Customer_Tenure\n").expect("preview");
    assert_eq!(preview.record_count, 0);
    assert_eq!(preview.warnings(), ["File has a header but no data rows."]);
}
