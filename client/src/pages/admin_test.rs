use super::*;

#[test]
fn active_tab_is_primary() {
    assert_eq!(tab_class(true), "btn admin-tab");
    assert_eq!(tab_class(false), "btn btn--secondary admin-tab");
}

#[test]
fn selected_bucket_carries_its_color_modifier() {
    assert_eq!(bucket_class(Bucket::Fraud, true), "bucket-tab bucket-tab--fraud bucket-tab--active");
    assert_eq!(bucket_class(Bucket::Fraud, false), "bucket-tab");
}

#[test]
fn bucket_tab_label_includes_count() {
    let counts = BucketCounts { manual: 4, authentic: 2, fraud: 0 };
    assert_eq!(bucket_tab_label(Bucket::Manual, counts), "✋ Manual Check Needed (4)");
    assert_eq!(bucket_tab_label(Bucket::Fraud, counts), "🚨 Fraud (0)");
}
