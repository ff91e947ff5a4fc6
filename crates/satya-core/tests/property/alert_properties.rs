use proptest::prelude::*;
use satya_core::models::lifecycle::{BACKEND_ALERT_PREFIX, CONNECTIVITY_ALERT};
use satya_core::{AlertKind, FailureReason};

proptest! {
    #[test]
    fn backend_alert_is_prefix_plus_detail(detail in ".{0,120}") {
        let alert = FailureReason::Backend(detail.clone()).alert();
        prop_assert_eq!(alert.kind, AlertKind::Backend);
        prop_assert_eq!(alert.text, format!("{BACKEND_ALERT_PREFIX}{detail}"));
    }

    #[test]
    fn connectivity_alert_never_leaks_reason(reason in "os error [0-9]{2,6}") {
        let alert = FailureReason::Connectivity(reason.clone()).alert();
        prop_assert_eq!(alert.kind, AlertKind::Connectivity);
        prop_assert_eq!(alert.text.as_str(), CONNECTIVITY_ALERT);
        prop_assert!(!alert.text.contains(&reason));
    }
}
