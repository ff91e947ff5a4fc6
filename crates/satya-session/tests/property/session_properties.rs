use proptest::prelude::*;
use satya_core::config::SessionConfig;
use satya_core::ServiceOutcome;
use satya_session::view::hash_preview;
use satya_session::{Classification, LedgerEntryView, LifecycleManager, Rejection};
use test_fixtures::make_record;

proptest! {
    #[test]
    fn trusted_iff_strictly_above_seventy(score in 0.0f64..=100.0) {
        let config = SessionConfig::default();
        let view = LedgerEntryView::derive(&make_record(1, score, "h"), &config);
        prop_assert_eq!(view.classification.is_trusted(), score > 70.0);
    }

    #[test]
    fn classification_matches_any_threshold(score in 0.0f64..=100.0, threshold in 0.0f64..=100.0) {
        let trusted = Classification::from_score(score, threshold).is_trusted();
        prop_assert_eq!(trusted, score > threshold);
    }

    #[test]
    fn each_success_grows_ledger_by_one_at_head(
        indices in prop::collection::vec(0u64..10_000, 1..20)
    ) {
        let mut lifecycle = LifecycleManager::new(SessionConfig::default());
        for (n, index) in indices.iter().enumerate() {
            let before = lifecycle.ledger().len();
            let ticket = lifecycle.begin("claim").unwrap();
            lifecycle
                .complete(&ticket, ServiceOutcome::Success(make_record(*index, 50.0, "hash")))
                .unwrap();
            prop_assert_eq!(lifecycle.ledger().len(), before + 1);
            prop_assert_eq!(lifecycle.ledger().get(0).unwrap().record.block_index(), *index);
            prop_assert_eq!(lifecycle.ledger().len(), n + 1);
        }
        let newest_first: Vec<u64> =
            lifecycle.ledger().all().iter().map(|r| r.block_index()).collect();
        let expected: Vec<u64> = indices.iter().rev().copied().collect();
        prop_assert_eq!(newest_first, expected);
    }

    #[test]
    fn failures_never_touch_the_ledger(details in prop::collection::vec(".{0,40}", 1..10)) {
        let mut lifecycle = LifecycleManager::new(SessionConfig::default());
        for detail in details {
            let ticket = lifecycle.begin("claim").unwrap();
            lifecycle.complete(&ticket, ServiceOutcome::logical(detail)).unwrap();
            prop_assert!(lifecycle.ledger().is_empty());
            prop_assert!(lifecycle.state().is_idle());
        }
    }

    #[test]
    fn whitespace_claims_never_issue_a_request(claim in "[ \t\r\n]{0,20}") {
        let mut lifecycle = LifecycleManager::new(SessionConfig::default());
        prop_assert_eq!(lifecycle.begin(&claim), Err(Rejection::EmptyClaim));
        prop_assert_eq!(lifecycle.in_flight(), 0);
        prop_assert_eq!(lifecycle.analytics().submissions, 0);
        prop_assert!(lifecycle.state().is_idle());
    }

    #[test]
    fn hash_preview_is_prefix_plus_ellipsis(hash in "[0-9a-f]{16,64}") {
        let preview = hash_preview(&hash, 16);
        prop_assert_eq!(preview.len(), 19);
        prop_assert!(preview.ends_with("..."));
        prop_assert!(hash.starts_with(&preview[..16]));
    }
}
