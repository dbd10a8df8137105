//! Property tests for compiler output classification.

use proptest::prelude::*;

use texmgr::classify;
use texmgr::domain::services::{has_fatal_error, FATAL_MARKERS};

fn plain_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9 .:]{0,30}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: box warnings are counted, everything else is kept in order.
    #[test]
    fn property_box_warnings_are_counted(
        kept in proptest::collection::vec(plain_line(), 1..6),
        hboxes in 0usize..4,
        vboxes in 0usize..4,
    ) {
        let mut text: Vec<String> = Vec::new();
        for _ in 0..hboxes {
            text.push("Overfull \\hbox (1.0pt too wide) in paragraph".to_string());
        }
        text.extend(kept.iter().cloned());
        for _ in 0..vboxes {
            text.push("Underfull \\vbox (badness 10000) has occurred".to_string());
        }

        let classified = classify(&text.join("\n"));

        prop_assert_eq!(classified.hbox_warnings, hboxes);
        prop_assert_eq!(classified.vbox_warnings, vboxes);
        prop_assert_eq!(classified.lines.iter().map(|l| l.trim()).collect::<Vec<_>>(),
            kept.iter().map(|l| l.trim()).collect::<Vec<_>>());
        prop_assert_eq!(classified.summary().is_some(), hboxes + vboxes > 0);
    }

    /// PROPERTY: fatal detection is exactly marker containment.
    #[test]
    fn property_fatal_iff_marker(
        before in "[a-z ]{0,20}",
        after in "[a-z ]{0,20}",
        marker in proptest::sample::select(FATAL_MARKERS),
    ) {
        let without_marker = format!("{}{}", before, after);
        let with_marker = format!("{}{}{}", before, marker, after);
        prop_assert!(!has_fatal_error(&without_marker));
        prop_assert!(has_fatal_error(&with_marker));
    }
}
