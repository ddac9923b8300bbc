use excise_core::{Anchors, Error, excise};
use proptest::prelude::*;

proptest! {
    #[test]
    fn splice_preserves_prefix_and_suffix(
        prefix in "[a-z \n]{0,40}",
        body in "[a-z \n]{0,40}",
        suffix in "[a-z \n]{0,40}",
        replacement in "[A-Z]{0,10}",
    ) {
        // Markers use characters the generated text never contains.
        let doc = format!("{prefix}<<{body}>>{suffix}");
        let anchors = Anchors::new("<<", ">>").unwrap();

        let excision = excise(&doc, &anchors, &replacement).unwrap();

        prop_assert_eq!(&excision.text, &format!("{prefix}{replacement}{suffix}"));
        prop_assert_eq!(
            excision.text.len(),
            prefix.len() + replacement.len() + suffix.len()
        );
        prop_assert_eq!(excision.removed, format!("<<{body}>>"));
    }

    #[test]
    fn second_run_always_fails(
        prefix in "[a-z]{0,20}",
        body in "[a-z]{0,20}",
        suffix in "[a-z]{0,20}",
    ) {
        let doc = format!("{prefix}<<{body}>>{suffix}");
        let anchors = Anchors::new("<<", ">>").unwrap();

        let first = excise(&doc, &anchors, "").unwrap();
        let second = excise(&first.text, &anchors, "");

        prop_assert!(matches!(second, Err(Error::NotFound(_))));
    }
}
