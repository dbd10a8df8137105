//! Property tests for command placeholder substitution.

use proptest::prelude::*;

use texmgr::{format_command, Document};

fn document() -> impl Strategy<Value = Document> {
    proptest::string::string_regex("[a-z]{1,8}(/[a-z]{1,8}){0,2}")
        .unwrap()
        .prop_map(Document::new)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: templates without braces are returned verbatim.
    #[test]
    fn property_plain_template_is_identity(
        template in "[^{}]{0,64}",
        document in document(),
    ) {
        prop_assert_eq!(format_command(&template, &document), template);
    }

    /// PROPERTY: formatting arbitrary text never panics.
    #[test]
    fn property_format_never_panics(
        template in "(?s).{0,128}",
        document in document(),
    ) {
        let _ = format_command(&template, &document);
    }

    /// PROPERTY: unknown placeholders survive untouched.
    #[test]
    fn property_unknown_tokens_survive(
        token in "[A-Z]{1,10}",
        document in document(),
    ) {
        let template = format!("echo ${{{}}}", token);
        prop_assert_eq!(format_command(&template, &document), template);
    }

    /// PROPERTY: each known placeholder expands to the matching derived name.
    #[test]
    fn property_known_tokens_expand(document in document()) {
        let formatted = format_command("{tex_file}|{file}|{pdf_file}|{name}", &document);
        let expected = format!(
            "{}|{}|{}|{}",
            document.path().display(),
            document.base_name(),
            document.pdf_path().display(),
            document.stem()
        );
        prop_assert_eq!(formatted, expected);
    }
}
