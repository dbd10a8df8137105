//! Property tests for document path coercion.

use std::path::PathBuf;

use proptest::prelude::*;

use texmgr::domain::entities::{with_tex_ext, Document};

fn relative_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: coercing twice is the same as coercing once.
    #[test]
    fn property_with_tex_ext_is_idempotent(path in relative_path()) {
        let once = with_tex_ext(&path);
        prop_assert_eq!(with_tex_ext(&once), once.clone());
        prop_assert!(once.to_string_lossy().ends_with(".tex"));
    }

    /// PROPERTY: a document named with or without `.tex` is the same document.
    #[test]
    fn property_extension_is_optional(path in relative_path()) {
        prop_assume!(!path.ends_with(".tex"));
        prop_assert_eq!(Document::new(&path), Document::new(format!("{}.tex", path)));
    }

    /// PROPERTY: derived names all come from the same base.
    #[test]
    fn property_derived_names_share_base(path in relative_path()) {
        let document = Document::new(&path);
        let base = document.base_name();

        prop_assert_eq!(PathBuf::from(format!("{}.tex", base)), document.path().to_path_buf());
        prop_assert_eq!(document.pdf_path(), PathBuf::from(format!("{}.pdf", base)));
        prop_assert_eq!(document.artifact("aux"), PathBuf::from(format!("{}.aux", base)));
        prop_assert!(base.ends_with(&document.stem()));
    }
}
