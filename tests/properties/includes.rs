//! Property tests for include scanning and dependency resolution.

use std::fs;

use proptest::prelude::*;

use texmgr::domain::services::{find_includes, strip_comments};
use texmgr::{DependencyResolver, LocalFs};

fn include_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}(/[a-z]{1,8})?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a directive after an unescaped `%` is never found.
    #[test]
    fn property_commented_directives_are_ignored(
        prefix in "[a-z ]{0,16}",
        name in include_name(),
    ) {
        let contents = format!("{}% \\input{{{}}}\n", prefix, name);
        prop_assert!(find_includes(&contents).is_empty());
    }

    /// PROPERTY: every live directive is found, coerced to `.tex`, in order.
    #[test]
    fn property_live_directives_are_found(names in proptest::collection::vec(include_name(), 0..6)) {
        let contents: String = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let directive = if i % 2 == 0 { "input" } else { "include" };
                format!("\\{}{{{}}} text\n", directive, name)
            })
            .collect();

        let found: Vec<String> = find_includes(&contents)
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        let expected: Vec<String> = names.iter().map(|n| format!("{}.tex", n)).collect();
        prop_assert_eq!(found, expected);
    }

    /// PROPERTY: stripping comments never adds text or lines.
    #[test]
    fn property_strip_comments_shrinks(contents in "(?s).{0,256}") {
        let stripped = strip_comments(&contents);
        prop_assert!(stripped.len() <= contents.len());
        prop_assert_eq!(stripped.split('\n').count(), contents.split('\n').count());
    }

    /// PROPERTY: a chain of includes on disk resolves to every link.
    #[test]
    fn property_include_chain_is_transitive(len in 1usize..6) {
        let dir = tempfile::tempdir().unwrap();
        let path = |i: usize| dir.path().join(format!("part{}.tex", i));
        for i in 0..len {
            let body = if i + 1 < len {
                format!("\\input{{{}}}\n", dir.path().join(format!("part{}", i + 1)).display())
            } else {
                String::from("the end\n")
            };
            fs::write(path(i), body).unwrap();
        }

        let deps = DependencyResolver::new(LocalFs::new()).resolve(&path(0));

        prop_assert_eq!(deps.files.len(), len);
        prop_assert!(deps.unreadable.is_empty());
        for i in 0..len {
            prop_assert!(deps.contains(&path(i)));
        }
    }
}
