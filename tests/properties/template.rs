//! Property tests for template extraction.

use std::path::Path;

use proptest::prelude::*;

use rpi_kit::domain::services::{extract_section, extract_target};

fn body_line() -> impl Strategy<Value = String> {
    // Printable lines that are neither delimiters nor markers
    proptest::string::string_regex("[A-Za-z0-9 _:#.\\-]{0,40}")
        .unwrap()
        .prop_filter("not a delimiter", |s| s != "---")
}

fn frontmatter_line() -> impl Strategy<Value = String> {
    body_line().prop_filter("not a target line", |s| !s.starts_with("target:"))
}

fn target_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_.\\-]{0,12}(/[a-z0-9_.\\-]{1,12}){0,3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a well-formed frontmatter always yields its target.
    #[test]
    fn property_extract_target_finds_declared_target(
        before in proptest::collection::vec(frontmatter_line(), 0..4),
        after in proptest::collection::vec(frontmatter_line(), 0..4),
        target in target_path(),
        body in proptest::collection::vec(body_line(), 0..6),
    ) {
        let mut lines = vec!["---".to_string()];
        lines.extend(before);
        lines.push(format!("target: {target}"));
        lines.extend(after);
        lines.push("---".to_string());
        lines.extend(body);
        let content = lines.join("\n");

        let extracted = extract_target(&content, Path::new("t.md"));
        prop_assert_eq!(extracted.ok(), Some(target));
    }

    /// PROPERTY: content between one marker pair comes back line for line.
    #[test]
    fn property_extract_section_returns_marked_lines(
        prefix in proptest::collection::vec(body_line(), 0..4),
        section in proptest::collection::vec(body_line(), 1..8),
        suffix in proptest::collection::vec(body_line(), 0..4),
    ) {
        let mut lines = prefix;
        lines.push("<!-- RPI:START -->".to_string());
        lines.extend(section.iter().cloned());
        lines.push("<!-- RPI:END -->".to_string());
        lines.extend(suffix);

        let expected = format!("{}\n", section.join("\n"));
        prop_assert_eq!(extract_section(&lines.join("\n")), expected);
    }

    /// PROPERTY: extraction never panics on arbitrary input.
    #[test]
    fn property_extraction_never_panics(content in "(?s).{0,300}") {
        let _ = extract_target(&content, Path::new("t.md"));
        let section = extract_section(&content);
        prop_assert!(section.ends_with('\n'));
    }
}
