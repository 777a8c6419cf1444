//! Property tests for the settings merger.

use std::collections::BTreeMap;

use proptest::prelude::*;

use rpi_kit::domain::entities::RequiredSettings;
use rpi_kit::domain::services::merge;

fn required() -> RequiredSettings {
    RequiredSettings::vscode_defaults().with("editor.rulers", serde_json::json!([80, 100]))
}

fn json_object() -> impl Strategy<Value = String> {
    proptest::collection::btree_map("[a-z]{1,8}", any::<i32>(), 0..6).prop_map(|map| {
        let map: BTreeMap<String, i32> = map;
        serde_json::to_string_pretty(&map).unwrap_or_default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging an already merged document changes nothing.
    #[test]
    fn property_merge_is_idempotent(text in "(?s).{0,200}") {
        let settings = required();
        let once = merge(&text, &settings);
        let twice = merge(&once.text, &settings);

        prop_assert!(twice.is_unchanged());
        prop_assert!(twice.inserted.is_empty());
        prop_assert_eq!(twice.text, once.text);
    }

    /// PROPERTY: every byte outside the insertion point survives.
    #[test]
    fn property_merge_preserves_surroundings(text in "(?s).{0,200}") {
        let outcome = merge(&text, &required());
        if let Some(brace) = text.rfind('}') {
            if !outcome.is_unchanged() {
                prop_assert!(outcome.text.starts_with(&text[..brace]));
                prop_assert!(outcome.text.ends_with(&text[brace..]));
            } else {
                prop_assert_eq!(&outcome.text, &text);
            }
        }
    }

    /// PROPERTY: strict JSON objects stay strict JSON and gain every pair.
    #[test]
    fn property_merge_keeps_json_objects_valid(text in json_object()) {
        let settings = required();
        let outcome = merge(&text, &settings);

        let parsed: serde_json::Value = serde_json::from_str(&outcome.text)
            .map_err(|e| TestCaseError::fail(format!("{e}: {}", outcome.text)))?;
        let object = parsed.as_object().cloned().unwrap_or_default();
        for setting in settings.iter() {
            prop_assert_eq!(object.get(setting.key()), Some(setting.value()));
        }
    }

    /// PROPERTY: each missing pair is inserted exactly once.
    #[test]
    fn property_merge_inserts_each_pair_once(text in json_object()) {
        let settings = required();
        let outcome = merge(&text, &settings);

        for setting in settings.iter() {
            prop_assert_eq!(outcome.text.matches(&setting.render()).count(), 1);
        }
    }
}
