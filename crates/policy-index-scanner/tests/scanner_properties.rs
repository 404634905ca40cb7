//! Property-based tests for filename grouping
//!
//! - Normalization is idempotent
//! - Every generated well-formed name lands in exactly the slot it encodes
//! - The set of populated slots does not depend on listing order

use proptest::prelude::*;
use std::collections::BTreeSet;

use policy_index_scanner::{LanguageSlot, PolicyKind, normalize_app_name, parse_filename, scan};

fn arb_prefix() -> impl Strategy<Value = String> {
    // No leading 'i': the reserved `index` prefix has its own property below.
    "[a-hj-zA-HJ-Z][a-zA-Z0-9]{0,7}(-[a-zA-Z0-9]{1,6}){0,2}"
}

fn arb_kind() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![
        Just(PolicyKind::Privacy),
        Just(PolicyKind::UserAgreement),
        Just(PolicyKind::Support),
    ]
}

fn arb_language() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[a-z]{2}".prop_map(Some),
        "[a-z]{2}-[A-Z][a-z]{3}".prop_map(Some),
    ]
}

fn filename(prefix: &str, kind: PolicyKind, language: Option<&str>) -> String {
    match language {
        Some(language) => format!("{prefix}-{}.{language}.html", kind.as_str()),
        None => format!("{prefix}-{}.html", kind.as_str()),
    }
}

fn slots(names: &[String]) -> BTreeSet<(String, PolicyKind, LanguageSlot)> {
    let outcome = scan(names);
    let mut slots = BTreeSet::new();
    for (app, policies) in outcome.index.iter() {
        for kind in policies.kinds() {
            for language in policies.variants(kind).into_iter().flat_map(|v| v.keys()) {
                slots.insert((app.as_str().to_string(), kind, language.clone()));
            }
        }
    }
    slots
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(prefix in "\\PC{1,24}") {
        let once = normalize_app_name(&prefix);
        let twice = normalize_app_name(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_parsed_app_name_is_a_fixed_point(prefix in "[^iI.\\pC][^.\\pC]{0,15}") {
        if let Some(file) = parse_filename(&format!("{prefix}-privacy.html")) {
            prop_assert_eq!(normalize_app_name(file.app.as_str()), file.app);
        }
    }

    #[test]
    fn prop_case_of_prefix_does_not_matter(prefix in "[a-z][a-z-]{0,15}") {
        prop_assert_eq!(
            normalize_app_name(&prefix),
            normalize_app_name(&prefix.to_uppercase())
        );
    }

    #[test]
    fn prop_well_formed_names_decode_to_their_parts(
        prefix in arb_prefix(),
        kind in arb_kind(),
        language in arb_language(),
    ) {
        let name = filename(&prefix, kind, language.as_deref());
        let file = parse_filename(&name).expect("well-formed name must parse");

        prop_assert_eq!(file.kind, kind);
        prop_assert_eq!(file.language.tag(), language.as_deref());
        prop_assert_eq!(file.app, normalize_app_name(&prefix));
    }

    #[test]
    fn prop_populated_slots_are_order_independent(
        entries in prop::collection::vec((arb_prefix(), arb_kind(), arb_language()), 0..12),
    ) {
        let names: Vec<String> = entries
            .iter()
            .map(|(prefix, kind, language)| filename(prefix, *kind, language.as_deref()))
            .collect();
        let mut reversed = names.clone();
        reversed.reverse();

        prop_assert_eq!(slots(&names), slots(&reversed));
    }

    #[test]
    fn prop_index_prefixed_names_never_indexed(suffix in "[a-z-]{0,10}", kind in arb_kind()) {
        let name = format!("index{suffix}-{}.html", kind.as_str());
        prop_assert!(parse_filename(&name).is_none());
        prop_assert!(scan([name]).index.is_empty());
    }
}

#[test]
fn collision_winner_is_explicit_for_fixed_order() {
    let names = ["My-App-privacy.en.html", "my-app-privacy.en.html", "MY-APP-privacy.en.html"];
    let outcome = scan(names);

    let app = outcome.index.app("My App").expect("application present");
    assert_eq!(
        app.get(PolicyKind::Privacy, &LanguageSlot::Tag("en".to_string())),
        Some("MY-APP-privacy.en.html")
    );
    assert_eq!(outcome.collisions.len(), 2);
    assert_eq!(outcome.collisions[0].winner, "my-app-privacy.en.html");
    assert_eq!(outcome.collisions[1].replaced, "my-app-privacy.en.html");
}
