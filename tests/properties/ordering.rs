//! Property tests for change ordering.

use proptest::prelude::*;

use filegen::domain::services::select;
use filegen::{
    generate_files, FileChange, FileDefinition, GeneratedFile, GeneratorConfig, Predicate,
    Priority,
};

use crate::support::*;

fn priority() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::Early), Just(Priority::Normal), Just(Priority::Late)]
}

/// Each change appends its own index, so the output spells the run order.
fn tagged_changes(spec: &[(bool, Priority)]) -> Vec<FileChange> {
    spec.iter()
        .enumerate()
        .map(|(index, (targets_a, priority))| {
            let path = if *targets_a { "a" } else { "b" };
            FileChange::replacing(path, Predicate::<String>::always(), move |value: String| {
                format!("{value}{index},")
            })
            .with_priority(*priority)
        })
        .collect()
}

fn expected_order(spec: &[(bool, Priority)], target_a: bool) -> String {
    let mut selected: Vec<(usize, Priority)> = spec
        .iter()
        .enumerate()
        .filter(|(_, (targets_a, _))| *targets_a == target_a)
        .map(|(index, (_, priority))| (index, *priority))
        .collect();
    // Group by priority, then by input index.
    selected.sort_by_key(|(index, priority)| (*priority, *index));
    selected
        .into_iter()
        .map(|(index, _)| format!("{index},"))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Selection keeps exact matches only, grouped by priority,
    /// preserving input order inside each group.
    #[test]
    fn property_selection_is_stable(
        spec in proptest::collection::vec((any::<bool>(), priority()), 0..24)
    ) {
        let changes = tagged_changes(&spec);

        let selected = select(&changes, "a");

        prop_assert!(selected.iter().all(|change| change.path() == "a"));
        prop_assert!(selected.windows(2).all(|pair| pair[0].priority() <= pair[1].priority()));
        prop_assert_eq!(selected.len(), spec.iter().filter(|(a, _)| *a).count());
    }

    /// PROPERTY: Generated output reflects the ordered run for every file.
    #[test]
    fn property_generation_follows_order(
        spec in proptest::collection::vec((any::<bool>(), priority()), 0..24)
    ) {
        let config: GeneratorConfig = GeneratorConfig::new()
            .with_definitions(vec![
                FileDefinition::new("a").with_content(lowercase_content("", truthy())),
                FileDefinition::new("b").with_content(lowercase_content("", truthy())),
            ])
            .with_content_changes(tagged_changes(&spec));

        let generated = generate_files(&config);

        prop_assert_eq!(
            generated,
            Ok(vec![
                GeneratedFile::new("a", expected_order(&spec, true)),
                GeneratedFile::new("b", expected_order(&spec, false)),
            ])
        );
    }

    /// PROPERTY: Without explicit priorities, input order is run order.
    #[test]
    fn property_default_priority_keeps_input_order(count in 0usize..16) {
        let spec: Vec<(bool, Priority)> = (0..count).map(|_| (true, Priority::Normal)).collect();
        let config: GeneratorConfig = GeneratorConfig::new()
            .with_definitions(vec![
                FileDefinition::new("a").with_content(lowercase_content("", truthy())),
            ])
            .with_content_changes(tagged_changes(&spec));

        let expected: String = (0..count).map(|index| format!("{index},")).collect();

        prop_assert_eq!(generate_files(&config), Ok(vec![GeneratedFile::new("a", expected)]));
    }
}
