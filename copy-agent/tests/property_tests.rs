//! Property-based tests for the agent pipeline.

use copy_agent::CopyAgent;
use copy_core::{BrandGuidelines, CopyConstraints, CopyRequest, FormatType, InputValue};
use indexmap::IndexMap;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

// ============================================================================
// Generators
// ============================================================================

const COLUMN_POOL: &[&str] = &["Feature", "Benefit", "Description", "Price", "Color"];

fn arb_item() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec(
        (
            prop_oneof![
                Just("benefit"),
                Just("price"),
                Just("color"),
                Just("key_advantage"),
                Just("notes"),
            ],
            "[a-z]{1,8}( [a-z]{1,8}){0,3}",
        ),
        0..4,
    )
    .prop_map(|fields| {
        fields
            .into_iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    })
}

/// Structured items keyed by unique names, in generation order
fn arb_items() -> impl Strategy<Value = IndexMap<String, Map<String, Value>>> {
    prop::collection::vec(("[A-Z][a-z]{2,8}", arb_item()), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn arb_columns() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(COLUMN_POOL, 0..=COLUMN_POOL.len())
        .prop_map(|cols| cols.into_iter().map(str::to_string).collect())
}

fn arb_tone() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Professional".to_string()),
        Just("Friendly".to_string()),
        Just("Casual".to_string()),
    ]
}

fn agent(tones: Vec<String>) -> CopyAgent {
    let guidelines = BrandGuidelines::builder("Acme")
        .tones(tones)
        .key_message("Quality you can trust")
        .build()
        .unwrap();
    CopyAgent::new(guidelines).unwrap()
}

// ============================================================================
// Table properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_table_rows_match_structured_items(
        items in arb_items(),
        columns in arb_columns(),
        tones in prop::collection::vec(arb_tone(), 0..3),
        extra_text in "[a-z ]{0,20}",
    ) {
        let mut builder = CopyConstraints::builder().format(FormatType::Table).min_length(0);
        for column in &columns {
            builder = builder.column(column.clone());
        }
        let constraints = builder.build().unwrap();
        let expected_columns = constraints.effective_columns();

        let mut request = CopyRequest::builder("Feature Table", constraints)
            .input("tagline", extra_text.as_str());
        for (key, item) in &items {
            request = request.input(key.clone(), InputValue::Structured(item.clone()));
        }
        let request = request.build().unwrap();

        let copy = agent(tones).generate_copy(&request).unwrap();
        let table = copy.content.as_table().expect("table output");

        prop_assert_eq!(&table.columns, &expected_columns);
        prop_assert_eq!(table.rows.len(), items.len());
        for (row, key) in table.rows.iter().zip(items.keys()) {
            let row_columns: Vec<&String> = row.keys().collect();
            prop_assert_eq!(row_columns, expected_columns.iter().collect::<Vec<_>>());
            if let Some(cell) = row.get("Feature") {
                prop_assert_eq!(cell, key);
            }
        }
    }
}

// ============================================================================
// Text properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_text_copy_respects_max_length(
        body in "[a-z]{1,8}( [a-z]{1,8}){0,30}",
        bounds in (0usize..15, 1usize..15),
        call_to_action in any::<bool>(),
    ) {
        let (min, max) = if bounds.0 <= bounds.1 { bounds } else { (bounds.1, bounds.0) };
        let constraints = CopyConstraints::builder()
            .min_length(min)
            .max_length(max)
            .call_to_action(call_to_action)
            .build()
            .unwrap();
        let request = CopyRequest::builder("Blog Post", constraints)
            .input("main_content", body.as_str())
            .build()
            .unwrap();

        let copy = agent(Vec::new()).generate_copy(&request).unwrap();

        prop_assert!(copy.word_count <= max, "{} words exceeds max {}", copy.word_count, max);
        prop_assert!((0.0..=1.0).contains(&copy.compliance_score));
    }
}
