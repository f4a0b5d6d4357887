//! Prompt assembly for model-backed drafts.

use crate::classify::ClassifiedInput;
use crate::format::value_text;
use copy_core::{BrandGuidelines, CopyConstraints};

fn list_line(label: &str, items: &[String]) -> Option<String> {
    if items.is_empty() { None } else { Some(format!("{}: {}", label, items.join(", "))) }
}

/// Build a generation prompt from brand guidelines, classified input and
/// optional request context.
pub fn build_prompt(
    guidelines: &BrandGuidelines,
    content_type: &str,
    input: &ClassifiedInput,
    constraints: &CopyConstraints,
    context: Option<&str>,
) -> String {
    let mut lines = vec![format!(
        "Write {} copy for the brand \"{}\".",
        content_type, guidelines.brand_name
    )];

    lines.extend(list_line("Tone of voice", &guidelines.tone_of_voice));
    lines.extend(list_line("Key messages", &guidelines.key_messaging));
    lines.extend(list_line("Prefer these words", &guidelines.preferred_words));
    lines.extend(list_line("Never use these words", &guidelines.avoid_words));
    if !guidelines.target_audience.is_empty() {
        lines.push(format!("Target audience: {}", guidelines.target_audience));
    }
    for (rule, description) in &guidelines.style_rules {
        lines.push(format!("Style rule ({}): {}", rule, description));
    }

    lines.push(format!(
        "Length: between {} and {} words, {} format, {} tone.",
        constraints.min_length, constraints.max_length, constraints.format_type, constraints.tone
    ));
    if constraints.call_to_action_required {
        lines.push("End with a call to action.".to_string());
    }

    if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
        lines.push(format!("Context: {}", context.trim()));
    }

    if !input.text_blob.is_empty() {
        lines.push(String::new());
        lines.push("Source material:".to_string());
        lines.push(input.text_blob.trim_end().to_string());
    }

    for (key, item) in &input.structured_data {
        let fields: Vec<String> =
            item.iter().map(|(k, v)| format!("{}={}", k, value_text(v))).collect();
        lines.push(format!("- {}: {}", key, fields.join("; ")));
    }

    if !input.image_descriptions.is_empty() {
        let images: Vec<String> = input.image_descriptions.iter().map(value_text).collect();
        lines.push(format!("Images: {}", images.join(", ")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    #[test]
    fn test_prompt_mentions_brand_rules_and_input() {
        let guidelines = BrandGuidelines::builder("Acme")
            .tone("Friendly")
            .avoid_words(["cheap"])
            .style_rule("case", "Sentence case headlines")
            .build()
            .unwrap();
        let constraints = CopyConstraints::builder().call_to_action(true).build().unwrap();

        let mut item = Map::new();
        item.insert("benefit".into(), json!("fast"));
        let mut input = ClassifiedInput {
            text_blob: "main_content: A faster widget\n".into(),
            ..Default::default()
        };
        input.structured_data.insert("Turbo".into(), item);
        input.image_descriptions.push(json!("hero.png"));

        let prompt = build_prompt(
            &guidelines,
            "Product Launch",
            &input,
            &constraints,
            Some(" spring "),
        );

        assert!(prompt.starts_with("Write Product Launch copy for the brand \"Acme\"."));
        assert!(prompt.contains("Tone of voice: Friendly"));
        assert!(prompt.contains("Never use these words: cheap"));
        assert!(prompt.contains("Style rule (case): Sentence case headlines"));
        assert!(prompt.contains("Length: between 10 and 50 words, paragraph format"));
        assert!(prompt.contains("End with a call to action."));
        assert!(prompt.contains("Context: spring"));
        assert!(prompt.contains("main_content: A faster widget"));
        assert!(prompt.contains("- Turbo: benefit=fast"));
        assert!(prompt.contains("Images: hero.png"));
    }

    #[test]
    fn test_minimal_prompt_skips_empty_sections() {
        let guidelines = BrandGuidelines::builder("Acme").build_unchecked();
        let prompt = build_prompt(
            &guidelines,
            "Blog Post",
            &ClassifiedInput::default(),
            &CopyConstraints::default(),
            None,
        );
        assert_eq!(prompt.lines().count(), 2);
        assert!(!prompt.contains("Context"));
    }
}
