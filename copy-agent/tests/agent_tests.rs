//! End-to-end tests for the copywriting agent.

use async_trait::async_trait;
use copy_agent::{CopyAgent, PerformanceMetrics};
use copy_core::{
    BrandGuidelines, CopyConstraints, CopyError, CopyRequest, FormatType, InputValue,
    PLACEHOLDER_COPY, TextGenerator,
};
use indexmap::IndexMap;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

fn brand() -> BrandGuidelines {
    BrandGuidelines::builder("Acme")
        .avoid_words(["cheap"])
        .preferred_words(["premium"])
        .build()
        .unwrap()
}

fn paragraph(min: usize, max: usize) -> CopyConstraints {
    CopyConstraints::builder().min_length(min).max_length(max).build().unwrap()
}

fn text_request(text: &str, constraints: CopyConstraints) -> CopyRequest {
    CopyRequest::builder("Product Launch", constraints)
        .input("main_content", text)
        .build()
        .unwrap()
}

#[test]
fn test_table_has_one_row_per_structured_item() {
    let agent = CopyAgent::new(brand()).unwrap();
    let constraints = CopyConstraints::builder()
        .format(FormatType::Table)
        .min_length(0)
        .build()
        .unwrap();
    let request = CopyRequest::builder("Feature Table", constraints)
        .input("Turbo", json!({"benefit": "Twice the speed"}))
        .input("tagline", "Built for teams")
        .input("Quiet", json!({"noise": "low"}))
        .input("images", json!(["hero.png"]))
        .build()
        .unwrap();

    let copy = agent.generate_copy(&request).unwrap();
    let table = copy.content.as_table().expect("table output");

    assert_eq!(table.columns, vec!["Feature", "Benefit", "Description"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0]["Feature"], "Turbo");
    assert_eq!(table.rows[0]["Benefit"], "Twice the speed");
    assert_eq!(table.rows[1]["Feature"], "Quiet");
    assert_eq!(copy.metadata["format"], "table");
    assert_eq!(copy.metadata["image_count"], 1);
    assert_eq!(copy.metadata["request_type"], "Feature Table");
    assert_eq!(copy.metadata["brand"], "Acme");
}

#[test]
fn test_text_copy_scores_against_brand() {
    let agent = CopyAgent::new(brand()).unwrap();
    let request = text_request("This premium product is not cheap.", paragraph(0, 50));

    let copy = agent.generate_copy(&request).unwrap();

    assert_eq!(
        copy.content.as_text(),
        Some("main_content: This premium product is not cheap.")
    );
    assert_eq!(copy.word_count, 7);
    assert!((copy.compliance_score - 0.95).abs() < 1e-9);
    assert_eq!(copy.metadata["compliance_score"], json!(copy.compliance_score));
}

#[test]
fn test_text_copy_with_key_message_and_call_to_action() {
    let guidelines = BrandGuidelines::builder("Acme")
        .tone("Professional")
        .key_message("Quality you can trust")
        .avoid_words(["trust"])
        .build()
        .unwrap();
    let agent = CopyAgent::new(guidelines).unwrap();
    let constraints = CopyConstraints::builder()
        .min_length(0)
        .max_length(100)
        .call_to_action(true)
        .build()
        .unwrap();
    let request = CopyRequest::builder("Advertisement", constraints)
        .input("main_content", "A reliable solution")
        .context("Spring campaign")
        .build()
        .unwrap();

    let copy = agent.generate_copy(&request).unwrap();

    assert_eq!(
        copy.content.as_text().unwrap(),
        "Quality you can trust main_content: A reliable solution \
         Experience the Acme difference today."
    );
    assert_eq!(copy.word_count, 13);
    // -0.1 for "trust", +0.06 for quality/solution/reliable
    assert!((copy.compliance_score - 0.96).abs() < 1e-9);
    assert_eq!(copy.metadata["context"], "Spring campaign");
}

#[test]
fn test_short_copy_is_padded_with_fillers() {
    let agent = CopyAgent::new(BrandGuidelines::builder("Acme").build().unwrap()).unwrap();
    let request = CopyRequest::builder("Social Media", paragraph(5, 10))
        .input("a", "b")
        .build()
        .unwrap();

    let copy = agent.generate_copy(&request).unwrap();

    assert_eq!(copy.content.as_text(), Some("a: b with Acme for optimal results"));
    assert_eq!(copy.word_count, 7);
}

#[test]
fn test_padding_never_exceeds_max_length() {
    let agent = CopyAgent::new(BrandGuidelines::builder("Acme").build().unwrap()).unwrap();
    let request = CopyRequest::builder("Social Media", paragraph(3, 3))
        .input("a", "b")
        .build()
        .unwrap();

    let copy = agent.generate_copy(&request).unwrap();

    assert_eq!(copy.content.as_text(), Some("a: b with"));
    assert_eq!(copy.word_count, 3);
}

#[test]
fn test_inconsistent_constraints_are_rejected() {
    let agent = CopyAgent::new(brand()).unwrap();
    let request = CopyRequest {
        content_type: "Blog Post".into(),
        input_data: IndexMap::from([("body".to_string(), InputValue::from("hello"))]),
        target_format: CopyConstraints::builder()
            .min_length(20)
            .max_length(5)
            .build_unchecked(),
        context: None,
        reference_copies: None,
    };

    let err = agent.generate_copy(&request).unwrap_err();
    match err {
        CopyError::Validation(e) => assert_eq!(e.field, "max_length"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(agent.performance_metrics().is_empty());
}

#[test]
fn test_request_ids_are_unique() {
    let agent = CopyAgent::new(brand()).unwrap();
    let request = text_request("A faster widget for busy teams", paragraph(0, 50));

    let ids: HashSet<String> = (0..5)
        .map(|_| agent.generate_copy(&request).unwrap().request_id)
        .collect();

    assert_eq!(ids.len(), 5);
    assert!(ids.iter().all(|id| id.starts_with("copy_")));
}

#[test]
fn test_metrics_track_history() {
    let agent = CopyAgent::new(brand()).unwrap();
    assert_eq!(
        agent.performance_metrics(),
        PerformanceMetrics::Empty {
            message: "No copies generated yet".into(),
        }
    );

    let compliant = text_request("This premium product is not cheap.", paragraph(0, 50));
    agent.generate_copy(&compliant).unwrap();
    agent
        .generate_copy(&text_request("Nothing special here", paragraph(0, 50)))
        .unwrap();

    let PerformanceMetrics::Summary {
        total_copies_generated,
        average_compliance_score,
        average_word_count,
        recent_copies,
    } = agent.performance_metrics()
    else {
        panic!("expected summary");
    };
    assert_eq!(total_copies_generated, 2);
    assert!((average_compliance_score - 0.975).abs() < 1e-9);
    assert!((average_word_count - 5.5).abs() < 1e-9);
    assert_eq!(recent_copies, 2);

    let recent = agent.recent(1);
    assert_eq!(recent[0].content.as_text(), Some("main_content: Nothing special here"));
    assert_eq!(agent.content_type_counts()["Product Launch"], 2);

    agent.clear_history();
    assert!(agent.performance_metrics().is_empty());
}

#[test]
fn test_reference_copies_update_patterns() {
    let agent = CopyAgent::new(brand()).unwrap();
    assert!(agent.patterns().is_none());

    let request = CopyRequest::builder("Email Campaign", paragraph(0, 50))
        .input("body", "Spring sale")
        .reference_copies(["Shop now. Save big!", "Limited time only"])
        .build()
        .unwrap();
    agent.generate_copy(&request).unwrap();

    let patterns = agent.patterns().unwrap();
    assert_eq!(patterns.sentences, vec!["Shop now", "Save big", "Limited time only"]);
    assert_eq!(patterns.lengths, vec![4, 3]);
}

#[test]
fn test_agent_is_shareable_across_threads() {
    let agent = Arc::new(CopyAgent::new(brand()).unwrap());
    let request = text_request("A faster widget", paragraph(0, 50));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let agent = Arc::clone(&agent);
            let request = request.clone();
            scope.spawn(move || agent.generate_copy(&request).unwrap());
        }
    });

    assert_eq!(agent.history().len(), 4);
}

#[tokio::test]
async fn test_draft_uses_generator() {
    let agent = CopyAgent::new(brand()).unwrap();
    let request = text_request("A faster widget", CopyConstraints::default());

    let copy = agent.draft_copy(&request).await.unwrap();

    assert_eq!(copy.content.as_text(), Some(PLACEHOLDER_COPY));
    assert_eq!(copy.word_count, 14);
    assert_eq!(copy.metadata["generator"], "placeholder");
    assert_eq!(agent.history().len(), 1);
}

struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _constraints: &CopyConstraints,
    ) -> copy_core::Result<String> {
        Err(CopyError::config("no credentials"))
    }
}

struct EchoGenerator;

#[async_trait]
impl TextGenerator for EchoGenerator {
    fn name(&self) -> &str {
        "echo"
    }

    async fn generate(
        &self,
        prompt: &str,
        _constraints: &CopyConstraints,
    ) -> copy_core::Result<String> {
        Ok(prompt.to_string())
    }
}

#[tokio::test]
async fn test_draft_failure_is_provider_error() {
    let agent = CopyAgent::new(brand()).unwrap().with_generator(Arc::new(FailingGenerator));
    let request = text_request("A faster widget", CopyConstraints::default());

    let err = agent.draft_copy(&request).await.unwrap_err();
    match err {
        CopyError::Provider { provider, message } => {
            assert_eq!(provider, "failing");
            assert!(message.contains("no credentials"));
        }
        other => panic!("expected provider error, got {other:?}"),
    }
    assert!(agent.history().is_empty());
}

#[tokio::test]
async fn test_draft_output_is_normalized() {
    let agent = CopyAgent::new(brand()).unwrap().with_generator(Arc::new(EchoGenerator));
    let request = text_request("A faster widget", paragraph(0, 6));

    let copy = agent.draft_copy(&request).await.unwrap();

    assert_eq!(copy.content.as_text(), Some("Write Product Launch copy for the"));
    assert_eq!(copy.word_count, 6);
    assert_eq!(agent.generator_name(), "echo");
}
