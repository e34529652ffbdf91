//! Regeneration action tests.

mod support;

use fresco_core::Entity;
use fresco_interface::Part;
use fresco_pipeline::{
    edit_image, regenerate_character_and_scenario, regenerate_character_from_text,
    regenerate_scenario_from_setting,
};
use support::{
    ImageOutcome, MockImageGenerator, MockReferenceImageGenerator, MockTextGenerator,
    ReferenceOutcome, TestHarness,
};

fn cast() -> Vec<Entity> {
    vec![
        Entity::new("Ada", "A weathered lighthouse keeper in an oilskin coat"),
        Entity::new("The Monster", "A gentle sea creature with kelp-green scales"),
    ]
}

#[tokio::test]
async fn test_regenerate_character_from_image() -> anyhow::Result<()> {
    let response = r#"```json
{
  "updatedScenario": "Ada, now in a red storm coat, keeps the lamp burning.",
  "updatedCharacter": {
    "name": "Ada",
    "description": "A lighthouse keeper in a bright red storm coat"
  }
}
```"#;

    let mut harness = TestHarness::new();
    harness.text = MockTextGenerator::with_responses(&[response]);
    let services = harness.services();

    let update = regenerate_character_and_scenario(
        &services,
        "Ada keeps the lamp burning.",
        "Ada",
        "A weathered lighthouse keeper in an oilskin coat",
        "gs://test-bucket/images/ada-new.png",
        &cast(),
    )
    .await?;

    assert!(update.updated_scenario.contains("red storm coat"));
    assert_eq!(update.updated_character.name, "Ada");

    // Multimodal input: reference image first, then the instructions.
    let request = harness.text.request(0);
    assert_eq!(
        request.parts[0],
        Part::image_uri("gs://test-bucket/images/ada-new.png")
    );
    let Part::Text(prompt) = &request.parts[1] else {
        panic!("expected instruction text");
    };
    assert!(prompt.contains("CHARACTER TO UPDATE (Ada)"));
    assert!(prompt.contains("- The Monster:"));
    assert!(request.response_schema.is_some());
    Ok(())
}

#[tokio::test]
async fn test_regenerate_scenario_from_setting_trims_response() -> anyhow::Result<()> {
    let mut harness = TestHarness::new();
    harness.text =
        MockTextGenerator::with_responses(&["\n  The Beacon now towers over the story.  \n"]);
    let services = harness.services();

    let updated = regenerate_scenario_from_setting(
        &services,
        "The Lighthouse anchors the story.",
        "The Lighthouse",
        "The Beacon",
        "A black iron tower on a cliff",
    )
    .await?;

    assert_eq!(updated, "The Beacon now towers over the story.");
    Ok(())
}

#[tokio::test]
async fn test_regenerate_character_from_text_returns_portrait_and_rewrite()
-> anyhow::Result<()> {
    let mut harness = TestHarness::new();
    harness.text = MockTextGenerator::with_responses(&["Marta now tends the lamp."]);
    let services = harness.services();

    let rework = regenerate_character_from_text(
        &services,
        "Ada keeps the lamp burning.",
        "Ada",
        "Marta",
        "A tall keeper with silver hair",
        "watercolor",
    )
    .await?;

    assert_eq!(rework.updated_scenario, "Marta now tends the lamp.");
    assert!(rework.image_gcs_uri.starts_with("gs://"));

    let (prompt, aspect_ratio) = harness.image.call(0);
    assert!(prompt.contains("shot_type: Medium Shot"));
    assert!(prompt.contains("A tall keeper with silver hair"));
    assert_eq!(aspect_ratio, "1:1");
    Ok(())
}

#[tokio::test]
async fn test_filtered_portrait_fails_regeneration_with_translated_message() {
    let mut harness = TestHarness::new();
    harness.image = MockImageGenerator::with_rules(vec![(
        "silver hair",
        ImageOutcome::Filtered("Support codes: 39322892".to_string()),
    )]);
    let services = harness.services();

    let error = regenerate_character_from_text(
        &services,
        "Ada keeps the lamp burning.",
        "Ada",
        "Marta",
        "A tall keeper with silver hair",
        "watercolor",
    )
    .await
    .unwrap_err();

    let message = format!("{error}");
    assert!(message.contains("generating people"), "{message}");
    // The scenario rewrite never runs when the portrait is rejected.
    assert_eq!(harness.text.call_count(), 0);
}

#[tokio::test]
async fn test_edit_image_round_trip() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let services = harness.services();

    let result = edit_image(
        &services,
        "gs://test-bucket/images/scene-1.png",
        "Make the sky stormier",
    )
    .await;

    assert!(result.is_success());
    let parts = harness.reference_image.call(0);
    assert_eq!(parts[0], Part::image_uri("gs://test-bucket/images/scene-1.png"));
    assert_eq!(parts[1], Part::text("Make the sky stormier"));
    Ok(())
}

#[tokio::test]
async fn test_edit_image_transport_failure_degrades_to_unit_failure() {
    let mut harness = TestHarness::new();
    harness.reference_image = MockReferenceImageGenerator::with_rules(vec![(
        "stormier",
        ReferenceOutcome::Fail("connection reset".to_string()),
    )]);
    let services = harness.services();

    let result = edit_image(
        &services,
        "gs://test-bucket/images/scene-1.png",
        "Make the sky stormier",
    )
    .await;

    assert!(result.is_failure());
    assert!(
        result
            .error_message()
            .unwrap()
            .contains("editing the image")
    );
}
